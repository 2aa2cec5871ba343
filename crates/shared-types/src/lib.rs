pub mod artifact;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod search;

pub use artifact::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
