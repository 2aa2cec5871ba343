// Standalone components (no primitives)
pub mod button;
pub mod form_select;
pub mod input;
pub mod input_group;
pub mod pagination;

// Primitive wrappers
pub mod dropdown_menu;
pub mod toolbar;

pub use button::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use input::*;
pub use input_group::*;
pub use pagination::*;
pub use toolbar::*;
