mod catalog;
mod page;
mod toolbar;
mod toolbar_state;

pub use page::ArtifactsPage;
