mod artifacts;

pub use artifacts::ArtifactsPage;
