pub mod curation;
pub mod error;
pub mod fixtures;
pub mod gate;
pub mod models;
pub mod openapi;
pub mod repo;
pub mod routes;
pub mod security;
pub mod tracker;

// Re-export commonly used items for tests / external users
pub use routes::{config, AppState};
pub use security::SecurityHeaders;
pub use tracker::{ScrollSurface, SectionTracker};
