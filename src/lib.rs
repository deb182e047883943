pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod errors;
pub mod geometry;
pub mod model;
pub mod snapshot;
pub mod storage;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use catalog::{Catalog, CatalogEntry};
pub use config::AppConfig;
pub use controller::{MapEditController, MapMode, Notice};
pub use model::{PlacedPlant, PlantId};
pub use storage::{JsonFileStore, MemoryStore, PlantStore};
