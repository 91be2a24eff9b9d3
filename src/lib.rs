pub mod appearance;
pub mod config;
pub mod store;
pub mod surface;
pub mod viewport_surface;
pub mod controller;

// Export appearance model
pub use appearance::{AppearanceChoice, DisplayDirective, PersistedCode, CodeFormat};

// Export configuration
pub use config::{PreferenceConfig, ConfigError};

// Export persistence
pub use store::{PreferenceStore, MemoryStore, FileStore, StoreError};

// Export surface abstraction and egui implementation
pub use surface::{Surface, SurfaceRegistry, SurfaceId};
pub use viewport_surface::{ViewportSurface, ViewportRegistry};

// Export controller
pub use controller::{AppearanceController, SubscriptionId};
