// Infrastructure layer (shared components)
pub mod infrastructure;

pub use infrastructure::config;
pub use infrastructure::error;

// Domain layer
pub mod domain;

pub use domain::profile;
pub use domain::template;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod telemetry;
