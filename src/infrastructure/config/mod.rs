mod settings;

pub use settings::{LogFormat, LoggingConfig, RenderingConfig, ServerConfig, Settings};
