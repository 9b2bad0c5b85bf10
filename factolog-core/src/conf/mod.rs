mod error;
mod loader;
mod types;


pub use error::ConfigError;
pub use loader::{load_layer, resolve};
pub use types::{ConfigLayer, WatchConfig};
