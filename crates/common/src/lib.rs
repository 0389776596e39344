//! Common utilities and types shared across axe-scan crates.

pub mod config;
pub mod error;
pub mod messages;
pub mod result_type;

pub use config::{load_config, save_config, Config, ConfigChangeError, ConfigPaths, ConfigScope};
pub use error::{AxeScanError, Error, Result};
pub use messages::{MessageKey, Messages};
pub use result_type::ResultType;

/// Version written into every report row.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
