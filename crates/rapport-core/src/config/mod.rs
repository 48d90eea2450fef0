//! Configuration system for Rapport.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod observability_config;
pub mod profile_config;
pub mod rapport_config;
pub mod storage_config;

pub use observability_config::ObservabilityConfig;
pub use profile_config::ProfileConfig;
pub use rapport_config::{CliOverrides, RapportConfig};
pub use storage_config::StorageConfig;
