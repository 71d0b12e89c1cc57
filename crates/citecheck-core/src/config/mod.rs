pub mod defaults;
pub mod exploration_features;
pub mod validation_config;

pub use exploration_features::ExplorationFeatures;
pub use validation_config::{ConfigOverrides, Strictness, ValidationConfig};
