//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::CarritoPaths;
pub use settings::Settings;
