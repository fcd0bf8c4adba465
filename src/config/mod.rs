//! Project-level settings loaded from `.iiotstack.toml`.

pub mod settings;

pub use settings::Settings;
