//! Engine configuration.
//!
//! Admin tooling supplies the engine's policy knobs and seed data
//! (leave types, the holiday calendar) as a YAML file; this module
//! loads and validates it.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
