//! Configuration module
//!
//! Holds the serializable stepper configuration and a read-only JSON loader.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::StepperConfig;
