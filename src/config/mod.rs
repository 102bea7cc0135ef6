// src/config/mod.rs
//! Configuration system for credential-armor
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Api, Config, Keys};

mod app;
mod defaults;
