//! Shared types and utilities for the Fenster desktop shell.
//!
//! This crate provides the configuration system and the serializable types
//! exchanged between the window manager and the shell host.

pub mod config;
pub mod schema;
pub mod wm;

pub use config::{
    ConfigError, FensterConfig, SnapConfig, WindowConfig, config_paths, load_config,
};
pub use schema::{generate_schema, generate_schema_json};
pub use wm::{AnimationConfig, AnimationSettings, EasingFunction, SnapEdge, WindowInfo};
