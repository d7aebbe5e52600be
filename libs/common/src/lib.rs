//! Common library for the shadow-id model bindings
//!
//! This crate provides the pieces shared by the model crate and the tools
//! built on it: the error taxonomy and decode configuration.

pub mod error;
pub mod settings;

pub use error::{ModelError, ModelResult};
pub use settings::{DecodeConfig, DecodeMode};
