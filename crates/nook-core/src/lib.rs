//! Core types for the nook folder search extension.
//!
//! This crate contains the data structures shared between the extension
//! runtime and its tests:
//! - Result items rendered by the launcher host
//! - Activation directives and custom payloads
//! - Preference types
//! - Error types

mod action;
mod config;
mod error;
mod item;

pub use action::{Activation, ActivationPayload, PayloadKind, Response};
pub use config::{config_dir, config_path, Preferences};
pub use error::{ConfigError, SearchError};
pub use item::{icons, ResultItem};
