//! Core shared library for the skycast weather client.
//!
//! This crate exposes the conversion primitives the client depends on:
//! time representations (UNIX epoch, ISO8601 text, calendar values) and
//! temperature scales, plus common errors, configuration loading, JSON
//! helpers and logging setup.

pub mod config;
pub mod convert;
pub mod errors;
pub mod logging;
pub mod serde_utils;

pub use config::SkycastConfig;
pub use errors::{ConvertError, ErrorKind, Result as ConvertResult, SkycastError};
