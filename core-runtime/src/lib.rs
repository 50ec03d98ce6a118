//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the fleet demo:
//! - Logging and tracing infrastructure
//! - Runtime error types
//!
//! ## Overview
//!
//! This crate establishes the logging conventions used throughout the
//! workspace. Diagnostic output is written to stderr; stdout is reserved for
//! the demo binary's result lines.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
