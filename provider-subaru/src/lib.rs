//! # Subaru Provider
//!
//! Implements the `Make` trait for Subaru vehicles.
//!
//! ## Overview
//!
//! This module provides:
//! - The push-button start procedure used across the Subaru line
//! - Instruction emission through any `InstructionSink`

pub mod make;

pub use make::SubaruMake;
