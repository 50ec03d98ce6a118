//! # Ford Provider
//!
//! Implements the `Make` trait for Ford vehicles.
//!
//! ## Overview
//!
//! This module provides:
//! - The keyed-ignition start procedure used across the Ford line
//! - Instruction emission through any `InstructionSink`

pub mod make;

pub use make::FordMake;
