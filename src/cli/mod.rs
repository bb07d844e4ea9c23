//! CLI infrastructure for the oxo binary
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions, and running evaluation series.

pub mod commands;
pub mod output;
