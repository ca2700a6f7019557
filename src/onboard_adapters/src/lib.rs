//! Adapters for the onboard ports.
//!
//! - `controllers`: framework-agnostic controllers built on the core HTTP shapes
//! - `persistence`: account store implementations
//! - `validation`: email validator implementations
//! - `config`: service settings

pub mod config;
pub mod controllers;
pub mod persistence;
pub mod validation;
