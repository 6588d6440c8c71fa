//! # Builders
//!
//! Builder patterns for configuring cryptographic operations.
//!
//! ## Modules
//!
//! - [`argon2_builder`] - Builder for Argon2id key derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API with strong defaults and optional customization.

pub mod argon2_builder;
