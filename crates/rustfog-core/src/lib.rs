//! Shared configuration and base error types for RustFog.
//!
//! This crate provides the foundational building blocks used across the
//! RustFog storage crates: endpoint/region configuration loaded from the
//! environment and the base error/result types for infrastructure failures.

mod config;
mod error;

pub use config::RustFogConfig;
pub use error::{RustFogError, RustFogResult};
