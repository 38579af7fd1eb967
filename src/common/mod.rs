//! Common types and utilities shared across framesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The page identifier

pub mod config;
pub mod error;
mod page;

pub use error::{Error, Result};
pub use page::Page;
