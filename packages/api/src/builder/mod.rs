//! Fluent resolve builder

pub mod core;

pub use self::core::*;
