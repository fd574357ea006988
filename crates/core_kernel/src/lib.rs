//! Core Kernel - Foundational types shared by the bill split crates
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and lenient input coercion
//! - Identifiers for bill items and host sessions

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError};
pub use identifiers::{ItemId, SessionId};
pub use error::CoreError;
