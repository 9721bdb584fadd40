//! # Reflex Core
//!
//! The domain layer of the Reflex service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;

pub use error::StoreError;
