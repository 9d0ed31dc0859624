//! Domain types, errors and validation for the advert service.
//!
//! This crate has no database or HTTP dependencies so the rules it holds
//! can be exercised directly in unit tests.

pub mod advert;
pub mod error;
pub mod types;
