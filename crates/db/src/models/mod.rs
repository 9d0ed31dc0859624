//! Domain model structs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row. Response bodies are shaped by the API handlers; create payloads are
//! validated in `adboard_core` before they reach the repository.

pub mod advert;
