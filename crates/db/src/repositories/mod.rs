//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. A pooled connection is held only
//! for the duration of a single call.

pub mod advert_repo;

pub use advert_repo::AdvertRepo;
