//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types already serialize in their wire shape; DTOs here only
//! wrap them with list metadata or display-only values.

pub mod booking_dto;
pub mod notification_dto;

pub use booking_dto::*;
pub use notification_dto::*;
