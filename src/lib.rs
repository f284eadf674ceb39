//! # booking-dashboard
//!
//! Data and view core of a booking/appointment dashboard: booking store,
//! per-status statistics, upcoming/past grouping, notifications with
//! read/unread state, and the booking creation workflow.
//!
//! Rendering is left to the client; the core is exposed as a Rust API
//! ([`service::DashboardService`]) and as a JSON HTTP surface ([`api`]).
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── DashboardService (service/)
//!     ├── BookingCreationWorkflow ── BookingSubmitter (service/)
//!     │
//!     ├── BookingRepository, NotificationStore (domain/)
//!     └── BookingStats, BookingPartition (domain/, pure)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
