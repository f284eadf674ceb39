//! Service layer: business logic orchestration.
//!
//! [`DashboardService`] coordinates the booking and notification stores
//! and owns the dashboard's [`BookingCreationWorkflow`].

pub mod creation;
pub mod dashboard_service;

pub use creation::{
    BookingCreationWorkflow, BookingSubmitter, RepositorySubmitter, SimulatedSubmitter,
    SubmissionOutcome, WorkflowState,
};
pub use dashboard_service::{BookingView, DashboardService, DashboardSnapshot};
