//! Booking creation workflow: draft validation and a single in-flight
//! submission.
//!
//! The workflow is `Idle` until a valid draft is submitted, `Submitting`
//! while the create action runs, and `Idle` again afterwards whatever the
//! outcome. There is no retry and no cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::domain::{
    Booking, BookingDraft, BookingRepository, Catalog, CreateBookingRequest, Provider, UserId,
};
use crate::error::DashboardError;

/// Message shown to the user after an accepted submission.
pub const ACCEPTED_MESSAGE: &str =
    "Your appointment has been scheduled and is pending confirmation.";

/// Workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Ready to accept a submission.
    Idle,
    /// A submission is in flight.
    Submitting,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// The stored booking, when the create action produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    /// User-facing confirmation text.
    pub message: String,
    /// Tells the caller to close the creation surface.
    pub close_dialog: bool,
}

/// The create action invoked for a validated request.
#[async_trait]
pub trait BookingSubmitter: Send + Sync + std::fmt::Debug {
    /// Submits the request. Returns the created booking if the action
    /// stores one.
    ///
    /// # Errors
    ///
    /// Returns a [`DashboardError`] if the create action fails.
    async fn submit(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Option<Booking>, DashboardError>;
}

/// Fixed-latency placeholder that accepts every request without storing it.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedSubmitter {
    /// Accepts after `latency`.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// Fails with `reason` after `latency`.
    #[must_use]
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedSubmitter {
    async fn submit(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Option<Booking>, DashboardError> {
        tokio::time::sleep(self.latency).await;
        match &self.failure {
            Some(reason) => Err(DashboardError::SubmissionFailed(reason.clone())),
            None => {
                tracing::debug!(provider_id = %request.provider_id, "simulated booking accepted");
                Ok(None)
            }
        }
    }
}

/// Stores the booking as `pending` in a [`BookingRepository`] after a
/// fixed latency.
#[derive(Debug)]
pub struct RepositorySubmitter {
    latency: Duration,
    repository: Arc<dyn BookingRepository>,
    catalog: Catalog,
    user_id: UserId,
}

impl RepositorySubmitter {
    /// Creates a submitter that books on behalf of `user_id`.
    #[must_use]
    pub fn new(
        latency: Duration,
        repository: Arc<dyn BookingRepository>,
        catalog: Catalog,
        user_id: UserId,
    ) -> Self {
        Self {
            latency,
            repository,
            catalog,
            user_id,
        }
    }
}

#[async_trait]
impl BookingSubmitter for RepositorySubmitter {
    async fn submit(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Option<Booking>, DashboardError> {
        tokio::time::sleep(self.latency).await;
        let provider = self
            .catalog
            .provider(&request.provider_id)
            .map(Provider::summary);
        let booking = Booking::from_request(request, self.user_id, provider, Utc::now())?;
        let booking = self.repository.create(booking).await?;
        Ok(Some(booking))
    }
}

/// Clears the in-flight flag when dropped, so every exit path returns
/// the workflow to `Idle`.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Creation workflow of one booking dialog.
#[derive(Debug)]
pub struct BookingCreationWorkflow {
    submitter: Arc<dyn BookingSubmitter>,
    submitting: AtomicBool,
    draft: Mutex<BookingDraft>,
}

impl BookingCreationWorkflow {
    /// Creates an idle workflow with an empty draft.
    #[must_use]
    pub fn new(submitter: Arc<dyn BookingSubmitter>) -> Self {
        Self {
            submitter,
            submitting: AtomicBool::new(false),
            draft: Mutex::new(BookingDraft::default()),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> WorkflowState {
        if self.submitting.load(Ordering::Acquire) {
            WorkflowState::Submitting
        } else {
            WorkflowState::Idle
        }
    }

    /// Returns a copy of the current draft.
    pub async fn draft(&self) -> BookingDraft {
        self.draft.lock().await.clone()
    }

    /// Replaces the current draft.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::SubmissionInFlight`] while a submission
    /// is running; the in-flight draft is left alone.
    pub async fn set_draft(&self, draft: BookingDraft) -> Result<(), DashboardError> {
        let mut current = self.draft.lock().await;
        if self.submitting.load(Ordering::Acquire) {
            return Err(DashboardError::SubmissionInFlight);
        }
        *current = draft;
        Ok(())
    }

    /// Submits the current draft.
    ///
    /// # Errors
    ///
    /// - [`DashboardError::SubmissionInFlight`] if a submission is running.
    /// - [`DashboardError::MissingFields`] if a required field is blank.
    /// - [`DashboardError::InvalidRequest`] if the date or times do not
    ///   parse.
    /// - [`DashboardError::SubmissionFailed`] if the create action fails.
    pub async fn submit(&self) -> Result<SubmissionOutcome, DashboardError> {
        self.run(None).await
    }

    /// Replaces the draft with `draft` and submits it. The draft is only
    /// replaced if no submission is running.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit`].
    pub async fn submit_draft(
        &self,
        draft: BookingDraft,
    ) -> Result<SubmissionOutcome, DashboardError> {
        self.run(Some(draft)).await
    }

    async fn run(
        &self,
        replacement: Option<BookingDraft>,
    ) -> Result<SubmissionOutcome, DashboardError> {
        // The flag only goes up while the draft lock is held, so a draft
        // that fails validation never leaves Idle.
        let (request, _in_flight) = {
            let mut draft = self.draft.lock().await;
            if self.submitting.load(Ordering::Acquire) {
                return Err(DashboardError::SubmissionInFlight);
            }
            if let Some(replacement) = replacement {
                *draft = replacement;
            }
            let missing = draft.missing_fields();
            if !missing.is_empty() {
                tracing::debug!(?missing, "booking draft rejected");
                return Err(DashboardError::MissingFields(missing));
            }
            let request = draft.to_request();
            if let Err(err) = request.parse_times() {
                tracing::debug!(error = %err, "booking draft rejected");
                return Err(err);
            }
            if self
                .submitting
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return Err(DashboardError::SubmissionInFlight);
            }
            (request, InFlight(&self.submitting))
        };

        tracing::info!(
            provider_id = %request.provider_id,
            service_type = %request.service_type,
            start = %request.start_time,
            "submitting booking"
        );

        match self.submitter.submit(&request).await {
            Ok(booking) => {
                *self.draft.lock().await = BookingDraft::default();
                if let Some(booking) = &booking {
                    tracing::info!(booking_id = %booking.id, "booking created");
                }
                Ok(SubmissionOutcome {
                    booking,
                    message: ACCEPTED_MESSAGE.to_string(),
                    close_dialog: true,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                Err(match err {
                    DashboardError::SubmissionFailed(_) => err,
                    other => DashboardError::SubmissionFailed(other.to_string()),
                })
            }
        }
    }
}
