//! Data-access boundary.
//!
//! The records themselves are owned by an external data layer; Chartview
//! only depends on the fixed query contract below. `MockApi` is the bundled
//! in-memory implementation standing in for a real clinical database.

pub mod mock;

pub use mock::MockApi;

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Appointment, Patient, Prescription};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Fixed query contract against the external data layer.
///
/// All three operations return complete ordered collections; iteration
/// order is owned by the source and is significant for fallback
/// prescription matching.
pub trait RecordSource: Send + Sync {
    /// Full patient collection. The loader resolves a single patient by
    /// matching the identifier client-side, as the original contract has
    /// no by-id lookup.
    fn fetch_patients(&self) -> impl Future<Output = Result<Vec<Patient>, SourceError>> + Send;

    /// All appointments for one patient.
    fn fetch_appointments(
        &self,
        patient_id: &str,
    ) -> impl Future<Output = Result<Vec<Appointment>, SourceError>> + Send;

    /// All prescriptions for one patient.
    fn fetch_prescriptions(
        &self,
        patient_id: &str,
    ) -> impl Future<Output = Result<Vec<Prescription>, SourceError>> + Send;
}

// The HTTP layer shares one source across requests behind an Arc.
impl<S: RecordSource> RecordSource for Arc<S> {
    fn fetch_patients(&self) -> impl Future<Output = Result<Vec<Patient>, SourceError>> + Send {
        (**self).fetch_patients()
    }

    fn fetch_appointments(
        &self,
        patient_id: &str,
    ) -> impl Future<Output = Result<Vec<Appointment>, SourceError>> + Send {
        (**self).fetch_appointments(patient_id)
    }

    fn fetch_prescriptions(
        &self,
        patient_id: &str,
    ) -> impl Future<Output = Result<Vec<Prescription>, SourceError>> + Send {
        (**self).fetch_prescriptions(patient_id)
    }
}
