//! Page data loader.
//!
//! One loader per page render cycle: issue the needed fetches concurrently,
//! wait for the whole batch to settle, then commit the result as a single
//! atomic state update. Failures are logged and degrade to the empty
//! outcome rather than propagating, so the view never hangs and never
//! distinguishes "load failed" from "no data found".
//!
//! Every cycle carries a generation token; a completion whose token no
//! longer matches the current generation is discarded, so the committed
//! state always reflects the latest requested identifier even when an
//! older in-flight load settles late.

use std::sync::{Mutex, MutexGuard};

use crate::models::{Appointment, Patient, Prescription};
use crate::source::RecordSource;

/// Atomic copy of the loader's view state.
#[derive(Debug, Clone, Default)]
pub struct LoadSnapshot {
    pub loading: bool,
    pub patient: Option<Patient>,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
}

#[derive(Debug, Default)]
struct LoaderState {
    generation: u64,
    loading: bool,
    patient: Option<Patient>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
}

pub struct PageLoader<S> {
    source: S,
    state: Mutex<LoaderState>,
}

impl<S: RecordSource> PageLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(LoaderState {
                loading: true,
                ..LoaderState::default()
            }),
        }
    }

    /// Profile page cycle: only the patient collection is needed.
    ///
    /// An absent identifier (still resolving in the navigation layer) issues
    /// no request and leaves the loading flag set.
    pub async fn load_profile(&self, patient_id: Option<&str>) {
        let Some(id) = patient_id else { return };
        let generation = self.begin();

        match self.source.fetch_patients().await {
            Ok(patients) => {
                let patient = resolve_patient(patients, id);
                self.commit(generation, patient, Vec::new(), Vec::new());
            }
            Err(err) => {
                tracing::error!(patient_id = id, error = %err, "failed to load patient profile");
                self.commit(generation, None, Vec::new(), Vec::new());
            }
        }
    }

    /// History page cycle: patient, appointment, and prescription
    /// collections, fetched concurrently. The batch is all-or-nothing — one
    /// failure degrades the whole cycle to the empty outcome.
    pub async fn load_history(&self, patient_id: Option<&str>) {
        let Some(id) = patient_id else { return };
        let generation = self.begin();

        let (patients, appointments, prescriptions) = tokio::join!(
            self.source.fetch_patients(),
            self.source.fetch_appointments(id),
            self.source.fetch_prescriptions(id),
        );

        let batch = patients.and_then(|p| Ok((p, appointments?, prescriptions?)));
        match batch {
            Ok((patients, appointments, prescriptions)) => {
                let patient = resolve_patient(patients, id);
                self.commit(generation, patient, appointments, prescriptions);
            }
            Err(err) => {
                tracing::error!(patient_id = id, error = %err, "failed to load medical history");
                self.commit(generation, None, Vec::new(), Vec::new());
            }
        }
    }

    pub fn snapshot(&self) -> LoadSnapshot {
        let state = self.lock_state();
        LoadSnapshot {
            loading: state.loading,
            patient: state.patient.clone(),
            appointments: state.appointments.clone(),
            prescriptions: state.prescriptions.clone(),
        }
    }

    /// Start a cycle: bump the generation and raise the loading flag.
    /// Previously committed data stays visible until the new commit lands.
    fn begin(&self) -> u64 {
        let mut state = self.lock_state();
        state.generation += 1;
        state.loading = true;
        state.generation
    }

    fn commit(
        &self,
        generation: u64,
        patient: Option<Patient>,
        appointments: Vec<Appointment>,
        prescriptions: Vec<Prescription>,
    ) {
        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(
                stale = generation,
                current = state.generation,
                "discarding stale load result"
            );
            return;
        }
        state.patient = patient;
        state.appointments = appointments;
        state.prescriptions = prescriptions;
        state.loading = false;
    }

    fn lock_state(&self) -> MutexGuard<'_, LoaderState> {
        // A poisoned lock only means another cycle panicked mid-commit;
        // the state itself is still a usable snapshot.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn resolve_patient(patients: Vec<Patient>, patient_id: &str) -> Option<Patient> {
    patients.into_iter().find(|p| p.id == patient_id)
}

/// The navigation layer may hand over a single identifier or, defensively,
/// a list of candidates. Only the first non-empty one is used.
pub fn select_patient_id(candidates: &[String]) -> Option<&str> {
    candidates
        .iter()
        .map(String::as_str)
        .find(|id| !id.is_empty())
}
