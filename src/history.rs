//! History derivation — joins a patient's appointment and prescription
//! collections into display-ready visit entries, newest first.
//!
//! An appointment belongs to the history once its combined date + time is
//! behind the clock, or once it is explicitly marked completed (a
//! future-dated but completed appointment still counts). Prescription
//! matching is best-effort: a stored appointment link wins; failing that,
//! the first prescription sharing the visit date is attached.

use chrono::NaiveDateTime;

use crate::models::{Appointment, AppointmentStatus, Prescription};

/// One derived history entry: a past appointment and, if one matched, its
/// prescription.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub appointment: Appointment,
    pub prescription: Option<Prescription>,
}

/// Derive the ordered medical history for display.
///
/// `now` is passed in rather than read from the clock so the "past"
/// boundary is deterministic under test.
pub fn derive_history(
    appointments: &[Appointment],
    prescriptions: &[Prescription],
    now: NaiveDateTime,
) -> Vec<HistoryEntry> {
    let mut past: Vec<&Appointment> = appointments
        .iter()
        .filter(|apt| apt.starts_at() < now || apt.status == AppointmentStatus::Completed)
        .collect();

    // Stable sort: appointments sharing a start keep collection order.
    past.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));

    past.into_iter()
        .map(|apt| HistoryEntry {
            appointment: apt.clone(),
            prescription: match_prescription(apt, prescriptions).cloned(),
        })
        .collect()
}

/// Two-stage match: stored appointment link first, then the first
/// prescription (in collection iteration order) sharing the visit date.
fn match_prescription<'a>(
    appointment: &Appointment,
    prescriptions: &'a [Prescription],
) -> Option<&'a Prescription> {
    prescriptions
        .iter()
        .find(|rx| rx.appointment_id.as_deref() == Some(appointment.id.as_str()))
        .or_else(|| prescriptions.iter().find(|rx| rx.date == appointment.date))
}
