//! Entity snapshots consumed from the external data layer.
//!
//! All three entities are owned, created, and mutated by the data-access
//! collaborator. Chartview only loads and displays them.

pub mod appointment;
pub mod enums;
pub mod patient;
pub mod prescription;

pub use appointment::Appointment;
pub use enums::{AppointmentStatus, Gender};
pub use patient::Patient;
pub use prescription::{Medication, Prescription};
