//! Maintenance request desk for a small dormitory facility.
//!
//! The crate owns the in-memory core: bounded identifier spaces, the request
//! registry with its NEW -> ASSIGNED -> DONE lifecycle, the fixed technician
//! roster, specialty-gated assignment, and the pending-request export. The
//! interactive shell lives in `services/console` and talks to this crate
//! through [`desk::MaintenanceDesk`].

pub mod config;
pub mod desk;
pub mod error;
pub mod telemetry;
