//! # Admission Gate
//!
//! Decides whether an inbound SMS event may proceed to further processing.
//!
//! The gate runs three checks, in order, stopping at the first failure:
//! 1. the event carries a message ID;
//! 2. the [`SessionStateProvider`] reports a logged-in user;
//! 3. the [`LineActivationRegistry`] reports `SIM1` or `SIM2` active.
//!
//! Failures are not errors: the caller gets `false` (or a [`Rejection`]) and operators
//! get one `tracing` record per rejection, `ERROR` for a missing ID and `WARN` otherwise.
//! Nothing is logged for admitted events.
//!
//! Both collaborators are injected and receive the caller's context on every query, so
//! the gate itself holds no state.
//!
//! ## Example
//!
//! ```rust
//! use relay_gate::{AdmissionGate, LineActivationRegistry, SessionStateProvider};
//! use relay_kernel::domain::line::Line;
//!
//! struct Device {
//!     logged_in: bool,
//!     active: [bool; 2],
//! }
//!
//! struct DeviceState;
//!
//! impl SessionStateProvider<Device> for DeviceState {
//!     fn is_logged_in(&self, device: &Device) -> bool {
//!         device.logged_in
//!     }
//! }
//!
//! impl LineActivationRegistry<Device> for DeviceState {
//!     fn active_status(&self, device: &Device, line: Line) -> bool {
//!         device.active[line as usize]
//!     }
//! }
//!
//! let gate = AdmissionGate::new(DeviceState, DeviceState);
//! let device = Device { logged_in: true, active: [false, true] };
//!
//! assert!(gate.is_admissible(&device, Some("msg-1")));
//! assert!(!gate.is_admissible(&device, None));
//! ```

mod admission;
mod collaborators;
mod gate;

pub use crate::admission::{Admission, Rejection};
pub use crate::collaborators::{LineActivationRegistry, SessionStateProvider};
pub use crate::gate::AdmissionGate;
