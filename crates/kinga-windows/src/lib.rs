//! kinga-windows
//!
//! Time-critical treatment windows after a sexual assault: post-exposure
//! prophylaxis (72 h) and emergency contraception (120 h), classified into
//! urgency tiers and kept fresh by a cancellable periodic recompute.

pub mod config;
pub mod error;
pub mod incident;
pub mod monitor;
pub mod window;

pub use config::WindowConfig;
pub use error::WindowError;
pub use incident::{WindowInputs, parse_incident};
pub use monitor::{Clock, SystemClock, WindowMonitor, WindowUpdate};
pub use window::{DeadlineKind, DeadlineWindow, TreatmentWindows, UrgencyTier, compute_windows};
