//! School enrollment shaping.

pub mod service;
pub mod types;


pub use service::{EnrollmentService, LatestYear, NO_ENROLLMENT_DATA};
pub use types::*;
