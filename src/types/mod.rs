//! Type definitions module
//!
//! Health profile, recommendation records and raw answer helpers.

pub mod answer;
pub mod profile;
pub mod recommendation;

// Re-export commonly used types
pub use answer::{is_yes, parse_integer};
pub use profile::HealthProfile;
pub use recommendation::{Priority, VaccineRecommendation};
