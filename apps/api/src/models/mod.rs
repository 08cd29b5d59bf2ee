// Shared data contracts for the matching pipeline.
// Serde names follow the wire formats of the model backend and the
// job-board script (camelCase), not Rust field names.

pub mod analysis;
pub mod bundle;
pub mod posting;
