// Job search: the job-board client seam and the multi-query
// aggregation/dedup/cap orchestrator.

pub mod client;
pub mod orchestrator;
