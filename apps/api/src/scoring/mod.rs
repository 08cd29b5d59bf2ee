// Match scoring: one throttled LLM call per posting, strict tag parsing,
// graceful per-job degradation.

pub mod prompts;
pub mod scorer;
pub mod throttle;
