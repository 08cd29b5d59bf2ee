use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::scoring::throttle::RateLimiter;
use crate::search::client::JobBoardClient;
use crate::store::ResultStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable job-board seam. Production: ScriptJobBoardClient.
    pub job_board: Arc<dyn JobBoardClient>,
    /// Process-wide scoring throttle; shared so concurrent requests
    /// serialize their scoring load against the one model backend.
    pub limiter: Arc<RateLimiter>,
    pub store: ResultStore,
    pub config: Config,
}
