use std::sync::Arc;

use crate::cheer::pipeline::CheerPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything inside is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<CheerPipeline>,
}
