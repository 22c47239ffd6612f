use crate::config::Config;
use crate::metrics::HitCounter;
use crate::models::DynStore;
use std::sync::Arc;

/// State shared by every handler.
///
/// Everything here is behind an `Arc`, so cloning it per request is cheap.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub store: DynStore,
    pub hits: Arc<HitCounter>,
}
