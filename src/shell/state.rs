use std::sync::Arc;

use crate::modules::projects::core::ports::ProjectRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ProjectRegistry>,
}
