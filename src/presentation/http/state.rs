use crate::{config::Config, infrastructure::storage::traits::SlotStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SlotStore>,
    pub config: Config,
}
