use std::sync::Arc;
use store::Repository;

use crate::auth::SessionKeys;
use crate::settings::Settings;

/// Shared, immutable per-process state handed to every handler.
pub struct AppState {
    pub store: Arc<dyn Repository>,
    pub keys: SessionKeys,
    pub settings: Settings,
}

impl AppState {
    pub fn new(store: Arc<dyn Repository>, settings: Settings) -> Self {
        Self {
            store,
            keys: SessionKeys::new(&settings.session_secret),
            settings,
        }
    }
}
