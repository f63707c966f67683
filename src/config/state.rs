// Application state module
// Owns everything a request handler needs, injected behind Arc

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::message::MessageStore;
use crate::vocab::Vocabulary;

/// Application state
///
/// Built once at startup, torn down at process exit. The store and the
/// vocabulary are owned here, not in module-level globals.
pub struct AppState {
    pub config: Config,
    /// Fixed word → clip mapping
    pub vocab: Vocabulary,
    /// In-memory log of accepted messages
    pub store: MessageStore,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            vocab: Vocabulary::builtin(&config.routes.static_route),
            store: MessageStore::new(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
