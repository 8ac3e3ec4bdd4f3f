#![forbid(unsafe_code)]

mod handlers;
mod session;
mod support;

pub use handlers::METHOD_NAMES;
pub use session::Session;
pub use support::{LOG_ENV, PrefsConfig, STORAGE_DIR_ENV, USER_ENV, flag_value, install_tracing};

use cw_storage::SqliteStore;

/// Session-scoped column width calls over one store.
#[derive(Debug)]
pub struct PrefsService {
    store: SqliteStore,
}

impl PrefsService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SqliteStore {
        &mut self.store
    }
}
