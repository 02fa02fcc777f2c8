use std::sync::Arc;

use discography_core::AlbumStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn AlbumStore {
        self.store.as_ref()
    }
}
