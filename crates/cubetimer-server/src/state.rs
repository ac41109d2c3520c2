use crate::store::Store;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self {
            store: Store::new(db),
        }
    }
}
