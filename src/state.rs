use crate::models::Ledger;
use crate::scribe::Scribe;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ledger: Arc<Mutex<Ledger>>,
    pub scribe: Arc<Scribe>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ledger: Ledger, scribe: Scribe) -> Self {
        Self {
            data_path,
            ledger: Arc::new(Mutex::new(ledger)),
            scribe: Arc::new(scribe),
        }
    }
}
