pub mod app;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod rewards;
pub mod scribe;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use scribe::Scribe;
pub use state::AppState;
pub use storage::{load_ledger, resolve_data_path};
