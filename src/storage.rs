use crate::errors::AppError;
use crate::models::{Assignee, Ledger, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

const SEED_COINS: u64 = 100;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/ledger.json"))
}

/// Reads the persisted ledger, substituting the seed ledger when the file
/// is absent or unreadable. Never fails; the app always starts with some
/// usable state.
pub async fn load_ledger(path: &Path, today: NaiveDate) -> Ledger {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(ledger) => ledger,
            Err(err) => {
                error!("failed to parse ledger file: {err}");
                seed_ledger(today)
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => seed_ledger(today),
        Err(err) => {
            error!("failed to read ledger file: {err}");
            seed_ledger(today)
        }
    }
}

pub async fn persist_ledger(path: &Path, ledger: &Ledger) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(ledger).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// The fixed starting state: three proclamations due today, a modest purse,
/// no score history.
pub fn seed_ledger(today: NaiveDate) -> Ledger {
    let due = today.to_string();
    Ledger {
        tasks: vec![
            seed_task("1", "Conquer the Grocery List", Assignee::King, &due),
            seed_task("2", "Organize the Royal Wardrobe", Assignee::Queen, &due),
            seed_task("3", "Plan the Summer Ball", Assignee::Shared, &due),
        ],
        coins: SEED_COINS,
        daily_scores: BTreeMap::new(),
    }
}

fn seed_task(id: &str, title: &str, assigned_to: Assignee, due_date: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        kind: assigned_to.kind(),
        assigned_to,
        due_date: due_date.to_string(),
        completed: false,
        completed_at: None,
    }
}
