use crate::models::{Assignee, Ledger, Reign, Task};
use chrono::{DateTime, Duration, Local, NaiveDate};

const COMPLETION_COINS: u64 = 10;
const SHARED_COMPLETION_COINS: u64 = 15;
const ROLE_TASK_POINTS: f64 = 1.0;
const SHARED_TASK_POINTS: f64 = 0.5;

/// Appends a task to the ledger. Input validation (non-empty title) is the
/// HTTP layer's business, not the engine's.
pub fn add_task(ledger: &mut Ledger, task: Task) {
    ledger.tasks.push(task);
}

pub fn toggle_task(ledger: &mut Ledger, id: &str) -> bool {
    toggle_task_at(ledger, id, Local::now())
}

/// Flips a task's completion state and applies coin and score accounting as
/// one transition. Returns `false` (leaving the ledger untouched) when the
/// id is unknown.
///
/// Completing pays 10 coins (15 for a shared task); uncompleting always
/// takes back the base 10. A shared completion adds half a point to each
/// side of today's tally, and uncompleting a shared task does not remove
/// it. Both asymmetries are inherited behavior, kept as-is.
pub fn toggle_task_at(ledger: &mut Ledger, id: &str, now: DateTime<Local>) -> bool {
    let Some(task) = ledger.tasks.iter_mut().find(|task| task.id == id) else {
        return false;
    };

    let completing = !task.completed;
    task.completed = completing;
    task.completed_at = completing.then(|| now.to_rfc3339());
    let assignee = task.assigned_to;

    ledger.coins = if completing {
        let payout = match assignee {
            Assignee::Shared => SHARED_COMPLETION_COINS,
            _ => COMPLETION_COINS,
        };
        ledger.coins.saturating_add(payout)
    } else {
        ledger.coins.saturating_sub(COMPLETION_COINS)
    };

    // Scoring day is the wall clock at toggle time, not the due date.
    let key = date_key(now.date_naive());
    let score = ledger.daily_scores.entry(key).or_default();
    let delta = if completing {
        ROLE_TASK_POINTS
    } else {
        -ROLE_TASK_POINTS
    };
    match assignee {
        Assignee::King => score.king += delta,
        Assignee::Queen => score.queen += delta,
        Assignee::Shared if completing => {
            score.king += SHARED_TASK_POINTS;
            score.queen += SHARED_TASK_POINTS;
        }
        Assignee::Shared => {}
    }

    true
}

/// Decrements the balance, flooring at zero. Overspending is permitted and
/// silently clamps; the treasury UI is what keeps purchases honest.
pub fn spend_coins(ledger: &mut Ledger, amount: u64) {
    ledger.coins = ledger.coins.saturating_sub(amount);
}

pub fn reigning_monarch(ledger: &Ledger) -> Reign {
    reigning_monarch_on(ledger, Local::now().date_naive())
}

/// Derives the reigning monarch from yesterday's tally. Recomputed from the
/// score table on every read; a missing or tied entry yields `Neutral`.
pub fn reigning_monarch_on(ledger: &Ledger, today: NaiveDate) -> Reign {
    let yesterday = today - Duration::days(1);
    match ledger.daily_scores.get(&date_key(yesterday)) {
        Some(score) if score.king > score.queen => Reign::King,
        Some(score) if score.queen > score.king => Reign::Queen,
        _ => Reign::Neutral,
    }
}

/// Tasks an assignee's board column shows for `today`: open tasks due
/// today, plus tasks completed today regardless of due date. Older
/// completed tasks drop out of view but stay in the ledger.
pub fn tasks_on_board<'a>(
    ledger: &'a Ledger,
    assignee: Assignee,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let today_key = date_key(today);
    ledger
        .tasks
        .iter()
        .filter(|task| task.assigned_to == assignee && visible_on(task, &today_key))
        .collect()
}

fn visible_on(task: &Task, today_key: &str) -> bool {
    if task.completed {
        task.completed_at
            .as_deref()
            .map_or(task.due_date == today_key, |at| at.starts_with(today_key))
    } else {
        task.due_date == today_key
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
