use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the two monarchs sharing the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Queen,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::King => Role::Queen,
            Role::Queen => Role::King,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::King => "King",
            Role::Queen => "Queen",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignee {
    King,
    Queen,
    Shared,
}

impl Assignee {
    /// Category follows the assignment: decrees for the king, edicts for
    /// the queen, quests when the task is shared.
    pub fn kind(self) -> TaskKind {
        match self {
            Assignee::King => TaskKind::Decree,
            Assignee::Queen => TaskKind::Edict,
            Assignee::Shared => TaskKind::Quest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Decree,
    Edict,
    Quest,
}

/// Who reigns today, derived from yesterday's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reign {
    King,
    Queen,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: TaskKind,
    pub assigned_to: Assignee,
    /// ISO `YYYY-MM-DD` calendar date.
    pub due_date: String,
    pub completed: bool,
    /// RFC 3339 moment of completion; `Some` iff `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Per-day point tally. Shared-task completions contribute half a point to
/// each side, so the tallies are fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyScore {
    pub king: f64,
    pub queen: f64,
}

/// The complete persisted application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub tasks: Vec<Task>,
    pub coins: u64,
    pub daily_scores: BTreeMap<String, DailyScore>,
}

/// Static treasury catalog entry. Purchases only touch the coin balance;
/// rewards themselves are never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    pub id: &'static str,
    pub title: &'static str,
    pub cost: u64,
    pub icon: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assigned_to: Assignee,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpendRequest {
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
pub struct RavenRequest {
    pub sender: Role,
}

#[derive(Debug, Serialize)]
pub struct RavenResponse {
    pub sender: Role,
    pub recipient: Role,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub date: String,
    pub reign: Reign,
    pub scores: DailyScore,
    pub king: Vec<Task>,
    pub queen: Vec<Task>,
    pub shared: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct TreasuryResponse {
    pub coins: u64,
    pub rewards: &'static [Reward],
}

#[derive(Debug, Serialize)]
pub struct CoinsResponse {
    pub coins: u64,
}
