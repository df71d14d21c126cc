use crate::errors::AppError;
use crate::ledger;
use crate::models::{
    AddTaskRequest, Assignee, BoardResponse, CoinsResponse, Ledger, RavenRequest, RavenResponse,
    SpendRequest, Task, TreasuryResponse,
};
use crate::rewards::REWARDS;
use crate::state::AppState;
use crate::storage::persist_ledger;
use crate::ui;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let guard = state.ledger.lock().await;
    Html(ui::render_dashboard(
        &today_string(),
        ledger::reigning_monarch(&guard),
    ))
}

pub async fn treasury_page(State(state): State<AppState>) -> Html<String> {
    let guard = state.ledger.lock().await;
    Html(ui::render_treasury(
        guard.coins,
        ledger::reigning_monarch(&guard),
    ))
}

pub async fn calendar_page(State(state): State<AppState>) -> Html<String> {
    let guard = state.ledger.lock().await;
    Html(ui::render_calendar(ledger::reigning_monarch(&guard)))
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let guard = state.ledger.lock().await;
    Json(board_response(&guard))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let description = payload
        .description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description,
        kind: payload.assigned_to.kind(),
        assigned_to: payload.assigned_to,
        due_date: payload.due_date.unwrap_or_else(today_string),
        completed: false,
        completed_at: None,
    };

    let mut guard = state.ledger.lock().await;
    ledger::add_task(&mut guard, task);
    persist_ledger(&state.data_path, &guard).await?;

    Ok(Json(board_response(&guard)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardResponse>, AppError> {
    let mut guard = state.ledger.lock().await;
    // Unknown ids are a silent no-op; nothing changed, so nothing to write.
    if ledger::toggle_task(&mut guard, &id) {
        persist_ledger(&state.data_path, &guard).await?;
    }

    Ok(Json(board_response(&guard)))
}

pub async fn get_treasury(State(state): State<AppState>) -> Json<TreasuryResponse> {
    let guard = state.ledger.lock().await;
    Json(TreasuryResponse {
        coins: guard.coins,
        rewards: REWARDS,
    })
}

pub async fn spend(
    State(state): State<AppState>,
    Json(payload): Json<SpendRequest>,
) -> Result<Json<CoinsResponse>, AppError> {
    let mut guard = state.ledger.lock().await;
    ledger::spend_coins(&mut guard, payload.amount);
    persist_ledger(&state.data_path, &guard).await?;

    Ok(Json(CoinsResponse { coins: guard.coins }))
}

pub async fn dispatch_raven(
    State(state): State<AppState>,
    Json(payload): Json<RavenRequest>,
) -> Json<RavenResponse> {
    let recipient = payload.sender.other();
    let message = state.scribe.royal_message(payload.sender).await;

    Json(RavenResponse {
        sender: payload.sender,
        recipient,
        message,
    })
}

fn board_response(state: &Ledger) -> BoardResponse {
    let today = Local::now().date_naive();
    let date = today.to_string();
    let scores = state.daily_scores.get(&date).copied().unwrap_or_default();

    BoardResponse {
        reign: ledger::reigning_monarch_on(state, today),
        scores,
        king: collect_column(state, Assignee::King, today),
        queen: collect_column(state, Assignee::Queen, today),
        shared: collect_column(state, Assignee::Shared, today),
        date,
    }
}

fn collect_column(state: &Ledger, assignee: Assignee, today: NaiveDate) -> Vec<Task> {
    ledger::tasks_on_board(state, assignee, today)
        .into_iter()
        .cloned()
        .collect()
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
