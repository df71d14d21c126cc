use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TaskDto {
    id: String,
    title: String,
    completed: bool,
    #[serde(default)]
    completed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScoresDto {
    king: f64,
    queen: f64,
}

#[derive(Debug, Deserialize)]
struct BoardDto {
    date: String,
    reign: String,
    scores: ScoresDto,
    king: Vec<TaskDto>,
    queen: Vec<TaskDto>,
    shared: Vec<TaskDto>,
}

#[derive(Debug, Deserialize)]
struct TreasuryDto {
    coins: u64,
    rewards: Vec<RewardDto>,
}

#[derive(Debug, Deserialize)]
struct RewardDto {
    title: String,
    cost: u64,
}

#[derive(Debug, Deserialize)]
struct CoinsDto {
    coins: u64,
}

#[derive(Debug, Deserialize)]
struct RavenDto {
    recipient: String,
    message: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "royal_decree_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/board")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_royal_decree"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .env_remove("OPENAI_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_board(client: &Client, base_url: &str) -> BoardDto {
    client
        .get(format!("{base_url}/api/board"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn fetch_coins(client: &Client, base_url: &str) -> u64 {
    client
        .get(format!("{base_url}/api/treasury"))
        .send()
        .await
        .unwrap()
        .json::<TreasuryDto>()
        .await
        .unwrap()
        .coins
}

async fn toggle(client: &Client, base_url: &str, id: &str) -> BoardDto {
    client
        .post(format!("{base_url}/api/tasks/{id}/toggle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_board_starts_with_seed_tasks() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let board = fetch_board(&client, &server.base_url).await;
    assert!(!board.date.is_empty());
    assert_eq!(board.reign, "neutral");
    assert!(board.king.iter().any(|t| t.id == "1"));
    assert!(board.queen.iter().any(|t| t.id == "2"));
    assert!(board.shared.iter().any(|t| t.id == "3"));

    let treasury: TreasuryDto = client
        .get(format!("{}/api/treasury", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(treasury.rewards.len(), 5);
    assert!(treasury
        .rewards
        .iter()
        .any(|r| r.title == "Weekend Getaway" && r.cost == 500));
}

#[tokio::test]
async fn http_toggling_a_kings_decree_moves_coins_and_scores() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let coins_before = fetch_coins(&client, &server.base_url).await;
    let scores_before = fetch_board(&client, &server.base_url).await.scores;

    let board = toggle(&client, &server.base_url, "1").await;
    let task = board.king.iter().find(|t| t.id == "1").unwrap();
    assert!(task.completed);
    assert!(task.completed_at.is_some());
    assert_eq!(board.scores.king, scores_before.king + 1.0);
    assert_eq!(board.scores.queen, scores_before.queen);
    assert_eq!(
        fetch_coins(&client, &server.base_url).await,
        coins_before + 10
    );

    let board = toggle(&client, &server.base_url, "1").await;
    let task = board.king.iter().find(|t| t.id == "1").unwrap();
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
    assert_eq!(board.scores.king, scores_before.king);
    assert_eq!(fetch_coins(&client, &server.base_url).await, coins_before);
}

#[tokio::test]
async fn http_shared_quest_pays_bonus_but_reverses_asymmetrically() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let coins_before = fetch_coins(&client, &server.base_url).await;
    let scores_before = fetch_board(&client, &server.base_url).await.scores;

    let board = toggle(&client, &server.base_url, "3").await;
    assert_eq!(board.scores.king, scores_before.king + 0.5);
    assert_eq!(board.scores.queen, scores_before.queen + 0.5);
    assert_eq!(
        fetch_coins(&client, &server.base_url).await,
        coins_before + 15
    );

    // The reversal only takes back the base reward and leaves the half
    // points in place.
    let board = toggle(&client, &server.base_url, "3").await;
    assert_eq!(board.scores.king, scores_before.king + 0.5);
    assert_eq!(board.scores.queen, scores_before.queen + 0.5);
    assert_eq!(
        fetch_coins(&client, &server.base_url).await,
        coins_before + 5
    );
}

#[tokio::test]
async fn http_toggling_an_unknown_id_changes_nothing() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let coins_before = fetch_coins(&client, &server.base_url).await;
    let scores_before = fetch_board(&client, &server.base_url).await.scores;

    let board = toggle(&client, &server.base_url, "no-such-task").await;
    assert_eq!(board.scores.king, scores_before.king);
    assert_eq!(board.scores.queen, scores_before.queen);
    assert_eq!(fetch_coins(&client, &server.base_url).await, coins_before);
}

#[tokio::test]
async fn http_created_task_appears_in_its_column() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let title = format!("Mend the Queen's Banner {}", std::process::id());
    let board: BoardDto = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({
            "title": title,
            "description": "Thread of gold only",
            "assigned_to": "queen"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let created = board.queen.iter().find(|t| t.title == title).unwrap();
    assert!(!created.completed);
    assert!(created.completed_at.is_none());

    let blank = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "title": "   ", "assigned_to": "king" }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_overspending_clamps_the_purse_at_zero() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let coins_before = fetch_coins(&client, &server.base_url).await;
    let spent: CoinsDto = client
        .post(format!("{}/api/treasury/spend", server.base_url))
        .json(&serde_json::json!({ "amount": 7 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(spent.coins, coins_before.saturating_sub(7));

    let drained: CoinsDto = client
        .post(format!("{}/api/treasury/spend", server.base_url))
        .json(&serde_json::json!({ "amount": 999999 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(drained.coins, 0);
}

#[tokio::test]
async fn http_raven_falls_back_without_credentials() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let note: RavenDto = client
        .post(format!("{}/api/raven", server.base_url))
        .json(&serde_json::json!({ "sender": "king" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(note.recipient, "queen");
    assert!(note.message.contains("Queen"));
    assert!(note.message.contains("scribes are currently on break"));
}
