use crate::models::Reign;

pub fn render_dashboard(date: &str, reign: Reign) -> String {
    page("Throne Room", reign, DASHBOARD_CONTENT, DASHBOARD_SCRIPT).replace("{{DATE}}", date)
}

pub fn render_treasury(coins: u64, reign: Reign) -> String {
    page("Royal Treasury", reign, TREASURY_CONTENT, TREASURY_SCRIPT)
        .replace("{{COINS}}", &coins.to_string())
}

pub fn render_calendar(reign: Reign) -> String {
    page("Royal Calendar", reign, CALENDAR_CONTENT, "")
}

fn page(title: &str, reign: Reign, content: &str, script: &str) -> String {
    SHELL_HTML
        .replace("{{TITLE}}", title)
        .replace("{{REIGN_CLASS}}", reign_class(reign))
        .replace("{{BANNER}}", reign_banner(reign))
        .replace("{{CONTENT}}", content)
        .replace("{{SCRIPT}}", script)
}

fn reign_class(reign: Reign) -> &'static str {
    match reign {
        Reign::King => "reign-king",
        Reign::Queen => "reign-queen",
        Reign::Neutral => "reign-neutral",
    }
}

fn reign_banner(reign: Reign) -> &'static str {
    match reign {
        Reign::King => {
            r#"<div class="banner king">♔ The King's diligence has won the day! The kingdom is draped in Royal Blue! ♔</div>"#
        }
        Reign::Queen => {
            r#"<div class="banner queen">♕ Her Majesty, the Queen, reigns today! All the kingdom celebrates in Pink! ♕</div>"#
        }
        Reign::Neutral => "",
    }
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · The Royal Decree</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@600;700&family=Source+Sans+3:wght@400;600&display=swap');

    :root {
      --parchment: #f8f1e0;
      --ink: #2d2a26;
      --gold: #c9a227;
      --gold-dark: #a07e14;
      --king: #2b6cb0;
      --queen: #d53f8c;
      --card: rgba(255, 255, 255, 0.92);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--parchment);
      color: var(--ink);
      font-family: 'Source Sans 3', 'Trebuchet MS', sans-serif;
      transition: background-color 400ms ease;
    }

    body.reign-king {
      background: #e8f0fa;
    }

    body.reign-queen {
      background: #fbeaf2;
    }

    nav {
      position: sticky;
      top: 0;
      z-index: 50;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 18px;
      padding: 14px 28px;
      background: rgba(255, 255, 255, 0.94);
      border-bottom: 4px solid var(--gold);
      box-shadow: 0 6px 18px rgba(45, 42, 38, 0.08);
    }

    body.reign-king nav {
      border-bottom-color: var(--king);
    }

    body.reign-queen nav {
      border-bottom-color: var(--queen);
    }

    .brand {
      font-family: 'Cormorant Garamond', Georgia, serif;
      font-weight: 700;
      font-size: 1.4rem;
      letter-spacing: 0.06em;
      margin-right: auto;
    }

    .brand .crown {
      color: var(--gold);
      margin-right: 8px;
    }

    nav a {
      color: #6d675f;
      text-decoration: none;
      font-weight: 600;
      font-size: 0.95rem;
    }

    nav a:hover {
      color: var(--ink);
      text-decoration: underline;
      text-decoration-color: var(--gold);
      text-underline-offset: 5px;
    }

    main {
      max-width: 1100px;
      margin: 0 auto;
      padding: 28px 20px 60px;
      display: grid;
      gap: 24px;
    }

    .banner {
      padding: 14px;
      border-radius: 12px;
      text-align: center;
      font-family: 'Cormorant Garamond', Georgia, serif;
      font-weight: 700;
      font-size: 1.15rem;
      border: 1px solid;
    }

    .banner.king {
      background: #dbe9f9;
      border-color: #9dbfe3;
      color: #1d4e89;
    }

    .banner.queen {
      background: #f9dcea;
      border-color: #edaac9;
      color: #99246b;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 22px;
      box-shadow: 0 14px 34px rgba(45, 42, 38, 0.1);
    }

    h1, h2, h3 {
      font-family: 'Cormorant Garamond', Georgia, serif;
      margin: 0;
    }

    .scoreboard {
      border: 2px solid var(--gold);
      text-align: center;
    }

    .scoreboard .tallies {
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 48px;
      margin-top: 14px;
    }

    .tally {
      display: grid;
      gap: 4px;
    }

    .tally .crown {
      font-size: 1.6rem;
      color: #b9b2a7;
    }

    .tally .value {
      font-family: 'Cormorant Garamond', Georgia, serif;
      font-size: 2.6rem;
      font-weight: 700;
      color: #8b857d;
    }

    .tally.leading .value {
      color: var(--gold-dark);
    }

    .tally.king.leading .crown,
    .tally.king.leading .value {
      color: var(--king);
    }

    .tally.queen.leading .crown,
    .tally.queen.leading .value {
      color: var(--queen);
    }

    .tally .label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      color: #8b857d;
    }

    .divider {
      width: 1px;
      height: 56px;
      background: #d9d2c4;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
    }

    .column header {
      display: flex;
      align-items: center;
      gap: 8px;
      padding-bottom: 10px;
      margin-bottom: 12px;
      border-bottom: 4px solid var(--gold);
    }

    .column.king header {
      border-bottom-color: var(--king);
    }

    .column.queen header {
      border-bottom-color: var(--queen);
    }

    .task {
      display: flex;
      gap: 12px;
      align-items: flex-start;
      padding: 12px;
      margin-bottom: 10px;
      background: white;
      border: 1px solid #eee7d8;
      border-left: 4px solid var(--gold);
      border-radius: 10px;
    }

    .task.king {
      border-left-color: var(--king);
    }

    .task.queen {
      border-left-color: var(--queen);
    }

    .task.done {
      opacity: 0.65;
      background: #fdf6e0;
      border-left-color: var(--gold);
    }

    .task.done h4 {
      text-decoration: line-through;
      color: #8b857d;
    }

    .task h4 {
      margin: 0;
      font-family: inherit;
      font-size: 1rem;
    }

    .task p {
      margin: 4px 0 0;
      font-size: 0.82rem;
      color: #8b857d;
    }

    .toggle {
      width: 26px;
      height: 26px;
      flex: none;
      border-radius: 50%;
      border: 2px solid #d9d2c4;
      background: white;
      cursor: pointer;
      color: var(--gold-dark);
      font-size: 0.85rem;
      line-height: 1;
    }

    .toggle:hover {
      border-color: var(--gold);
    }

    .empty {
      text-align: center;
      color: #b9b2a7;
      font-family: 'Cormorant Garamond', Georgia, serif;
      padding: 30px 0;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      background: var(--gold);
      color: white;
      font-weight: 600;
      cursor: pointer;
      box-shadow: 0 8px 18px rgba(201, 162, 39, 0.35);
    }

    button.primary:hover {
      background: var(--gold-dark);
    }

    button.ghost {
      width: 100%;
      padding: 12px;
      border: 2px dashed rgba(201, 162, 39, 0.6);
      border-radius: 10px;
      background: transparent;
      color: var(--gold-dark);
      font-weight: 600;
      cursor: pointer;
    }

    button.ghost:hover {
      background: rgba(201, 162, 39, 0.08);
    }

    .overlay {
      position: fixed;
      inset: 0;
      z-index: 100;
      display: none;
      align-items: center;
      justify-content: center;
      padding: 16px;
      background: rgba(45, 42, 38, 0.55);
    }

    .overlay.open {
      display: flex;
    }

    .dialog {
      width: min(460px, 100%);
      background: white;
      border-radius: 14px;
      overflow: hidden;
      box-shadow: 0 24px 60px rgba(45, 42, 38, 0.3);
    }

    .dialog header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 14px 18px;
      background: var(--parchment);
      border-bottom: 1px solid var(--gold);
    }

    .dialog .body {
      padding: 18px;
      display: grid;
      gap: 14px;
    }

    .dialog label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .dialog input[type='text'],
    .dialog input[type='date'],
    .dialog select,
    .dialog textarea {
      width: 100%;
      padding: 9px;
      border: 1px solid #d9d2c4;
      border-radius: 8px;
      font: inherit;
    }

    .dialog textarea {
      resize: none;
      height: 72px;
    }

    .close {
      border: none;
      background: none;
      font-size: 1.2rem;
      cursor: pointer;
      color: #8b857d;
    }

    .field-row {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .senders {
      display: flex;
      gap: 18px;
      font-size: 0.9rem;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: #6d675f;
    }

    .status[data-type='error'] {
      color: #c0392b;
    }

    .rewards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 18px;
    }

    .reward {
      background: white;
      border: 2px solid #eee7d8;
      border-radius: 14px;
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .reward.unaffordable {
      opacity: 0.55;
      filter: grayscale(0.7);
    }

    .reward .top {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
    }

    .reward .icon {
      font-size: 2rem;
    }

    .reward .cost {
      font-weight: 700;
      color: var(--gold-dark);
    }

    .reward button {
      padding: 9px;
      border-radius: 8px;
      border: 1px solid var(--gold);
      background: var(--parchment);
      font-weight: 600;
      cursor: pointer;
    }

    .reward button:hover:enabled {
      background: var(--gold);
      color: white;
    }

    .reward button:disabled {
      border-color: #d9d2c4;
      background: #f2ede2;
      color: #b9b2a7;
      cursor: not-allowed;
    }

    .purse {
      display: flex;
      justify-content: space-between;
      align-items: center;
      flex-wrap: wrap;
      gap: 14px;
      background: linear-gradient(120deg, #34302a, #4c463d);
      color: var(--parchment);
      border: none;
    }

    .purse .amount {
      font-family: 'Cormorant Garamond', Georgia, serif;
      font-size: 2.4rem;
      font-weight: 700;
      color: var(--gold);
    }

    .calendar-days {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
      margin-top: 18px;
    }

    .calendar-days .day {
      border: 1px solid #eee7d8;
      border-radius: 10px;
      padding: 16px;
      background: white;
    }

    .calendar-days .muted {
      color: #b9b2a7;
      font-size: 0.8rem;
      margin: 6px 0 0;
    }
  </style>
</head>
<body class="{{REIGN_CLASS}}">
  <nav>
    <span class="brand"><span class="crown">♛</span>The Royal Decree</span>
    <a href="/">Throne Room</a>
    <a href="/treasury">Royal Treasury</a>
    <a href="/calendar">Calendar</a>
  </nav>

  <main>
    {{BANNER}}
    {{CONTENT}}
  </main>

  <script>
    {{SCRIPT}}
  </script>
</body>
</html>
"#;

const DASHBOARD_CONTENT: &str = r#"<section class="card scoreboard">
      <h2>Daily Reign · {{DATE}}</h2>
      <div class="tallies">
        <div class="tally king" id="king-tally">
          <span class="crown">♔</span>
          <span class="value" id="king-score">0</span>
          <span class="label">The King</span>
        </div>
        <div class="divider"></div>
        <div class="tally queen" id="queen-tally">
          <span class="crown">♕</span>
          <span class="value" id="queen-score">0</span>
          <span class="label">The Queen</span>
        </div>
      </div>
    </section>

    <section class="columns">
      <div class="card column king">
        <header><span>♔</span><h3>His Majesty's Decrees</h3></header>
        <div id="king-list"></div>
      </div>
      <div class="card column quest">
        <header><span>⚔</span><h3>Royal Quests</h3></header>
        <div id="quest-list"></div>
        <button class="ghost" id="add-task-btn" type="button">+ Add New Task</button>
      </div>
      <div class="card column queen">
        <header><span>♕</span><h3>Her Majesty's Edicts</h3></header>
        <div id="queen-list"></div>
      </div>
    </section>

    <div>
      <button class="primary" id="raven-btn" type="button">🕊 Send Raven</button>
    </div>
    <div class="status" id="status"></div>

    <div class="overlay" id="task-overlay">
      <div class="dialog">
        <header>
          <h3>Draft New Proclamation</h3>
          <button class="close" type="button" data-close="task-overlay">✕</button>
        </header>
        <form class="body" id="task-form">
          <label>Task Title
            <input type="text" id="task-title" required placeholder="e.g. Slay the Dust Bunnies" />
          </label>
          <label>Details (Optional)
            <textarea id="task-desc"></textarea>
          </label>
          <div class="field-row">
            <label>Assign To
              <select id="task-assignee">
                <option value="king">The King</option>
                <option value="queen">The Queen</option>
                <option value="shared" selected>Royal Quest (Shared)</option>
              </select>
            </label>
            <label>Due Date
              <input type="date" id="task-due" />
            </label>
          </div>
          <button class="primary" type="submit">Seal &amp; Publish</button>
        </form>
      </div>
    </div>

    <div class="overlay" id="raven-overlay">
      <div class="dialog">
        <header>
          <h3>Royal Carrier Pigeon</h3>
          <button class="close" type="button" data-close="raven-overlay">✕</button>
        </header>
        <div class="body" id="raven-compose">
          <div class="senders">
            <label><input type="radio" name="sender" value="king" checked /> From King</label>
            <label><input type="radio" name="sender" value="queen" /> From Queen</label>
          </div>
          <textarea id="raven-message" placeholder="Write your royal decree of affection here..."></textarea>
          <button class="ghost" id="raven-generate" type="button">✨ AI Scribe</button>
          <button class="primary" id="raven-send" type="button">🕊 Dispatch Pigeon</button>
        </div>
        <div class="body" id="raven-delivered" hidden>
          <h3>Message Delivered!</h3>
          <p>Your royal decree has been sent across the kingdom.</p>
          <button class="primary" type="button" data-close="raven-overlay">Close</button>
        </div>
      </div>
    </div>"#;

const DASHBOARD_SCRIPT: &str = r#"const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatScore = (value) =>
      Number.isInteger(value) ? value.toString() : value.toFixed(1);

    const renderScores = (scores) => {
      document.getElementById('king-score').textContent = formatScore(scores.king);
      document.getElementById('queen-score').textContent = formatScore(scores.queen);
      document.getElementById('king-tally').classList.toggle('leading', scores.king > scores.queen);
      document.getElementById('queen-tally').classList.toggle('leading', scores.queen > scores.king);
    };

    const taskCard = (task) => {
      const card = document.createElement('div');
      card.className = 'task ' + task.assigned_to + (task.completed ? ' done' : '');

      const toggle = document.createElement('button');
      toggle.className = 'toggle';
      toggle.type = 'button';
      toggle.textContent = task.completed ? '✔' : '';
      toggle.addEventListener('click', () => toggleTask(task.id));

      const body = document.createElement('div');
      const title = document.createElement('h4');
      title.textContent = task.title;
      body.appendChild(title);
      if (task.description) {
        const desc = document.createElement('p');
        desc.textContent = task.description;
        body.appendChild(desc);
      }

      card.appendChild(toggle);
      card.appendChild(body);
      return card;
    };

    const renderColumn = (id, tasks, emptyText) => {
      const list = document.getElementById(id);
      list.innerHTML = '';
      if (!tasks.length && emptyText) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = emptyText;
        list.appendChild(empty);
        return;
      }
      tasks.forEach((task) => list.appendChild(taskCard(task)));
    };

    const renderBoard = (board) => {
      renderScores(board.scores);
      renderColumn('king-list', board.king, 'The King rests.');
      renderColumn('quest-list', board.shared, 'No quests are afoot.');
      renderColumn('queen-list', board.queen, 'The Queen is at leisure.');
    };

    const loadBoard = async () => {
      const res = await fetch('/api/board');
      if (!res.ok) {
        throw new Error('Unable to load the royal board');
      }
      renderBoard(await res.json());
    };

    const toggleTask = async (id) => {
      const res = await fetch('/api/tasks/' + encodeURIComponent(id) + '/toggle', {
        method: 'POST'
      });
      if (!res.ok) {
        setStatus('The scribes misplaced that proclamation.', 'error');
        return;
      }
      renderBoard(await res.json());
    };

    const openOverlay = (id) => document.getElementById(id).classList.add('open');
    const closeOverlay = (id) => document.getElementById(id).classList.remove('open');

    document.querySelectorAll('[data-close]').forEach((button) => {
      button.addEventListener('click', () => closeOverlay(button.dataset.close));
    });

    document.getElementById('add-task-btn').addEventListener('click', () => {
      document.getElementById('task-due').value = '{{DATE}}';
      openOverlay('task-overlay');
    });

    document.getElementById('task-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const payload = {
        title: document.getElementById('task-title').value,
        description: document.getElementById('task-desc').value || null,
        assigned_to: document.getElementById('task-assignee').value,
        due_date: document.getElementById('task-due').value || null
      };

      const res = await fetch('/api/tasks', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });

      if (!res.ok) {
        setStatus(await res.text() || 'The proclamation was rejected.', 'error');
        return;
      }

      renderBoard(await res.json());
      event.target.reset();
      closeOverlay('task-overlay');
      setStatus('Proclamation sealed.', '');
    });

    document.getElementById('raven-btn').addEventListener('click', () => {
      document.getElementById('raven-message').value = '';
      document.getElementById('raven-compose').hidden = false;
      document.getElementById('raven-delivered').hidden = true;
      openOverlay('raven-overlay');
    });

    document.getElementById('raven-generate').addEventListener('click', async () => {
      const button = document.getElementById('raven-generate');
      const sender = document.querySelector('input[name=sender]:checked').value;
      button.disabled = true;
      button.textContent = 'The scribe is writing...';
      try {
        const res = await fetch('/api/raven', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ sender })
        });
        if (!res.ok) {
          throw new Error('The scribe is unavailable');
        }
        const note = await res.json();
        document.getElementById('raven-message').value = note.message;
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        button.disabled = false;
        button.textContent = '✨ AI Scribe';
      }
    });

    document.getElementById('raven-send').addEventListener('click', () => {
      if (!document.getElementById('raven-message').value.trim()) {
        return;
      }
      document.getElementById('raven-compose').hidden = true;
      document.getElementById('raven-delivered').hidden = false;
    });

    loadBoard().catch((err) => setStatus(err.message, 'error'));"#;

const TREASURY_CONTENT: &str = r#"<section class="card purse">
      <div>
        <h2>The Royal Treasury</h2>
        <p>Spend your hard-earned coins on luxuries fit for royalty.</p>
      </div>
      <span class="amount" id="coins">{{COINS}}</span>
    </section>

    <section class="rewards" id="rewards"></section>
    <div class="status" id="status"></div>"#;

const TREASURY_SCRIPT: &str = r#"const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    let treasury = null;

    const rewardCard = (reward, coins) => {
      const affordable = coins >= reward.cost;
      const card = document.createElement('div');
      card.className = 'reward' + (affordable ? '' : ' unaffordable');

      const top = document.createElement('div');
      top.className = 'top';
      const icon = document.createElement('span');
      icon.className = 'icon';
      icon.textContent = reward.icon;
      const cost = document.createElement('span');
      cost.className = 'cost';
      cost.textContent = '🪙 ' + reward.cost;
      top.appendChild(icon);
      top.appendChild(cost);

      const title = document.createElement('h3');
      title.textContent = reward.title;

      const button = document.createElement('button');
      button.type = 'button';
      button.textContent = affordable ? 'Purchase' : 'Need More Gold';
      button.disabled = !affordable;
      button.addEventListener('click', () => purchase(reward));

      card.appendChild(top);
      card.appendChild(title);
      card.appendChild(button);
      return card;
    };

    const renderTreasury = () => {
      document.getElementById('coins').textContent = treasury.coins;
      const grid = document.getElementById('rewards');
      grid.innerHTML = '';
      treasury.rewards.forEach((reward) => grid.appendChild(rewardCard(reward, treasury.coins)));
    };

    const loadTreasury = async () => {
      const res = await fetch('/api/treasury');
      if (!res.ok) {
        throw new Error('Unable to open the treasury');
      }
      treasury = await res.json();
      renderTreasury();
    };

    const purchase = async (reward) => {
      if (!window.confirm('Purchase ' + reward.title + ' for ' + reward.cost + ' coins?')) {
        return;
      }

      const res = await fetch('/api/treasury/spend', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ amount: reward.cost })
      });

      if (!res.ok) {
        setStatus('The treasurer refused the purchase.', 'error');
        return;
      }

      const { coins } = await res.json();
      treasury.coins = coins;
      renderTreasury();
      setStatus('Enjoy your ' + reward.title + '!', '');
    };

    loadTreasury().catch((err) => setStatus(err.message, 'error'));"#;

const CALENDAR_CONTENT: &str = r#"<section class="card" style="text-align: center; padding: 40px;">
      <h2>The Royal Calendar</h2>
      <p>The scribes are still charting the stars for this month.</p>
      <div class="calendar-days">
        <div class="day"><h3>Today</h3><p class="muted">No events scheduled</p></div>
        <div class="day"><h3>Tomorrow</h3><p class="muted">No events scheduled</p></div>
        <div class="day"><h3>Next Week</h3><p class="muted">No events scheduled</p></div>
      </div>
    </section>"#;
