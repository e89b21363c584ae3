use crate::models::TimestampRecord;

pub fn render_index(records: &[TimestampRecord]) -> String {
    let log_class = if records.is_empty() { "hidden" } else { "" };
    INDEX_HTML
        .replace("{{COUNT}}", &records.len().to_string())
        .replace("{{LOG_CLASS}}", log_class)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Timestamp Log</title>
  <style>
    :root {
      --bg: #101418;
      --panel: #1a2027;
      --ink: #e8e6e1;
      --muted: #8a939e;
      --accent: #4fc08d;
      --danger: #e05a4e;
      --edge: rgba(232, 230, 225, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px;
    }

    .widget {
      width: min(420px, 100%);
      background: var(--panel);
      border: 1px solid var(--edge);
      border-radius: 16px;
      padding: 32px;
      display: grid;
      gap: 18px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: 1.4rem;
      font-weight: 600;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 14px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: var(--bg);
      background: var(--accent);
      transition: filter 120ms ease;
    }

    button:hover {
      filter: brightness(1.1);
    }

    .btn-quiet {
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--edge);
    }

    .btn-danger {
      background: var(--danger);
      color: var(--ink);
    }

    #timestampDisplay,
    #messageArea {
      min-height: 1.3em;
      font-size: 0.95rem;
      color: var(--accent);
    }

    #messageArea[data-kind="error"] {
      color: var(--danger);
    }

    .hidden {
      display: none;
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.6);
      display: grid;
      place-items: center;
      padding: 24px;
    }

    .modal {
      width: min(560px, 100%);
      max-height: 80vh;
      overflow: auto;
      background: var(--panel);
      border: 1px solid var(--edge);
      border-radius: 16px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th,
    td {
      padding: 8px 10px;
      text-align: left;
      border-bottom: 1px solid var(--edge);
    }

    th {
      color: var(--muted);
      font-weight: 600;
      text-transform: uppercase;
      font-size: 0.75rem;
      letter-spacing: 0.08em;
    }

    .modal-actions {
      display: flex;
      gap: 10px;
      justify-content: flex-end;
    }
  </style>
</head>
<body>
  <main class="widget">
    <header>
      <h1>Timestamp Log</h1>
      <p class="subtitle">{{COUNT}} entries recorded</p>
    </header>

    <form id="record-form" method="post" action="/record">
      <button id="nowButton" type="submit">Record now</button>
    </form>

    <div id="timestampDisplay" class="hidden"></div>

    <button id="logButton" class="btn-quiet {{LOG_CLASS}}" type="button">View log</button>

    <div id="messageArea" class="hidden"></div>
  </main>

  <div id="logView" class="overlay hidden">
    <div class="modal">
      <div id="modalContent"></div>
      <div class="modal-actions">
        <button id="clearLog" class="btn-danger" type="button">Clear log</button>
        <button id="closeModal" class="btn-quiet" type="button">Close</button>
      </div>
    </div>
  </div>

  <script>
    const recordForm = document.getElementById('record-form');
    const logButton = document.getElementById('logButton');
    const logView = document.getElementById('logView');
    const modalContent = document.getElementById('modalContent');
    const closeModal = document.getElementById('closeModal');
    const clearLog = document.getElementById('clearLog');
    const timestampDisplay = document.getElementById('timestampDisplay');
    const messageArea = document.getElementById('messageArea');

    let hideTimer = null;
    let messageTimer = null;

    const formatInstant = (value) => new Date(value).toLocaleString();

    const showMessage = (text, kind) => {
      clearTimeout(messageTimer);
      messageArea.textContent = text;
      messageArea.dataset.kind = kind || '';
      messageArea.classList.remove('hidden');
      messageTimer = setTimeout(() => messageArea.classList.add('hidden'), 3000);
    };

    const renderLogTable = (records) => {
      const rows = records
        .map(
          (rec) =>
            `<tr><td>${formatInstant(rec.timestamp)}</td><td>${formatInstant(rec.scheduled_time)}</td></tr>`
        )
        .join('');
      modalContent.innerHTML = `<table><tr><th>Timestamp</th><th>Scheduled time</th></tr>${rows}</table>`;
    };

    const hideLogView = () => logView.classList.add('hidden');

    recordForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      clearTimeout(hideTimer);
      try {
        const res = await fetch('/api/record', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        const record = await res.json();
        timestampDisplay.textContent = formatInstant(record.timestamp);
        timestampDisplay.classList.remove('hidden');
        logButton.classList.remove('hidden');
        hideTimer = setTimeout(() => timestampDisplay.classList.add('hidden'), 3000);
      } catch (err) {
        console.error('Failed to record timestamp', err);
      }
    });

    logButton.addEventListener('click', async () => {
      try {
        const res = await fetch('/api/log');
        if (!res.ok) {
          throw new Error(await res.text());
        }
        const log = await res.json();
        renderLogTable(log.records);
        logView.classList.remove('hidden');
      } catch (err) {
        console.error('Failed to load the log', err);
      }
    });

    clearLog.addEventListener('click', async () => {
      try {
        const res = await fetch('/api/clear', { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        modalContent.innerHTML = '';
        showMessage('All log entries have been cleared.', 'ok');
      } catch (err) {
        console.error('Failed to clear the log', err);
        showMessage('Failed to clear the log entries.', 'error');
      }
    });

    closeModal.addEventListener('click', hideLogView);

    logView.addEventListener('click', (event) => {
      if (event.target === logView) {
        hideLogView();
      }
    });
  </script>
</body>
</html>
"#;
