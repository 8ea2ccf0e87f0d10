pub fn render_index(date: &str, threshold: u8) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{THRESHOLD}}", &threshold.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Timetable Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe0ef;
      --ink: #22303c;
      --good: #2d7a4b;
      --warning: #b07c18;
      --danger: #c63b2b;
      --accent: #2f6fed;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(34, 48, 60, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e6eef7 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header { display: flex; flex-direction: column; gap: 6px; }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 { margin: 0 0 12px; font-size: 1.3rem; }

    .subtitle { margin: 0; color: #5b6a77; font-size: 1rem; }

    section {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(34, 48, 60, 0.08);
    }

    .class-row {
      display: flex;
      align-items: center;
      gap: 14px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(34, 48, 60, 0.08);
    }

    .class-row:last-child { border-bottom: none; }

    .class-time {
      background: var(--accent);
      color: white;
      border-radius: 12px;
      padding: 8px 12px;
      font-weight: 600;
      min-width: 64px;
      text-align: center;
    }

    .class-info { flex: 1; }
    .class-info .room { color: #7a8793; font-size: 0.9rem; }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: #8b98a5;
      transition: transform 120ms ease;
    }

    button:active { transform: scale(0.97); }
    button.present { background: var(--good); }
    button.absent { background: var(--danger); }
    .btn-upload { background: var(--accent); }

    table { width: 100%; border-collapse: collapse; }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(34, 48, 60, 0.08);
      font-size: 0.95rem;
    }

    th {
      text-transform: uppercase;
      letter-spacing: 0.1em;
      font-size: 0.75rem;
      color: #7a8793;
    }

    .pct { font-weight: 600; }

    .badge {
      display: inline-block;
      border-radius: 999px;
      padding: 3px 12px;
      font-size: 0.8rem;
      font-weight: 600;
      color: white;
      background: #8b98a5;
    }

    .badge.good { background: var(--good); }
    .badge.warning { background: var(--warning); }
    .badge.danger { background: var(--danger); }

    .edit {
      background: transparent;
      color: var(--accent);
      padding: 4px 8px;
      font-size: 0.85rem;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      border-radius: 12px;
      border: 1px solid rgba(34, 48, 60, 0.2);
      padding: 12px;
      font-family: inherit;
      font-size: 0.9rem;
      resize: vertical;
    }

    .hint { margin: 8px 0 12px; color: #67747f; font-size: 0.88rem; }

    .status { font-size: 0.95rem; color: #67747f; min-height: 1.2em; }
    .status[data-type="error"] { color: var(--danger); }
    .status[data-type="ok"] { color: var(--good); }

    .empty { color: #7a8793; padding: 16px 0; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Timetable Tracker</h1>
      <p class="subtitle">{{DATE}} &middot; attendance target {{THRESHOLD}}%</p>
    </header>

    <section>
      <h2 id="today-title">Today</h2>
      <div id="today-list"><div class="empty">Loading&hellip;</div></div>
    </section>

    <section>
      <h2>Subjects</h2>
      <div id="subjects-area"><div class="empty">Loading&hellip;</div></div>
    </section>

    <section>
      <h2>Upload schedule</h2>
      <p class="hint">
        One class per line: <code>Day, HH:MM, Subject, Room</code> (room optional).
        Uploading replaces the schedule and resets all attendance.
      </p>
      <textarea id="upload-rows" placeholder="Monday, 09:00, Mathematics, A101&#10;Monday, 11:00, Physics, B2"></textarea>
      <p><button class="btn-upload" id="upload-btn" type="button">Replace schedule</button></p>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const todayTitle = document.getElementById('today-title');
    const todayList = document.getElementById('today-list');
    const subjectsArea = document.getElementById('subjects-area');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const markClass = async (cls, currentStatus) => {
      // First tap marks present, tapping again flips to absent.
      const present = currentStatus !== 'present';
      await api('/api/attendance/mark', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ classId: cls.id, subject: cls.subject, present })
      });
      await refresh();
    };

    const renderToday = (data) => {
      todayTitle.textContent = data.day ? `Today · ${data.day}` : 'Today · weekend';
      todayList.innerHTML = '';
      if (!data.classes.length) {
        todayList.innerHTML = '<div class="empty">No classes today.</div>';
        return;
      }
      data.classes.forEach((cls) => {
        const row = document.createElement('div');
        row.className = 'class-row';

        const time = document.createElement('div');
        time.className = 'class-time';
        time.textContent = cls.time;

        const info = document.createElement('div');
        info.className = 'class-info';
        const name = document.createElement('div');
        name.textContent = cls.subject;
        const room = document.createElement('div');
        room.className = 'room';
        room.textContent = cls.room || 'No room';
        info.append(name, room);

        const btn = document.createElement('button');
        btn.className = cls.status === 'none' ? '' : cls.status;
        btn.textContent =
          cls.status === 'present' ? 'Present' : cls.status === 'absent' ? 'Absent' : 'Mark';
        btn.addEventListener('click', () => {
          markClass(cls, cls.status).catch((err) => setStatus(err.message, 'error'));
        });

        row.append(time, info, btn);
        todayList.appendChild(row);
      });
    };

    const editCounters = async (subject) => {
      const total = prompt(`Total classes for ${subject.subject}:`, subject.total);
      if (total === null) return;
      const present = prompt(`Classes attended for ${subject.subject}:`, subject.present);
      if (present === null) return;
      await api('/api/subjects/counters', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          subject: subject.subject,
          total: parseInt(total, 10) || 0,
          present: parseInt(present, 10) || 0
        })
      });
      await refresh();
    };

    const renderSubjects = (data) => {
      subjectsArea.innerHTML = '';
      if (!data.subjects.length) {
        subjectsArea.innerHTML =
          '<div class="empty">No attendance yet. Mark classes from the list above.</div>';
        return;
      }
      const table = document.createElement('table');
      table.innerHTML =
        '<thead><tr><th>Subject</th><th>Attended</th><th>%</th><th>Status</th><th>Outlook</th><th></th></tr></thead>';
      const body = document.createElement('tbody');
      data.subjects.forEach((s) => {
        const tr = document.createElement('tr');
        const outlook =
          s.status === 'unknown'
            ? '—'
            : s.needToAttend > 0
              ? `attend next ${s.needToAttend}`
              : `can miss ${s.canMiss}`;
        tr.innerHTML = `
          <td>${s.subject}</td>
          <td>${s.present} / ${s.total}</td>
          <td class="pct">${s.percentage}%</td>
          <td><span class="badge ${s.status}">${s.status}</span></td>
          <td>${outlook}</td>
        `;
        const actions = document.createElement('td');
        const edit = document.createElement('button');
        edit.className = 'edit';
        edit.textContent = 'Edit';
        edit.addEventListener('click', () => {
          editCounters(s).catch((err) => setStatus(err.message, 'error'));
        });
        actions.appendChild(edit);
        tr.appendChild(actions);
        body.appendChild(tr);
      });
      table.appendChild(body);
      subjectsArea.appendChild(table);
    };

    const parseRows = (text) =>
      text
        .split('\n')
        .map((line) => line.trim())
        .filter((line) => line.length)
        .map((line) => {
          const [day, time, subject, room] = line.split(',').map((part) => (part || '').trim());
          return { day: day || '', time: time || '', subject: subject || '', room: room || '' };
        });

    const uploadSchedule = async () => {
      const entries = parseRows(document.getElementById('upload-rows').value);
      if (!entries.length) {
        setStatus('Nothing to upload', 'error');
        return;
      }
      if (!confirm(`Replace the schedule with ${entries.length} classes and reset attendance?`)) {
        return;
      }
      const result = await api('/api/schedule', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ entries })
      });
      setStatus(`Schedule replaced: ${result.entries.length} classes`, 'ok');
      await refresh();
    };

    const refresh = async () => {
      const [today, subjects] = await Promise.all([api('/api/today'), api('/api/subjects')]);
      renderToday(today);
      renderSubjects(subjects);
    };

    document.getElementById('upload-btn').addEventListener('click', () => {
      uploadSchedule().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
