pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f8fbff;
  --bg-elev-1: #ffffff;
  --bg-elev-2: #edf1f7;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.06);
  --border-strong: rgba(0, 0, 0, 0.12);
  --text: #0c1625;
  --text-dim: #2c3a4f;
  --text-muted: #5b6678;
  --accent: #2563eb;
  --accent-strong: #1d4ed8;
  --surface-hover: rgba(0, 0, 0, 0.04);
  --surface-active: rgba(0, 0, 0, 0.08);
  --shadow-soft: 0 10px 36px rgba(0, 0, 0, 0.14);
  --radius: 10px;
  --radius-pill: 999px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --font-size-xs: 11px;
  --font-size-sm: 13px;
  --font-size-lg: 17px;
  --transition: 140ms ease-out;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-sm);
  line-height: 1.4;
}

button { font-family: var(--font-body); cursor: pointer; }

input {
  background: var(--bg-elev-1);
  border: 1px solid var(--border-strong);
  color: var(--text);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius);
  font-size: var(--font-size-sm);
  outline: none;
  transition: border-color var(--transition), box-shadow var(--transition);
}

input:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.35);
}

.page { padding: var(--space-4); min-height: 100vh; }
.panel { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); box-shadow: var(--shadow-soft); overflow: hidden; }
.flex-row { display: flex; gap: var(--space-2); align-items: center; }
.text-muted { color: var(--text-muted); }

.chart-header { background: var(--bg-elev-2); padding: var(--space-4); border-bottom: 1px solid var(--border-strong); }
.chart-meta { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: var(--space-4); }
.chart-title { font-size: var(--font-size-lg); font-weight: 600; margin: 0; }
.search-form input { width: 12rem; }
.btn-primary { padding: var(--space-2) var(--space-4); border: none; border-radius: var(--radius); background: var(--accent); color: #ffffff; white-space: nowrap; transition: background var(--transition); }
.btn-primary:hover { background: var(--accent-strong); }

.preset-row { display: flex; flex-wrap: wrap; gap: var(--space-2); margin-top: var(--space-4); }
.chip { padding: var(--space-1) var(--space-3); border-radius: var(--radius-pill); background: var(--surface-active); border: 1px solid var(--border); font-size: var(--font-size-sm); color: var(--text-dim); transition: background var(--transition); }
.chip:hover { background: var(--border-strong); }
.chip.active { background: var(--accent); border-color: var(--accent); color: #ffffff; }

.chart-surface { background: var(--bg-elev-1); }
.chart-container { width: 100%; height: 100%; }
"#;
