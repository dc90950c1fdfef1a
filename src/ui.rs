use crate::models::{ViewState, VisitorView};

pub fn render_index(view: &ViewState, members: &[String]) -> String {
    INDEX_HTML
        .replace("{{WEEK}}", &view.current_week.to_string())
        .replace("{{RECENT_COUNT}}", &view.recent.len().to_string())
        .replace("{{OLDER_COUNT}}", &view.older.len().to_string())
        .replace("{{RECENT}}", &render_visitors(&view.recent))
        .replace("{{OLDER}}", &render_visitors(&view.older))
        .replace("{{MEMBERS}}", &render_members(members))
}

fn render_visitors(visitors: &[VisitorView]) -> String {
    if visitors.is_empty() {
        return r#"<p class="empty">No visitors here yet.</p>"#.to_string();
    }

    visitors
        .iter()
        .map(|visitor| {
            let class = if visitor.present { "visitor present" } else { "visitor" };
            let detail = match (&visitor.timestamp, visitor.last_week) {
                (Some(stamp), _) => format!("Checked in {}", escape_html(stamp)),
                (None, Some(week)) => format!("Last recorded week {week}"),
                (None, None) => "No attendance yet".to_string(),
            };
            format!(
                r#"<form method="post" action="/visitors/toggle">
        <input type="hidden" name="id" value="{id}" />
        <button class="{class}" type="submit">
          <span class="visitor-name">{name}</span>
          <span class="visitor-detail">{detail}</span>
        </button>
      </form>"#,
                id = escape_html(&visitor.id),
                name = escape_html(&visitor.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn render_members(members: &[String]) -> String {
    if members.is_empty() {
        return r#"<p class="empty">No members on the roster.</p>"#.to_string();
    }

    let items: Vec<_> = members
        .iter()
        .map(|name| format!("<li>{}</li>", escape_html(name)))
        .collect();
    format!("<ul class=\"roster\">{}</ul>", items.join(""))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Visitor Attendance</title>
  <style>
    :root {
      --bg: #eef5f8;
      --ink: #26323a;
      --accent: #61a3ba;
      --muted: #d9e0e4;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(38, 50, 58, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 20px;
      animation: rise 500ms ease;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 12px;
    }

    h1, h2 {
      margin: 0;
    }

    .subtitle, .empty {
      margin: 0;
      color: #5d6a72;
    }

    input {
      border: 1px solid #c9d3d8;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
      width: 100%;
    }

    input:focus {
      outline: none;
      border-color: var(--accent);
    }

    button {
      border: 0;
      border-radius: 12px;
      font: inherit;
      font-weight: 700;
      cursor: pointer;
      width: 100%;
    }

    .btn-add {
      background: var(--accent);
      color: #fff;
      padding: 12px 20px;
    }

    .visitor {
      background: var(--muted);
      color: #fff;
      padding: 12px 16px;
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
      font-size: 1.2rem;
    }

    .visitor:hover, .visitor.present {
      background: var(--accent);
    }

    .visitor-detail {
      font-size: 0.8rem;
      font-weight: 400;
    }

    .roster {
      margin: 0;
      padding-left: 20px;
      columns: 2;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Visitor Attendance</h1>
      <p class="subtitle">Week {{WEEK}}. Tap a visitor to mark them present or absent for this week.</p>
    </header>
    <section class="card">
      <h2>Add New Visitor</h2>
      <form method="post" action="/visitors/add" class="card-form">
        <input type="text" name="name" placeholder="Visitor Name" required />
        <input type="text" name="address" placeholder="Visitor Address" />
        <input type="text" name="invitedBy" placeholder="Invited By" />
        <input type="text" name="contactNumber" placeholder="Contact Number" />
        <button class="btn-add" type="submit">+ Add Visitor</button>
      </form>
    </section>
    <section class="card">
      <h2>Recent Visitors ({{RECENT_COUNT}})</h2>
      {{RECENT}}
    </section>
    <section class="card">
      <h2>Older Visitors ({{OLDER_COUNT}})</h2>
      {{OLDER}}
    </section>
    <section class="card">
      <h2>Members</h2>
      {{MEMBERS}}
    </section>
  </main>
</body>
</html>
"#;
