//! Server-rendered HTML pages

use axum::{extract::State, response::Html};

use crate::{error::AppResult, models::Client, AppState};

/// Landing page
pub async fn index() -> Html<String> {
    Html(layout(
        "Biblio",
        r#"<p>Library management.</p>
<ul>
  <li><a href="/clients">Clients</a></li>
  <li><a href="/swagger-ui">API documentation</a></li>
</ul>"#,
    ))
}

/// Table of every registered client
pub async fn clients(State(state): State<AppState>) -> AppResult<Html<String>> {
    let clients = state.services.clients.list_clients().await?;
    Ok(Html(layout("Clients", &clients_table(&clients))))
}

fn clients_table(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "<p>No clients registered.</p>".to_string();
    }

    let mut body = String::from("<table>\n  <tr><th>Card</th><th>Name</th></tr>\n");
    for client in clients {
        body.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td></tr>\n",
            client.client_id,
            escape(&client.name)
        ));
    }
    body.push_str("</table>");
    body
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

/// Escape text for inclusion in HTML element content or attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
