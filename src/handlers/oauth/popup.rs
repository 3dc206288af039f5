//! Result pages for the OAuth popup.
//!
//! The callback answers with a small HTML page whose inline script relays
//! the outcome to the window that opened the popup, then closes it. Decap
//! CMS listens for a fixed-prefix string message:
//!
//! `authorization:github:<success|error>:<json-payload>`
//!
//! The payload is serde-encoded and everything interpolated into the page
//! goes through context escaping, so a token or upstream error text full
//! of markup cannot terminate the script block or the string literal. The
//! message is scoped to the configured site origin; if there is no opener
//! (direct navigation), the page just stays visible.

use serde::Serialize;

#[derive(Serialize)]
struct TokenPayload<'a> {
    token: &'a str,
    provider: &'a str,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

/// Message relayed to the opener after a successful exchange. The CMS
/// strips the prefix and parses the rest as JSON, so the payload shape and
/// field order are part of the contract.
pub fn success_message(access_token: &str) -> String {
    let payload = TokenPayload {
        token: access_token,
        provider: "github",
    };
    format!(
        "authorization:github:success:{}",
        serde_json::to_string(&payload).unwrap_or_default()
    )
}

/// Failure counterpart of [`success_message`].
pub fn error_message(error: &str) -> String {
    let payload = ErrorPayload { error };
    format!(
        "authorization:github:error:{}",
        serde_json::to_string(&payload).unwrap_or_default()
    )
}

/// Page served with HTTP 200 when the exchange produced a token.
pub fn success_page(access_token: &str, site_url: &str) -> String {
    render_page(
        "Authorization Successful",
        "Authorization successful!",
        "You can close this window.",
        &success_message(access_token),
        site_url,
    )
}

/// Page served with HTTP 500 when the exchange failed. The message is the
/// proximate failure description, not a stack trace.
pub fn error_page(error: &str, site_url: &str) -> String {
    render_page(
        "Authorization Failed",
        "Authorization failed",
        &format!("Error: {}", escape_html(error)),
        &error_message(error),
        site_url,
    )
}

/// `detail` is already HTML; `message` and `site_url` are escaped here for
/// the single-quoted script literals they land in.
fn render_page(title: &str, heading: &str, detail: &str, message: &str, site_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
</head>
<body>
    <h1>{heading}</h1>
    <p>{detail}</p>
    <script>
        if (window.opener) {{
            window.opener.postMessage('{message}', '{origin}');
            window.close();
        }}
    </script>
</body>
</html>
"#,
        message = escape_js_string(message),
        origin = escape_js_string(site_url),
    )
}

/// Escape for a single-quoted JavaScript string literal: the characters
/// that would end or alter the literal (`\`, `'`, line terminators) and
/// `<`, which could otherwise open a `</script>` inside the block. Benign
/// values pass through byte-for-byte.
fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '<' => escaped.push_str("\\u003c"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape for HTML text content.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
