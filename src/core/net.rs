// src/core/net.rs
//
// Blocking JSON POST (minreq + rustls). One request, no retries.

use serde::Serialize;

use crate::error::{DorkError, Result};

const USER_AGENT: &str = concat!("dorkgen/", env!("CARGO_PKG_VERSION"));

/// POST `body` as JSON and return the raw response body.
/// Non-2xx statuses become `DorkError::Status` carrying a body excerpt.
pub fn post_json<B: Serialize>(
    url: &str,
    headers: &[(&str, &str)],
    body: &B,
    timeout_secs: u64,
) -> Result<String> {
    let mut req = minreq::post(url)
        .with_header("User-Agent", USER_AGENT)
        .with_json(body)?;

    for (name, value) in headers {
        req = req.with_header(*name, *value);
    }
    if timeout_secs > 0 {
        req = req.with_timeout(timeout_secs);
    }

    let resp = req.send()?;
    let text = resp.as_str()?.to_string();

    if !(200..300).contains(&resp.status_code) {
        return Err(DorkError::Status {
            code: resp.status_code,
            body: excerpt(&text, 200),
        });
    }
    Ok(text)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        assert_eq!(excerpt("grátis", 3), "grá…");
        assert_eq!(excerpt("ok", 10), "ok");
    }
}
