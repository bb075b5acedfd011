//! Handle sanitization for untrusted requests.

use persona_core::{normalize_handle, Error, Result};

/// Markup and script fragments never accepted inside a handle
const BLOCKED_FRAGMENTS: &[&str] = &["script", "javascript", "onerror", "onload"];

fn invalid(handle: &str, reason: impl Into<String>) -> Error {
    Error::InvalidHandle {
        handle: handle.to_string(),
        reason: reason.into(),
    }
}

/// Trim, strip leading `@`s and check the handle is `[A-Za-z0-9_]{1,max_len}`
pub fn sanitize_handle(raw: &str, max_len: usize) -> Result<String> {
    let handle = normalize_handle(raw);

    if handle.is_empty() {
        return Err(Error::MalformedInput("handle is required".to_string()));
    }
    if handle.chars().count() > max_len {
        return Err(invalid(handle, format!("longer than {max_len} characters")));
    }
    if let Some(c) = handle
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(invalid(
            handle,
            format!("unexpected character {c:?}; only letters, digits and underscores are allowed"),
        ));
    }

    let lower = handle.to_ascii_lowercase();
    if let Some(fragment) = BLOCKED_FRAGMENTS.iter().find(|f| lower.contains(*f)) {
        return Err(invalid(handle, format!("contains blocked fragment `{fragment}`")));
    }

    Ok(handle.to_string())
}

/// Key under which results for a handle are cached
pub fn cache_key(handle: &str) -> String {
    handle.to_ascii_lowercase()
}
