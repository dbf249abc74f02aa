const MAX_VISIBLE_CHARS: usize = 100;

/// Sanitizes prompt text for safe logging.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &trimmed[..cut], total_chars),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("key=", "key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(pattern) {
            let idx = search_from + offset;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
            search_from = idx + replacement.len();
        }
    }

    result
}
