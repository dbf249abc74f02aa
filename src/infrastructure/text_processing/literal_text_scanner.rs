//! Best-effort text recovery from PDF bytes.
//!
//! PDF content streams show text with literal strings such as `(Hello) Tj`.
//! When those streams are stored uncompressed the literals are readable in the
//! raw file, so collecting them recovers a rough transcript. Compressed
//! streams, font encodings and hex strings are not handled; such documents
//! simply produce an empty result.

use std::sync::LazyLock;

use regex::Regex;

static LITERAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("literal run pattern is valid"));

static NUMERIC_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s.\-]+$").expect("numeric noise pattern is valid"));

/// Openings this close to the end of the buffer are never scanned.
const TAIL_GUARD: usize = 10;

/// Runs the regex pass, then the balanced-parenthesis pass if the first one
/// found nothing. An empty string means no text could be recovered.
pub fn extract_literal_text(data: &[u8]) -> String {
    let primary = scan_literal_runs(data);
    let text = if primary.trim().is_empty() {
        scan_balanced_runs(data)
    } else {
        primary
    };

    text.trim().to_string()
}

/// Decodes the whole buffer and collects every `( ... )` literal in order.
pub fn scan_literal_runs(data: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(data);

    LITERAL_RUN
        .captures_iter(&decoded)
        .filter_map(|captures| captures.get(1))
        .map(|run| run.as_str())
        .filter(|run| is_meaningful(run))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte-level scan that honours nested parentheses. Each enclosed range is
/// decoded on its own so one bad sequence does not poison its neighbours.
pub fn scan_balanced_runs(data: &[u8]) -> String {
    let limit = data.len().saturating_sub(TAIL_GUARD);
    let mut runs = Vec::new();
    let mut i = 0;

    while i < limit {
        if data[i] != b'(' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut depth = 1usize;
        while j < data.len() && depth > 0 {
            match data[j] {
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ => {}
            }
            j += 1;
        }

        if depth == 0 {
            let run = String::from_utf8_lossy(&data[i + 1..j - 1]);
            if is_meaningful(&run) {
                runs.push(run.into_owned());
            }
            i = j;
        } else {
            i += 1;
        }
    }

    runs.join(" ")
}

/// Single characters and bare numbers are layout noise.
fn is_meaningful(run: &str) -> bool {
    run.chars().count() > 1 && !NUMERIC_NOISE.is_match(run)
}
