use std::sync::LazyLock;

use regex::Regex;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9.]").expect("literal pattern"));

/// `<millis>-<name>` with the name lowercased and every character outside
/// `[a-z0-9.]` replaced by `-`.
pub fn stored_file_name(original: &str, timestamp_millis: i64) -> String {
    let lowered = original.to_lowercase();
    let safe = UNSAFE_CHARS.replace_all(&lowered, "-");
    format!("{timestamp_millis}-{safe}")
}
