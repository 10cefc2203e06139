//! Discord text length limits
//!
//! Message content is capped at 2000 characters. Lengths are counted in
//! characters (Unicode scalar values), not bytes.

use tracing::warn;

/// Maximum message content length accepted by Discord
pub const MAX_CONTENT_LEN: usize = 2000;

/// Truncate content to Discord's 2000 character limit
///
/// If content exceeds the limit, keeps 1997 chars and appends "...".
pub fn truncate_content(content: &str) -> String {
    let char_count = content.chars().count();

    if char_count <= MAX_CONTENT_LEN {
        return content.to_string();
    }

    let truncated: String = content.chars().take(MAX_CONTENT_LEN - 3).collect();
    let result = format!("{}...", truncated);

    warn!(
        original_len = char_count,
        truncated_len = result.chars().count(),
        "Content exceeds 2000 chars, truncated"
    );

    result
}
