//! Invite link parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches FerrisChat invite links, e.g. `https://ferris.sh/AbC123` or
/// `ferris.chat/invite/AbC123`. The code is the fourth capture group.
pub static INVITE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://)?(www\.)?(ferris\.sh|ferris\.chat/invite)/([A-Za-z0-9]+)")
        .expect("invite pattern is a valid regex")
});

/// Extract the invite code from the first invite link found in `text`.
#[must_use]
pub fn parse_invite_code(text: &str) -> Option<&str> {
    INVITE_REGEX
        .captures(text)
        .and_then(|captures| captures.get(4))
        .map(|code| code.as_str())
}
