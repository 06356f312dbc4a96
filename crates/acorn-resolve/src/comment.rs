//! Comment selection for emitted declarations.

use acorn_model::{Surface, Token};

/// Comments starting with this marker are authoring notes and never emitted.
pub const SUPPRESSED_MARKER: &str = "TODO";

/// The comment shown next to a declaration resolved at `surface`: the
/// surface's own `comment` if it has one, else the token's.
pub fn display_comment(token: &Token, surface: Surface) -> Option<String> {
    let surface_comment = surface
        .key()
        .and_then(|key| token.original.value.get(key))
        .and_then(|value| value.get_scalar("comment"));

    let comment = surface_comment.or(token.comment.as_deref())?;
    if comment.starts_with(SUPPRESSED_MARKER) {
        return None;
    }
    Some(comment.to_string())
}
