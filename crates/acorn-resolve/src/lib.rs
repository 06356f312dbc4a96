//! Acorn Token Resolution
//!
//! Turns a token into the single CSS value it contributes for one axis:
//! picks the applicable raw value among the surfaces, rewrites `{a.b.c}`
//! references into `var(--a-b-c)` and settles the displayed comment.
//!
//! ```text
//! Dictionary → collapse_light_dark() → declaration(token, axis) → Declaration
//! ```
//!
//! The light/dark collapse is a pure pre-pass: it returns a new dictionary
//! with the synthesized `light-dark()` defaults in place and leaves the
//! input untouched.

pub mod collapse;
pub mod comment;
pub mod rewrite;
pub mod value;

pub use collapse::collapse_light_dark;
pub use comment::display_comment;
pub use rewrite::rewrite_references;
pub use value::{resolve, resolve_with_fallback, Resolved};

use acorn_model::{Axis, Declaration, Dictionary, Token};

/// Build the declaration `token` contributes on `axis`, or `None` when the
/// token has no value there.
///
/// `dictionary` should be the collapsed view so references land on tokens
/// whose light/dark defaults already exist.
pub fn declaration(token: &Token, axis: Axis, dictionary: &Dictionary) -> Option<Declaration> {
    let resolved = resolve_with_fallback(token, axis)?;
    tracing::trace!(token = %token.name, axis = axis.key(), surface = ?resolved.surface, "resolved");

    Some(Declaration {
        name: token.name.clone(),
        value: rewrite_references(resolved.value, dictionary),
        comment: display_comment(token, resolved.surface),
    })
}
