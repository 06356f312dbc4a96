//! CSS emitter.
//!
//! Wraps rendered sections in `:root` blocks, media-query variants in
//! `@media (<query>) { :root { … } }`, and prefixes the license header.

use acorn_model::Axis;

use crate::config::LICENSE_HEADER;

/// The license comment followed by a blank line.
pub fn header() -> String {
    format!("{}\n\n", LICENSE_HEADER.join("\n"))
}

/// Wrap a rendered body for `axis`. An empty body produces no block.
pub fn wrap_block(body: &str, axis: Axis) -> String {
    if body.is_empty() {
        return String::new();
    }

    match axis.media_query() {
        None => format!(":root {{\n{body}\n}}\n"),
        Some(query) => format!("\n@media ({query}) {{\n  :root {{\n{body}\n  }}\n}}\n"),
    }
}

/// Assemble a file from its per-axis bodies, in [`Axis::ALL`] order.
pub fn file(bodies: &[(Axis, String)]) -> String {
    let mut out = header();
    for axis in Axis::ALL {
        if let Some((_, body)) = bodies.iter().find(|(a, _)| *a == axis) {
            out.push_str(&wrap_block(body, axis));
        }
    }
    out
}
