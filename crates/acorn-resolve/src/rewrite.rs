//! Reference rewriting.

use acorn_model::Dictionary;

/// Replace every `{path.to.token}` placeholder in `value` with
/// `var(--<token-name>)`. Values without references come back unchanged.
pub fn rewrite_references(value: &str, dictionary: &Dictionary) -> String {
    if !dictionary.uses_reference(value) {
        return value.to_string();
    }

    let mut out = value.to_string();
    for reference in dictionary.references(value) {
        // Each reference is one occurrence, so replace the first one left.
        out = out.replacen(&reference.placeholder(), &format!("var(--{})", reference.name), 1);
    }
    out
}
