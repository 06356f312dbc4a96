//! Light/dark collapse.
//!
//! Where a surface carries both a `light` and a `dark` value, the pair is
//! folded into one `light-dark(<light>, <dark>)` value stored as that
//! surface's `default`. References inside the pair are kept as written; they
//! are rewritten later, together with every other resolved value.

use acorn_model::{Dictionary, RawValue, Surface, Token};

/// Surfaces the collapse runs on, in order.
pub const COLLAPSE_SURFACES: [Surface; 3] = [Surface::Root, Surface::Platform, Surface::Brand];

pub fn light_dark(light: &str, dark: &str) -> String {
    format!("light-dark({light}, {dark})")
}

/// Return a new dictionary in which every light/dark pair has been
/// collapsed into a `default`. Applying it again yields the same dictionary.
pub fn collapse_light_dark(dictionary: &Dictionary) -> Dictionary {
    dictionary.map_tokens(collapse_token)
}

/// Collapse the light/dark pairs of a single token.
///
/// The root-surface collapse also becomes the token's transformed `value`;
/// brand and platform collapses only touch the original value.
pub fn collapse_token(token: &Token) -> Token {
    let mut out = token.clone();

    for surface in COLLAPSE_SURFACES {
        if let Some(value) = collapse_at(&mut out.original.value, surface) {
            if surface == Surface::Root {
                out.value = value;
            }
        }
    }

    out
}

fn collapse_at(original: &mut RawValue, surface: Surface) -> Option<String> {
    let target = match surface.key() {
        Some(key) => original.as_object_mut()?.get_mut(key)?,
        None => original,
    };

    let light = target.get_scalar("light").filter(|v| !v.is_empty())?;
    let dark = target.get_scalar("dark").filter(|v| !v.is_empty())?;
    let value = light_dark(light, dark);

    target
        .as_object_mut()?
        .insert("default".to_string(), RawValue::Scalar(value.clone()));
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn token(value: serde_json::Value) -> Token {
        Token::new("test-token", RawValue::try_from(value).unwrap())
    }

    #[test]
    fn test_root_pair() {
        let out = collapse_token(&token(json!({"light": "#fff", "dark": "#000"})));
        assert_eq!(
            out.original.value.get_scalar("default"),
            Some("light-dark(#fff, #000)")
        );
        assert_eq!(out.value, "light-dark(#fff, #000)");
    }

    #[test]
    fn test_root_pair_replaces_existing_default() {
        let out = collapse_token(&token(json!({"light": "a", "dark": "b", "default": "c"})));
        assert_eq!(out.original.value.get_scalar("default"), Some("light-dark(a, b)"));
    }

    #[test]
    fn test_brand_and_platform_pairs() {
        let t = token(json!({
            "brand": {"light": "#eee", "dark": "#111"},
            "platform": {"light": "Canvas", "dark": "CanvasText"}
        }));
        let out = collapse_token(&t);
        let brand = out.original.value.get("brand").unwrap();
        let platform = out.original.value.get("platform").unwrap();
        assert_eq!(brand.get_scalar("default"), Some("light-dark(#eee, #111)"));
        assert_eq!(platform.get_scalar("default"), Some("light-dark(Canvas, CanvasText)"));
        // Surface collapses leave the transformed value alone.
        assert_eq!(out.value, t.value);
    }

    #[test]
    fn test_half_pair_untouched() {
        let t = token(json!({"light": "#fff", "forcedColors": "Canvas"}));
        assert_eq!(collapse_token(&t), t);
    }

    #[test]
    fn test_empty_side_untouched() {
        let t = token(json!({"brand": {"light": "", "dark": "#000"}}));
        assert_eq!(collapse_token(&t), t);
    }

    #[test]
    fn test_scalar_untouched() {
        let t = token(json!("#fff"));
        assert_eq!(collapse_token(&t), t);
    }

    #[test]
    fn test_references_kept_verbatim() {
        let out = collapse_token(&token(json!({"light": "{color.gray.05}", "dark": "{color.gray.90}"})));
        assert_eq!(
            out.original.value.get_scalar("default"),
            Some("light-dark({color.gray.05}, {color.gray.90})")
        );
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let dict = Dictionary::new(vec![token(json!({"light": "#fff", "dark": "#000"}))]);
        let once = collapse_light_dark(&dict);
        let twice = collapse_light_dark(&once);
        assert!(dict.tokens()[0].original.value.get("default").is_none());
        assert_eq!(once, twice);
    }
}
