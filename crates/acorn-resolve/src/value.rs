//! Axis and surface value lookup.

use acorn_model::{Axis, RawValue, Surface, Token};

/// A raw value picked for one axis, with the surface it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub value: &'a str,
    pub surface: Surface,
}

/// Look up the raw value of `token` on `axis` at `surface`.
///
/// A scalar original value only answers the default axis at the root
/// surface. `None` means the token does not apply there.
pub fn resolve(token: &Token, axis: Axis, surface: Surface) -> Option<&str> {
    let original = &token.original.value;

    match surface.key() {
        Some(key) => original.get(key)?.get_scalar(axis.key()),
        None => match original {
            RawValue::Scalar(value) => (axis == Axis::Default).then_some(value.as_str()),
            RawValue::Object(_) => original.get_scalar(axis.key()),
        },
    }
}

/// Resolve for unconditional and media-query output: the root surface
/// first, then `brand` for structured values.
pub fn resolve_with_fallback(token: &Token, axis: Axis) -> Option<Resolved<'_>> {
    if let Some(value) = resolve(token, axis, Surface::Root) {
        return Some(Resolved {
            value,
            surface: Surface::Root,
        });
    }

    if !token.original.value.is_object() {
        return None;
    }

    resolve(token, axis, Surface::Brand).map(|value| Resolved {
        value,
        surface: Surface::Brand,
    })
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
    fn test_scalar_default_only() {
        let t = token(json!("2px"));
        assert_eq!(resolve(&t, Axis::Default, Surface::Root), Some("2px"));
        assert_eq!(resolve(&t, Axis::ForcedColors, Surface::Root), None);
        assert_eq!(resolve(&t, Axis::Default, Surface::Brand), None);
    }

    #[test]
    fn test_object_axes() {
        let t = token(json!({"default": "#fff", "forcedColors": "Canvas", "prefersContrast": "#000"}));
        assert_eq!(resolve(&t, Axis::Default, Surface::Root), Some("#fff"));
        assert_eq!(resolve(&t, Axis::ForcedColors, Surface::Root), Some("Canvas"));
        assert_eq!(resolve(&t, Axis::PrefersContrast, Surface::Root), Some("#000"));
    }

    #[test]
    fn test_surface_lookup() {
        let t = token(json!({
            "shared": {"default": "1px"},
            "brand": {"default": "2px", "forcedColors": "ButtonText"},
            "platform": {"default": "3px"}
        }));
        assert_eq!(resolve(&t, Axis::Default, Surface::Shared), Some("1px"));
        assert_eq!(resolve(&t, Axis::Default, Surface::Brand), Some("2px"));
        assert_eq!(resolve(&t, Axis::Default, Surface::Platform), Some("3px"));
        assert_eq!(resolve(&t, Axis::ForcedColors, Surface::Brand), Some("ButtonText"));
        assert_eq!(resolve(&t, Axis::ForcedColors, Surface::Platform), None);
    }

    #[test]
    fn test_object_without_axis_key() {
        let t = token(json!({"light": "#fff", "dark": "#000"}));
        assert_eq!(resolve(&t, Axis::Default, Surface::Root), None);
    }

    #[test]
    fn test_fallback_prefers_root() {
        let t = token(json!({"default": "a", "brand": {"default": "b"}}));
        assert_eq!(
            resolve_with_fallback(&t, Axis::Default),
            Some(Resolved {
                value: "a",
                surface: Surface::Root
            })
        );
    }

    #[test]
    fn test_fallback_to_brand() {
        let t = token(json!({"brand": {"default": "b"}, "platform": {"default": "p"}}));
        assert_eq!(
            resolve_with_fallback(&t, Axis::Default),
            Some(Resolved {
                value: "b",
                surface: Surface::Brand
            })
        );
    }

    #[test]
    fn test_fallback_never_reaches_platform() {
        let t = token(json!({"platform": {"default": "p"}}));
        assert_eq!(resolve_with_fallback(&t, Axis::Default), None);
    }
}
