//! Acorn Token Model
//!
//! The in-memory shape of a pre-parsed design-token document: named tokens
//! whose original value is either a scalar or an object keyed by surface
//! (`brand`, `platform`, ...) and axis (`light`, `dark`, `default`,
//! `forcedColors`, `prefersContrast`), plus the dictionary that resolves
//! `{path.to.token}` references between them.
//!
//! # Example
//!
//! ```
//! use acorn_model::Dictionary;
//!
//! let dict = Dictionary::from_json(r##"[{"name": "color-gray-100", "original": {"value": "#f0f0f4"}}]"##).unwrap();
//! assert_eq!(dict.len(), 1);
//! assert!(dict.uses_reference("{color.gray.100}"));
//! ```

pub mod dictionary;
pub mod reference;
pub mod token;

pub use dictionary::{Declaration, Dictionary, Reference};
pub use token::{Axis, Original, RawValue, Surface, Token};

/// Error raised while loading a token document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Token document error at line {line}, column {column}: {message}")]
pub struct ModelError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// A token value with a shape the model cannot represent (arrays, null).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unsupported token value: {kind}")]
pub struct ValueShapeError {
    pub kind: &'static str,
}
