//! Token dictionary.
//!
//! Holds the flat token list in document order and resolves `{a.b.c}`
//! references to the generated name of the token at that path.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::reference::ReferenceScanner;
use crate::token::Token;
use crate::ModelError;

/// Indentation of a property line inside a `:root` block.
pub const INDENTATION: &str = "  ";

/// A reference found in a value, mapped to the token it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub path: Vec<String>,
    pub name: String,
}

impl Reference {
    /// The placeholder text this reference was found as.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.path.join("."))
    }
}

/// A custom-property declaration ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub comment: Option<String>,
}

impl Declaration {
    /// Format as an indented CSS property line, with a trailing comment when present.
    pub fn format_property(&self) -> String {
        let mut line = format!("{INDENTATION}--{}: {};", self.name, self.value);
        if let Some(comment) = self.comment.as_deref().filter(|c| !c.is_empty()) {
            line.push_str(&format!(" /* {comment} */"));
        }
        line
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenDocument {
    List(Vec<Token>),
    Wrapped {
        #[serde(rename = "allTokens")]
        all_tokens: Vec<Token>,
    },
}

impl TokenDocument {
    fn into_tokens(self) -> Vec<Token> {
        match self {
            TokenDocument::List(tokens) | TokenDocument::Wrapped { all_tokens: tokens } => tokens,
        }
    }
}

/// The flat collection of tokens passed through the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    tokens: Vec<Token>,
    by_path: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens;
        let mut by_path = HashMap::with_capacity(tokens.len());

        for (idx, token) in tokens.iter_mut().enumerate() {
            if token.path.is_empty() {
                token.path = token.name.split('-').map(str::to_string).collect();
            }
            if by_path.insert(token.path_key(), idx).is_some() {
                tracing::warn!(path = %token.path_key(), "duplicate token path, last one wins");
            }
        }

        Self { tokens, by_path }
    }

    /// Load a pre-flattened token document: either a JSON array of tokens or
    /// an object carrying them under `allTokens`.
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let doc: TokenDocument = serde_json::from_str(source)?;
        Ok(Self::new(doc.into_tokens()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ModelError> {
        let doc: TokenDocument = serde_json::from_reader(reader)?;
        Ok(Self::new(doc.into_tokens()))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by its dotted path.
    pub fn get(&self, path: &str) -> Option<&Token> {
        self.by_path.get(path).map(|&idx| &self.tokens[idx])
    }

    /// Replace every token through `f`, keeping order and paths.
    pub fn map_tokens(&self, f: impl FnMut(&Token) -> Token) -> Self {
        Self::new(self.tokens.iter().map(f).collect())
    }

    pub fn uses_reference(&self, value: &str) -> bool {
        ReferenceScanner::contains_reference(value)
    }

    /// Every reference in `value`, in order of appearance.
    ///
    /// A path with no token behind it maps to its kebab-cased form, which is
    /// the name such a token would have been generated with.
    pub fn references(&self, value: &str) -> Vec<Reference> {
        ReferenceScanner::scan(value)
            .into_iter()
            .map(|placeholder| {
                let name = match self.get(placeholder.path) {
                    Some(token) => token.name.clone(),
                    None => {
                        tracing::warn!(reference = placeholder.path, "reference to unknown token");
                        placeholder.path.replace('.', "-")
                    }
                };
                Reference {
                    path: placeholder.segments(),
                    name,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
