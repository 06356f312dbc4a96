//! Destination files and the token partition across them.
//!
//! Each destination has a topical name predicate. The partition evaluates
//! all of them once per token: the first destination in [`CLAIM_ORDER`]
//! that accepts a token owns it, and tokens accepted by several predicates
//! or by none are reported instead of silently duplicated or dropped.

use std::fmt;
use std::str::FromStr;

use acorn_model::{Dictionary, Token};

use crate::config::OUTPUT_DIR;
use crate::CodegenError;

/// One of the generated stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Destination {
    Colors,
    Typography,
    Space,
    Size,
    Borders,
    Shadows,
    Inputs,
}

/// Output order of the destination files.
pub const DESTINATIONS: [Destination; 7] = [
    Destination::Colors,
    Destination::Typography,
    Destination::Space,
    Destination::Size,
    Destination::Borders,
    Destination::Shadows,
    Destination::Inputs,
];

/// Which destination owns a token several predicates accept, most specific first.
pub const CLAIM_ORDER: [Destination; 7] = [
    Destination::Shadows,
    Destination::Inputs,
    Destination::Colors,
    Destination::Borders,
    Destination::Typography,
    Destination::Space,
    Destination::Size,
];

impl Destination {
    pub fn stem(self) -> &'static str {
        match self {
            Destination::Colors => "colors",
            Destination::Typography => "typography",
            Destination::Space => "space",
            Destination::Size => "size",
            Destination::Borders => "borders",
            Destination::Shadows => "shadows",
            Destination::Inputs => "inputs",
        }
    }

    pub fn file_name(self) -> String {
        format!("acorn-{}.css", self.stem())
    }

    /// Path of the stylesheet relative to the output root.
    pub fn path(self) -> String {
        format!("{OUTPUT_DIR}/{}", self.file_name())
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Whether the token's name belongs to this destination's topic.
    pub fn matches_name(self, name: &str) -> bool {
        let has = |s: &str| name.contains(s);
        let starts = |s: &str| name.starts_with(s);
        let input_control = has("button-") || has("checkbox-") || has("input-");

        match self {
            Destination::Colors => {
                // Shadow colors go with shadows, button colors with inputs.
                if has("shadow") && has("color") {
                    return false;
                }
                if has("button-") && has("color") {
                    return false;
                }
                starts("color-")
                    || has("-color")
                    || starts("link-")
                    || starts("table-")
                    || ((has("checkbox-") || has("input-") || starts("icon-")) && has("color"))
            }
            Destination::Typography => {
                !input_control
                    && (has("font-")
                        || starts("heading-")
                        || (starts("text-") && !has("color")))
            }
            Destination::Space => {
                !input_control
                    && (starts("space-")
                        || has("-space")
                        || starts("padding-")
                        || has("-padding")
                        || starts("margin-")
                        || has("-margin"))
            }
            Destination::Size => {
                if starts("button-") || has("font-size") {
                    return false;
                }
                let sized = starts("size-")
                    || has("-size")
                    || starts("width-")
                    || has("-width")
                    || starts("height-")
                    || has("-height")
                    || has("page-");
                if !sized || has("border-width") {
                    return false;
                }
                // Control tokens only count when they name a dimension.
                if (has("button") || has("checkbox") || has("input"))
                    && !(has("-size") || has("-width") || has("-height"))
                {
                    return false;
                }
                !(starts("checkbox-") || starts("input-"))
            }
            Destination::Borders => {
                if has("button") || has("checkbox") || has("input") {
                    return false;
                }
                (starts("border-") || has("-border")) && !has("-color")
            }
            Destination::Shadows => has("shadow"),
            Destination::Inputs => {
                let control = input_control || (starts("focus-outline") && !has("-color"));
                control && !(has("-color") && !has("button-"))
            }
        }
    }

    /// Name predicate plus the shared axis-presence rule.
    pub fn accepts(self, token: &Token) -> bool {
        self.matches_name(&token.name) && has_emittable_axis(token)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

impl FromStr for Destination {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s
            .trim_start_matches("acorn-")
            .trim_end_matches(".css");
        DESTINATIONS
            .into_iter()
            .find(|d| d.stem() == stem)
            .ok_or_else(|| CodegenError {
                message: format!("unknown destination `{s}`"),
            })
    }
}

/// Scalars always qualify. Structured values qualify when they carry a
/// `brand`, `light`, `dark` or `default` value, or are not platform-only.
pub fn has_emittable_axis(token: &Token) -> bool {
    let value = &token.original.value;
    if !value.is_object() {
        return true;
    }
    let shared_or_brand = ["brand", "light", "dark", "default"]
        .into_iter()
        .any(|key| value.has(key));
    shared_or_brand || !value.is_platform_only()
}

/// A token accepted by more than one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub token: String,
    pub owner: Destination,
    pub others: Vec<Destination>,
}

/// Every token assigned to at most one destination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    claimed: [Vec<usize>; 7],
    pub overlaps: Vec<Overlap>,
    /// Tokens no destination's name predicate accepts.
    pub unclaimed: Vec<String>,
    /// Tokens whose name matched but whose only value is platform-specific.
    pub platform_only: Vec<String>,
}

impl Partition {
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut partition = Partition::default();

        for (idx, token) in dictionary.iter().enumerate() {
            let named = claimants(&token.name);

            let Some(&owner) = named.first() else {
                tracing::trace!(token = %token.name, "claimed by no destination");
                partition.unclaimed.push(token.name.clone());
                continue;
            };

            if !has_emittable_axis(token) {
                tracing::trace!(token = %token.name, "platform-only value, skipped");
                partition.platform_only.push(token.name.clone());
                continue;
            }

            if named.len() > 1 {
                let others = named[1..].to_vec();
                tracing::warn!(token = %token.name, %owner, ?others, "token matches several destinations");
                partition.overlaps.push(Overlap {
                    token: token.name.clone(),
                    owner,
                    others,
                });
            }

            tracing::trace!(token = %token.name, destination = %owner, "claimed");
            partition.claimed[owner.index()].push(idx);
        }

        if !partition.unclaimed.is_empty() {
            tracing::warn!(count = partition.unclaimed.len(), "tokens claimed by no destination");
        }

        partition
    }

    /// Tokens owned by `destination`, in dictionary order.
    pub fn tokens<'d>(&self, destination: Destination, dictionary: &'d Dictionary) -> Vec<&'d Token> {
        self.claimed[destination.index()]
            .iter()
            .map(|&idx| &dictionary.tokens()[idx])
            .collect()
    }
}

/// Destinations whose name predicate accepts `name`, owner first.
///
/// Follows [`CLAIM_ORDER`], except that a dimension named without `color`
/// (`table-row-height`, `link-outline-width`) goes to size rather than colors.
pub fn claimants(name: &str) -> Vec<Destination> {
    let mut named: Vec<Destination> = CLAIM_ORDER
        .into_iter()
        .filter(|d| d.matches_name(name))
        .collect();

    if !name.contains("color") {
        let at = |dest: Destination, named: &[Destination]| named.iter().position(|d| *d == dest);
        if let (Some(colors), Some(size)) = (at(Destination::Colors, &named), at(Destination::Size, &named)) {
            if size > colors {
                named.remove(size);
                named.insert(colors, Destination::Size);
            }
        }
    }

    named
}
