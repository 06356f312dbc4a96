//! Section grouping and ordering.
//!
//! Declarations are claimed by the first section rule whose matcher accepts
//! their normalized name, sorted within the section by base name and
//! size/state suffix, and rendered under `/** Label **/` headings.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::LazyLock;

use acorn_model::dictionary::INDENTATION;
use acorn_model::Declaration;
use regex::Regex;

use crate::config::{SIZE_SCALE, STATE_SCALE, TOKEN_SECTIONS};

static BASE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)-base\b").unwrap());

/// Drop `-base` segments: `color-base` → `color`, `size-base-hover` → `size-hover`.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    BASE_SUFFIX.replace_all(name, "$1")
}

/// How a section rule recognizes a normalized token name.
#[derive(Debug, Clone)]
pub enum Matcher {
    Prefix(String),
    Pattern(Regex),
}

impl Matcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => name.starts_with(prefix.as_str()),
            Matcher::Pattern(re) => re.is_match(name),
        }
    }
}

/// A labelled output section.
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub label: String,
    pub matchers: Vec<Matcher>,
}

impl SectionRule {
    pub fn prefixes(label: &str, prefixes: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            matchers: prefixes.iter().map(|p| Matcher::Prefix(p.to_string())).collect(),
        }
    }

    pub fn pattern(label: &str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label: label.to_string(),
            matchers: vec![Matcher::Pattern(Regex::new(pattern)?)],
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }
}

/// The compiled-in section rules, in priority order.
pub fn default_rules() -> Vec<SectionRule> {
    TOKEN_SECTIONS
        .iter()
        .map(|(label, prefixes)| SectionRule::prefixes(label, prefixes))
        .collect()
}

/// Declarations claimed by one section, already sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'r> {
    pub label: &'r str,
    pub declarations: Vec<Declaration>,
}

/// Result of grouping one block's declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grouping<'r> {
    pub sections: Vec<Section<'r>>,
    /// Declarations no rule claimed. They are not rendered.
    pub unsectioned: Vec<Declaration>,
}

/// Partition `declarations` into sections, first matching rule wins.
pub fn group(declarations: Vec<Declaration>, rules: &[SectionRule]) -> Grouping<'_> {
    let mut remaining: Vec<(String, Declaration)> = declarations
        .into_iter()
        .map(|decl| (normalize_name(&decl.name).into_owned(), decl))
        .collect();
    let mut sections = Vec::new();

    for rule in rules {
        let (mut claimed, rest): (Vec<_>, Vec<_>) =
            remaining.into_iter().partition(|(name, _)| rule.matches(name));
        remaining = rest;

        if claimed.is_empty() {
            continue;
        }

        claimed.sort_by(|(a, _), (b, _)| compare_names(a, b));
        sections.push(Section {
            label: &rule.label,
            declarations: claimed.into_iter().map(|(_, decl)| decl).collect(),
        });
    }

    for (_, decl) in &remaining {
        tracing::warn!(token = %decl.name, "token matches no section and is left out");
    }

    Grouping {
        sections,
        unsectioned: remaining.into_iter().map(|(_, decl)| decl).collect(),
    }
}

/// Render sections as property lines with headings, joined by newlines.
///
/// Only label path segments that differ from the previous section get a
/// heading; each nesting level adds one `*`. Sections after the first are
/// separated by a blank line.
pub fn render(grouping: &Grouping<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut last_path: Vec<&str> = Vec::new();

    for (idx, section) in grouping.sections.iter().enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }

        let path: Vec<&str> = section.label.split('/').collect();
        let mut level = String::from("**");
        for (depth, part) in path.iter().enumerate() {
            if last_path.get(depth) != Some(part) {
                lines.push(format!("{INDENTATION}/{level} {part} {level}/"));
            }
            level.push('*');
        }
        last_path = path;

        lines.extend(section.declarations.iter().map(Declaration::format_property));
    }

    lines.join("\n")
}

/// Split a normalized name into `(base, suffix)` when its last segment is a
/// size or state step, else `(name, "")`.
pub fn split_suffix(name: &str) -> (&str, &str) {
    if let Some(idx) = name.rfind('-') {
        let suffix = &name[idx + 1..];
        if SIZE_SCALE.contains(&suffix) || STATE_SCALE.contains(&suffix) {
            return (&name[..idx], suffix);
        }
    }
    (name, "")
}

/// Order two normalized names within a section.
///
/// Bases compare naturally. Within one base the bare name comes first, then
/// size steps in scale order, then state steps in scale order. The full name
/// settles anything left, so the result never depends on input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_base, a_suffix) = split_suffix(a);
    let (b_base, b_suffix) = split_suffix(b);

    natural_cmp(a_base, b_base)
        .then_with(|| suffix_rank(a_suffix).cmp(&suffix_rank(b_suffix)))
        .then_with(|| a.cmp(b))
}

fn suffix_rank(suffix: &str) -> (u8, usize) {
    let step = |scale: &[&str]| scale.iter().position(|x| *x == suffix);

    if let Some(idx) = step(SIZE_SCALE) {
        (1, idx)
    } else if let Some(idx) = step(STATE_SCALE) {
        (2, idx)
    } else {
        (0, 0)
    }
}

/// Locale-style comparison with numeric runs compared by value, so
/// `size-2` < `size-10`.
///
/// Punctuation sorts before digits and digits before letters; letters
/// compare case-insensitively first, lowercase winning a remaining tie.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        let (x, y) = match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        let ord = if x.is_ascii_digit() && y.is_ascii_digit() {
            let xs = take_digits(&mut ai);
            let ys = take_digits(&mut bi);
            compare_digit_runs(&xs, &ys)
        } else {
            ai.next();
            bi.next();
            char_key(x).cmp(&char_key(y))
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    tie_break(a, b)
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn char_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphanumeric() {
        3
    } else {
        1
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

fn tie_break(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}
