//! Scanner for `{path.to.token}` reference placeholders.
//!
//! A placeholder opens at `{` and closes at the next `}`. Empty braces and an
//! unterminated `{` are left as literal text.

/// A reference placeholder found in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Dotted path between the braces.
    pub path: &'a str,
}

impl Placeholder<'_> {
    pub fn segments(&self) -> Vec<String> {
        self.path.split('.').map(str::to_string).collect()
    }
}

/// Reference placeholder scanner.
pub struct ReferenceScanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> ReferenceScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Collect every placeholder in `source`, left to right.
    pub fn scan(source: &'a str) -> Vec<Placeholder<'a>> {
        ReferenceScanner::new(source).collect()
    }

    /// Whether `source` holds at least one placeholder.
    pub fn contains_reference(source: &str) -> bool {
        ReferenceScanner::new(source).next().is_some()
    }
}

impl<'a> Iterator for ReferenceScanner<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.source[self.pos..];
            let open = self.pos + rest.find('{')?;
            let close = open + 1 + self.source[open + 1..].find('}')?;

            if close == open + 1 {
                self.pos = close + 1;
                continue;
            }

            self.pos = close + 1;
            return Some(Placeholder {
                path: &self.source[open + 1..close],
            });
        }
    }
}
