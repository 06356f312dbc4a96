//! Acorn CSS Generator
//!
//! Compiles a token dictionary into the seven topical custom-property
//! stylesheets. The light/dark collapse runs once up front, the partition
//! assigns every token to at most one file, then each file is generated in
//! turn: resolve per axis, group into sections, wrap in `:root`/`@media`.
//!
//! ```text
//! Dictionary → collapse → Partition → per file { declarations → sections → css }
//! ```

pub mod config;
pub mod css;
pub mod filter;
pub mod section;

pub use filter::{Destination, Overlap, Partition, DESTINATIONS};
pub use section::{default_rules, SectionRule};

use acorn_model::{Axis, Declaration, Dictionary, Token};

/// A generated stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub destination: Destination,
    pub css: String,
}

impl OutputFile {
    pub fn path(&self) -> String {
        self.destination.path()
    }
}

/// A declaration that reached a file but no section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsectioned {
    pub destination: Destination,
    pub token: String,
}

/// Everything the generator noticed but did not fail on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagnostics {
    pub overlaps: Vec<Overlap>,
    pub unclaimed: Vec<String>,
    pub platform_only: Vec<String>,
    pub unsectioned: Vec<Unsectioned>,
}

impl Diagnostics {
    /// No overlapping, unclaimed or unsectioned tokens. Platform-only tokens
    /// are an intended exclusion and do not count.
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.unclaimed.is_empty() && self.unsectioned.is_empty()
    }
}

/// The compiled output for a whole dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub files: Vec<OutputFile>,
    pub diagnostics: Diagnostics,
}

impl CompilerOutput {
    pub fn file(&self, destination: Destination) -> Option<&OutputFile> {
        self.files.iter().find(|f| f.destination == destination)
    }
}

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Codegen error: {message}")]
pub struct CodegenError {
    pub message: String,
}

/// Compile every destination file with the compiled-in section rules.
pub fn compile(dictionary: &Dictionary) -> CompilerOutput {
    compile_with_rules(dictionary, &default_rules())
}

/// Compile every destination file with custom section rules.
pub fn compile_with_rules(dictionary: &Dictionary, rules: &[SectionRule]) -> CompilerOutput {
    let collapsed = acorn_resolve::collapse_light_dark(dictionary);
    let partition = Partition::build(&collapsed);

    let mut diagnostics = Diagnostics {
        overlaps: partition.overlaps.clone(),
        unclaimed: partition.unclaimed.clone(),
        platform_only: partition.platform_only.clone(),
        unsectioned: Vec::new(),
    };

    // Files are generated strictly one after another.
    let files = DESTINATIONS
        .into_iter()
        .map(|destination| {
            let tokens = partition.tokens(destination, &collapsed);
            let (css, unsectioned) = generate_file(&tokens, &collapsed, rules);
            tracing::debug!(file = %destination.path(), tokens = tokens.len(), "generated");

            diagnostics.unsectioned.extend(
                unsectioned
                    .into_iter()
                    .map(|token| Unsectioned { destination, token }),
            );
            OutputFile { destination, css }
        })
        .collect();

    CompilerOutput { files, diagnostics }
}

/// Generate one file's CSS from the tokens it owns. Also returns the names
/// of tokens that resolved but matched no section.
pub fn generate_file(
    tokens: &[&Token],
    dictionary: &Dictionary,
    rules: &[SectionRule],
) -> (String, Vec<String>) {
    let mut bodies = Vec::with_capacity(Axis::ALL.len());
    let mut unsectioned: Vec<String> = Vec::new();

    for axis in Axis::ALL {
        let declarations: Vec<Declaration> = tokens
            .iter()
            .filter_map(|token| acorn_resolve::declaration(token, axis, dictionary))
            .collect();

        let grouping = section::group(declarations, rules);
        for decl in &grouping.unsectioned {
            if !unsectioned.contains(&decl.name) {
                unsectioned.push(decl.name.clone());
            }
        }
        bodies.push((axis, section::render(&grouping)));
    }

    (css::file(&bodies), unsectioned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acorn_model::RawValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn token(name: &str, value: serde_json::Value) -> Token {
        Token::new(name, RawValue::try_from(value).unwrap())
    }

    fn css_of(output: &CompilerOutput, destination: Destination) -> &str {
        &output.file(destination).unwrap().css
    }

    fn sample() -> Dictionary {
        Dictionary::new(vec![
            token("color-gray-05", json!("#fbfbfe")),
            token("color-gray-90", json!("#2b2a33")),
            token("color-blue-50", json!("#0060df")),
            token("border-color-default", json!("#000")),
            token(
                "text-color",
                json!({
                    "light": "{color.gray.90}",
                    "dark": "{color.gray.05}",
                    "forcedColors": "CanvasText",
                    "prefersContrast": "#000"
                }),
            ),
            token(
                "background-color-box",
                json!({"brand": {"light": "#fff", "dark": "#1c1b22", "comment": "TODO: revisit"}}),
            ),
            token("border-width", json!("1px")),
            token("border-radius-small", json!("4px")).with_comment("TODO: revisit"),
            token("heading-font-size-large", json!("1.5rem")),
            token("heading-font-size-small", json!("1.1rem")),
            token("button-background-color-active", json!("{color.blue.50}")),
            token("button-background-color-hover", json!("#0250bb")),
            token("box-shadow-color", json!({"platform": {"default": "#0002"}, "default": "#0003"})),
            token("space-small", json!("4px")),
            token("space-xsmall", json!("2px")),
            token("size-item-small", json!("16px")).with_comment("Icons and small items"),
            token("border-focus", json!("{border.width} solid {color.blue.50}")),
            token("size-icon", json!("{size.item.small}")),
            token("input-padding", json!("calc({space.gutter} / 2)")),
        ])
    }

    #[test]
    fn test_compile_empty() {
        let output = compile(&Dictionary::default());
        assert_eq!(output.files.len(), 7);
        for file in &output.files {
            assert_eq!(file.css, css::header());
        }
    }

    #[test]
    fn test_file_order_and_paths() {
        let output = compile(&sample());
        let paths: Vec<String> = output.files.iter().map(OutputFile::path).collect();
        assert_eq!(
            paths,
            vec![
                "acorn-tokens/acorn-colors.css",
                "acorn-tokens/acorn-typography.css",
                "acorn-tokens/acorn-space.css",
                "acorn-tokens/acorn-size.css",
                "acorn-tokens/acorn-borders.css",
                "acorn-tokens/acorn-shadows.css",
                "acorn-tokens/acorn-inputs.css",
            ]
        );
    }

    #[test]
    fn test_colors_file() {
        let output = compile(&sample());
        let expected = format!(
            "{}{}",
            css::header(),
            r#":root {
  /** Background Color **/
  --background-color-box: light-dark(#fff, #1c1b22);

  /** Border **/
  --border-color-default: #000;

  /** Color **/
  --color-blue-50: #0060df;
  --color-gray-05: #fbfbfe;
  --color-gray-90: #2b2a33;

  /** Text **/
  --text-color: light-dark(var(--color-gray-90), var(--color-gray-05));
}

@media (forced-colors) {
  :root {
  /** Text **/
  --text-color: CanvasText;
  }
}

@media (prefers-contrast) {
  :root {
  /** Text **/
  --text-color: #000;
  }
}
"#
        );
        assert_eq!(css_of(&output, Destination::Colors), expected);
    }

    #[test]
    fn test_border_color_not_in_borders() {
        let output = compile(&sample());
        assert!(css_of(&output, Destination::Colors).contains("--border-color-default: #000;"));
        assert!(!css_of(&output, Destination::Borders).contains("border-color-default"));
    }

    #[test]
    fn test_borders_file_rewrites_shorthand() {
        let output = compile(&sample());
        let expected = format!(
            "{}{}",
            css::header(),
            r#":root {
  /** Border **/
  --border-focus: var(--border-width) solid var(--color-blue-50);
  --border-radius-small: 4px;
  --border-width: 1px;
}
"#
        );
        assert_eq!(css_of(&output, Destination::Borders), expected);
    }

    #[test]
    fn test_size_scale_in_typography() {
        let output = compile(&sample());
        let css = css_of(&output, Destination::Typography);
        let small = css.find("--heading-font-size-small").unwrap();
        let large = css.find("--heading-font-size-large").unwrap();
        assert!(small < large);
    }

    #[test]
    fn test_state_scale_in_inputs() {
        let output = compile(&sample());
        let css = css_of(&output, Destination::Inputs);
        let hover = css.find("--button-background-color-hover").unwrap();
        let active = css.find("--button-background-color-active").unwrap();
        assert!(hover < active);
        assert!(css.contains("--button-background-color-active: var(--color-blue-50);"));
    }

    #[test]
    fn test_comments() {
        let output = compile(&sample());
        for file in &output.files {
            assert!(!file.css.contains("TODO"), "{} leaks an authoring note", file.path());
        }
        assert!(css_of(&output, Destination::Size)
            .contains("  --size-item-small: 16px; /* Icons and small items */"));
    }

    #[test]
    fn test_no_placeholders_left() {
        let output = compile(&sample());
        let mut declarations = 0;
        for file in &output.files {
            for line in file.css.lines().filter(|l| l.trim_start().starts_with("--")) {
                let (_, value) = line.split_once(':').unwrap();
                assert!(!value.contains('{'), "{} has a raw reference: {line}", file.path());
                declarations += 1;
            }
        }
        assert!(declarations > 0);
    }

    #[test]
    fn test_references_outside_colors_and_borders() {
        let output = compile(&sample());
        assert!(css_of(&output, Destination::Size).contains("  --size-icon: var(--size-item-small);"));
        assert!(css_of(&output, Destination::Inputs)
            .contains("  --input-padding: calc(var(--space-gutter) / 2);"));
    }

    #[test]
    fn test_platform_value_not_emitted() {
        let output = compile(&sample());
        let css = css_of(&output, Destination::Shadows);
        assert!(css.contains("--box-shadow-color: #0003;"));
        assert!(!css.contains("#0002"));
    }

    #[test]
    fn test_space_file() {
        let output = compile(&sample());
        let expected = format!(
            "{}{}",
            css::header(),
            ":root {\n  /** Space **/\n  --space-xsmall: 2px;\n  --space-small: 4px;\n}\n"
        );
        assert_eq!(css_of(&output, Destination::Space), expected);
    }

    #[test]
    fn test_every_token_once() {
        let dict = sample();
        let output = compile(&dict);
        for token in dict.tokens() {
            let needle = format!("--{}:", token.name);
            let files = output
                .files
                .iter()
                .filter(|f| f.css.contains(&needle))
                .count();
            assert!(files <= 1, "{} emitted in {files} files", token.name);
        }
    }

    #[test]
    fn test_idempotent() {
        let dict = sample();
        assert_eq!(compile(&dict), compile(&dict));
        let collapsed = acorn_resolve::collapse_light_dark(&dict);
        assert_eq!(compile(&collapsed).files, compile(&dict).files);
    }

    #[test]
    fn test_diagnostics() {
        let dict = Dictionary::new(vec![
            token("opacity-disabled", json!("0.4")),
            token("focus-outline-width", json!("2px")),
            token("space-small", json!("4px")),
        ]);
        let rules = vec![SectionRule::prefixes("Focus Outline", &["focus-outline"])];
        let output = compile_with_rules(&dict, &rules);

        assert_eq!(output.diagnostics.unclaimed, vec!["opacity-disabled".to_string()]);
        assert_eq!(output.diagnostics.overlaps.len(), 1);
        assert_eq!(
            output.diagnostics.unsectioned,
            vec![Unsectioned {
                destination: Destination::Space,
                token: "space-small".into(),
            }]
        );
        assert!(!output.diagnostics.is_clean());
        assert_eq!(css_of(&output, Destination::Space), css::header());
    }
}
