//! Compiled-in generator configuration.

/// Section labels and the name prefixes that claim tokens for them.
///
/// Order is priority: a token belongs to the first section with a matching
/// prefix, and sections are emitted in this order. A `/` in a label nests
/// it under the preceding path segments. The empty prefix of `Unspecified`
/// catches everything the earlier sections leave behind.
pub const TOKEN_SECTIONS: &[(&str, &[&str])] = &[
    ("Attention Dot", &["attention-dot"]),
    ("Background Color", &["background-color"]),
    ("Border", &["border"]),
    ("Box Shadow", &["box-shadow"]),
    ("Button", &["button"]),
    ("Checkbox", &["checkbox"]),
    ("Color", &["brand-color", "color", "platform-color"]),
    ("Focus Outline", &["focus-outline"]),
    ("Font Size", &["font-size"]),
    ("Font Weight", &["font-weight"]),
    ("Heading", &["heading"]),
    ("Icon", &["icon"]),
    ("Input - Text", &["input-text"]),
    ("Input - Space", &["input-space"]),
    ("Link", &["link"]),
    ("Outline Color", &["outline-color"]),
    ("Page", &["page"]),
    ("Size", &["size"]),
    ("Space", &["space"]),
    ("Table Row", &["table-row"]),
    ("Text", &["text"]),
    ("Unspecified", &[""]),
];

/// T-shirt size scale, smallest first.
pub const SIZE_SCALE: &[&str] = &[
    "circle", "xxxsmall", "xxsmall", "xsmall", "small", "medium", "large", "xlarge", "xxlarge",
    "xxxlarge",
];

/// Interaction state scale, resting state first.
pub const STATE_SCALE: &[&str] = &["base", "default", "root", "hover", "active", "focus", "disabled"];

/// Comment lines opening every generated file.
pub const LICENSE_HEADER: [&str; 3] = [
    "/* This Source Code Form is subject to the terms of the Mozilla Public",
    " * License, v. 2.0. If a copy of the MPL was not distributed with this",
    " * file, You can obtain one at http://mozilla.org/MPL/2.0/. */",
];

/// Directory the destination files are written under.
pub const OUTPUT_DIR: &str = "acorn-tokens";
