//! Conversion options

use serde::{Deserialize, Serialize};

/// How `cref` cross references are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossRefStyle {
    /// `[Foo](#t-foo)`
    #[default]
    Link,
    /// `` `Foo` ``
    Code,
    /// `Foo`
    Text,
}

/// What to emit for elements the reader did not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// The element's inner text.
    #[default]
    Text,
    /// The element re-serialized as inline HTML.
    Markup,
    /// Nothing.
    Omit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub file_heading_level: u8,
    pub member_heading_level: u8,
    pub section_heading_level: u8,
    pub cross_references: CrossRefStyle,
    /// Prepended to a member's anchor slug to form link targets.
    pub anchor_prefix: String,
    pub unrecognized: UnrecognizedPolicy,
    /// Info string for `<code>` blocks without a language attribute.
    pub default_language: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            file_heading_level: 1,
            member_heading_level: 2,
            section_heading_level: 3,
            cross_references: CrossRefStyle::Link,
            anchor_prefix: "#".to_string(),
            unrecognized: UnrecognizedPolicy::Text,
            default_language: None,
        }
    }
}
