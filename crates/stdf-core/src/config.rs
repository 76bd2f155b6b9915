//! Renderer configuration.

/// Settings shared by the renderers in `stdf-output`.
///
/// Typically built with [`Default`] and adjusted field by field; an
/// application may also load it from a TOML/JSON file with the `serde`
/// feature enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Column separator for the delimited-text renderer.  Default: `|`.
    pub delimiter: String,

    /// Name of the XML document's root element.  Default: `Stdf`.
    pub root_element: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            delimiter:    "|".to_owned(),
            root_element: "Stdf".to_owned(),
        }
    }
}

impl RenderConfig {
    /// Default config with a different text delimiter.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self { delimiter: delimiter.into(), ..Self::default() }
    }
}
