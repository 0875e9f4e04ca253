//! SVG serialization and the optional PNG raster step.

pub mod raster;
pub mod svg;

/// Encoded form of the output artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Scalable vector document.
    #[default]
    Svg,
    /// SVG rasterized through `resvg`.
    Png,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}
