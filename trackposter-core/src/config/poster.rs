use crate::{
    config::palette::{Palette, PaletteOptions},
    foundation::error::{PosterError, PosterResult},
    stats::classify::{SpecialNumbers, SpecialOverride},
    track::model::SourceKind,
};

/// Immutable render configuration.
///
/// Built once by [`PosterConfigBuilder::build`]; nothing downstream re-resolves
/// defaults or color fallbacks.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PosterConfig {
    /// Source the poster is drawn for; also names the output file.
    pub kind: SourceKind,
    /// Athlete name.
    pub athlete: String,
    /// Header text.
    pub title: String,
    /// Colors with fallbacks applied.
    pub palette: Palette,
    /// Resolved highlight thresholds.
    pub special: SpecialNumbers,
    /// Unit label for totals and tooltips.
    pub unit: String,
}

/// User-supplied poster options.
#[derive(Clone, Debug)]
pub struct PosterConfigBuilder {
    athlete: String,
    title: Option<String>,
    colors: PaletteOptions,
    special1: SpecialOverride,
    special2: SpecialOverride,
    unit: Option<String>,
}

impl Default for PosterConfigBuilder {
    fn default() -> Self {
        Self {
            athlete: "Joey".to_owned(),
            title: None,
            colors: PaletteOptions::default(),
            special1: SpecialOverride::Default,
            special2: SpecialOverride::Default,
            unit: None,
        }
    }
}

impl PosterConfigBuilder {
    /// Builder with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Athlete name used in the default title.
    pub fn athlete(mut self, name: impl Into<String>) -> Self {
        self.athlete = name.into();
        self
    }

    /// Override the default `"<athlete> <TYPE>"` title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the color options.
    pub fn colors(mut self, colors: PaletteOptions) -> Self {
        self.colors = colors;
        self
    }

    /// Overrides for the two highlight thresholds.
    pub fn special_numbers(mut self, first: SpecialOverride, second: SpecialOverride) -> Self {
        self.special1 = first;
        self.special2 = second;
        self
    }

    /// Override the unit label that otherwise comes from the source kind.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Resolve against the adapter's kind and default thresholds.
    pub fn build(self, kind: SourceKind, defaults: SpecialNumbers) -> PosterResult<PosterConfig> {
        let athlete = self.athlete.trim().to_owned();
        let title = match self.title.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None if athlete.is_empty() => kind.name().to_uppercase(),
            None => format!("{athlete} {}", kind.name().to_uppercase()),
        };
        let special = defaults.with_overrides(self.special1, self.special2);
        if !special.special1.is_finite() || !special.special2.is_finite() {
            return Err(PosterError::validation("special numbers must be finite"));
        }

        Ok(PosterConfig {
            kind,
            athlete,
            title,
            palette: self.colors.resolve()?,
            special,
            unit: self.unit.unwrap_or_else(|| kind.unit().to_owned()),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/poster.rs"]
mod tests;
