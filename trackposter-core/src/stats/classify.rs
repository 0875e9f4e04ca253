use std::str::FromStr;

use crate::foundation::error::PosterError;

/// The two highlight thresholds. `0` disables a tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpecialNumbers {
    /// Threshold for [`Tier::Special`].
    pub special1: f64,
    /// Threshold for [`Tier::Special2`]; wins over `special1`.
    pub special2: f64,
}

impl SpecialNumbers {
    /// Thresholds as given, without override handling.
    pub fn new(special1: f64, special2: f64) -> Self {
        Self { special1, special2 }
    }

    /// Apply user overrides on top of adapter defaults.
    pub fn with_overrides(self, first: SpecialOverride, second: SpecialOverride) -> Self {
        Self {
            special1: first.apply(self.special1),
            special2: second.apply(self.special2),
        }
    }

    /// Emphasis tier of a value.
    ///
    /// `special2` is checked first, so a value meeting both thresholds is `Special2`.
    pub fn classify(&self, value: f64) -> Tier {
        if self.special2 > 0.0 && value >= self.special2 {
            Tier::Special2
        } else if self.special1 > 0.0 && value >= self.special1 {
            Tier::Special
        } else {
            Tier::Normal
        }
    }
}

/// Emphasis tier, ordered by precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Tier {
    /// Below both enabled thresholds.
    Normal,
    /// At or above `special1`.
    Special,
    /// At or above `special2`.
    Special2,
}

/// User override for one special-number slot.
///
/// `Value(0.0)` behaves like `Default`; `Disabled` forces the threshold off
/// regardless of the adapter default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpecialOverride {
    /// Keep the adapter default.
    #[default]
    Default,
    /// Use this threshold when positive.
    Value(f64),
    /// Turn the tier off.
    Disabled,
}

impl SpecialOverride {
    fn apply(self, default: f64) -> f64 {
        match self {
            Self::Value(v) if v > 0.0 => v,
            Self::Value(_) | Self::Default => default,
            Self::Disabled => 0.0,
        }
    }
}

impl FromStr for SpecialOverride {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Disabled);
        }
        let v: f64 = s.parse().map_err(|_| {
            PosterError::validation(format!(
                "invalid special number \"{s}\": expected a number or \"off\""
            ))
        })?;
        if !v.is_finite() || v < 0.0 {
            return Err(PosterError::validation(format!(
                "special number must be finite and >= 0, got {s}"
            )));
        }
        Ok(Self::Value(v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/classify.rs"]
mod tests;
