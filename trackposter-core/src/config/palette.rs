use crate::foundation::{
    error::{PosterError, PosterResult},
    math::lerp_u8,
};

/// Straight (non-premultiplied) 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear blend; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp_u8(self.r, other.r, t),
            g: lerp_u8(self.g, other.g, t),
            b: lerp_u8(self.b, other.b, t),
        }
    }
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (alpha ignored).
pub fn parse_hex(s: &str) -> Option<Rgb8> {
    let s = s.trim().strip_prefix('#')?;
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    match s.len() {
        3 => {
            let mut it = s.chars().map(|c| {
                let d = c.to_digit(16).unwrap_or(0) as u8;
                d * 16 + d
            });
            Some(Rgb8 {
                r: it.next()?,
                g: it.next()?,
                b: it.next()?,
            })
        }
        6 | 8 => Some(Rgb8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        }),
        _ => None,
    }
}

/// Accept hex colors and alphabetic CSS keywords (`yellow`, `red`, ...).
pub fn validate_color(field: &str, value: &str) -> PosterResult<String> {
    let v = value.trim();
    if parse_hex(v).is_some() {
        return Ok(v.to_owned());
    }
    if !v.is_empty() && !v.starts_with('#') && v.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(v.to_ascii_lowercase());
    }
    Err(PosterError::validation(format!(
        "{field} color \"{value}\" must be #RGB, #RRGGBB, #RRGGBBAA or a CSS color name"
    )))
}

/// Fully resolved poster colors; fallbacks are already applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Canvas fill.
    pub background: String,
    /// Normal days at the low end of the value range.
    pub track: String,
    /// Normal days at the high end of the value range.
    pub track2: String,
    /// Days at or above `special1`.
    pub special: String,
    /// Days at or above `special2`.
    pub special2: String,
    /// Title, year and label text.
    pub text: String,
}

impl Palette {
    /// Color between `track` and `track2` at position `t`.
    ///
    /// Falls back to `track` when either end is not a hex color.
    pub fn track_gradient(&self, t: Option<f64>) -> String {
        let Some(t) = t else {
            return self.track.clone();
        };
        match (parse_hex(&self.track), parse_hex(&self.track2)) {
            (Some(a), Some(b)) => a.lerp(b, t).to_hex(),
            _ => self.track.clone(),
        }
    }
}

/// Color options as supplied by the user; unset secondaries fall back at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Canvas fill.
    pub background: String,
    /// Primary track color.
    pub track: String,
    /// Gradient end; `None` or empty means `track`.
    pub track2: Option<String>,
    /// First highlight color.
    pub special: String,
    /// Second highlight color; `None` or empty means `special`.
    pub special2: Option<String>,
    /// Text color.
    pub text: String,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            background: "#222222".to_owned(),
            track: "#4DD2FF".to_owned(),
            track2: None,
            special: "yellow".to_owned(),
            special2: Some("red".to_owned()),
            text: "#FFFFFF".to_owned(),
        }
    }
}

impl PaletteOptions {
    /// Validate every color and apply the `track2`/`special2` fallbacks.
    pub fn resolve(&self) -> PosterResult<Palette> {
        let track = validate_color("track", &self.track)?;
        let special = validate_color("special", &self.special)?;
        let track2 = match non_empty(&self.track2) {
            Some(c) => validate_color("track2", c)?,
            None => track.clone(),
        };
        let special2 = match non_empty(&self.special2) {
            Some(c) => validate_color("special2", c)?,
            None => special.clone(),
        };
        Ok(Palette {
            background: validate_color("background", &self.background)?,
            track,
            track2,
            special,
            special2,
            text: validate_color("text", &self.text)?,
        })
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;
