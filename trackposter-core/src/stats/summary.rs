/// Closed interval of observed values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ValueRange {
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
}

impl ValueRange {
    /// Range spanning `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Widen to include `v`.
    pub fn extend(self, v: f64) -> Self {
        Self {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }

    /// `max - min`.
    pub fn diff(self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` in the range as `[0, 1]`; `None` when the range is a single point.
    pub fn normalize(self, v: f64) -> Option<f64> {
        let diff = self.diff();
        if diff <= 0.0 {
            return None;
        }
        Some(((v - self.min) / diff).clamp(0.0, 1.0))
    }
}
