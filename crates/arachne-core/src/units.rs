use serde::{Deserialize, Serialize};

/// Logical-unit to device-pixel conversion.
///
/// Passed explicitly to whatever needs it; a chart owns one and hands it down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    /// Device pixels per logical unit.
    pub scale: f64,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    pub fn new(scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self { scale }
        } else {
            tracing::warn!(scale, "ignoring non-positive density, using 1.0");
            Self::default()
        }
    }

    /// From a dots-per-inch value, with 160 dpi as the 1:1 baseline.
    pub fn from_dpi(dpi: f64) -> Self {
        Self::new(dpi / 160.0)
    }

    pub fn to_device_pixels(&self, logical: f64) -> f64 {
        logical * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_scale() {
        let d = Density::from_dpi(320.0);
        assert_eq!(d.to_device_pixels(10.0), 20.0);
        assert_eq!(Density::default().to_device_pixels(7.5), 7.5);
    }

    #[test]
    fn rejects_bad_scale() {
        assert_eq!(Density::new(0.0), Density::default());
        assert_eq!(Density::new(f64::NAN), Density::default());
    }
}
