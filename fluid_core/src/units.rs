//! # Unit Types
//!
//! Type-safe wrappers for CSS lengths plus the unit tokens that appear in a
//! formatted `clamp()` expression.
//!
//! ## Design Philosophy
//!
//! Lengths are simple newtypes rather than a full CSS value model:
//! - All inputs arrive as pixels
//! - JSON serialization stays clean (just numbers)
//! - Conversion to `rem` assumes the browser default 16px root font size
//!
//! ## Example
//!
//! ```rust
//! use fluid_core::units::{Px, Rem, RelativeUnit};
//!
//! let size = Px(24.0);
//! let size_rem: Rem = size.into();
//! assert_eq!(size_rem.0, 1.5);
//!
//! assert_eq!(RelativeUnit::default().token(), "vi");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Root font size used to convert px to rem
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub f64);

/// Length in root ems
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rem(pub f64);

impl From<Px> for Rem {
    fn from(px: Px) -> Self {
        Rem(px.0 / ROOT_FONT_SIZE_PX)
    }
}

impl Px {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Rem {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Px {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Px(self.0 * rhs)
    }
}

// ============================================================================
// Unit Tokens
// ============================================================================

/// Absolute unit used for the bounds and intercept of a clamp expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Root ems, sizes divided by the 16px root
    #[default]
    Rem,
    /// Raw pixels
    Px,
}

impl LengthUnit {
    /// Express a pixel length in this unit
    pub fn convert(self, length: Px) -> f64 {
        match self {
            LengthUnit::Rem => Rem::from(length).value(),
            LengthUnit::Px => length.value(),
        }
    }

    /// CSS token
    pub fn token(self) -> &'static str {
        match self {
            LengthUnit::Rem => "rem",
            LengthUnit::Px => "px",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Relative unit used for the slope term of a clamp expression.
///
/// Accepts the original `"viewport"` / `"container"` spellings as well as
/// the raw CSS tokens when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelativeUnit {
    /// Viewport inline size (`vi`)
    #[default]
    #[serde(rename = "vi", alias = "viewport")]
    ViewportInline,
    /// Container inline size (`cqi`)
    #[serde(rename = "cqi", alias = "container")]
    ContainerInline,
    /// Viewport width (`vw`), the unit of older revisions
    #[serde(rename = "vw")]
    ViewportWidth,
}

impl RelativeUnit {
    /// CSS token
    pub fn token(self) -> &'static str {
        match self {
            RelativeUnit::ViewportInline => "vi",
            RelativeUnit::ContainerInline => "cqi",
            RelativeUnit::ViewportWidth => "vw",
        }
    }
}

impl fmt::Display for RelativeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_rem() {
        let rem: Rem = Px(20.0).into();
        assert_eq!(rem.0, 1.25);
        assert_eq!(Rem::from(Px(12.0)).value(), 0.75);
    }

    #[test]
    fn test_scale_by_multiplier() {
        assert_eq!((Px(18.0) * 1.5).value(), 27.0);
        assert_eq!((Px(18.0) * 0.25).value(), 4.5);
    }

    #[test]
    fn test_convert() {
        assert_eq!(LengthUnit::Rem.convert(Px(40.0)), 2.5);
        assert_eq!(LengthUnit::Px.convert(Px(40.0)), 40.0);
        assert_eq!(LengthUnit::Px.to_string(), "px");
    }

    #[test]
    fn test_relative_unit_aliases() {
        let unit: RelativeUnit = serde_json::from_str("\"viewport\"").unwrap();
        assert_eq!(unit, RelativeUnit::ViewportInline);
        let unit: RelativeUnit = serde_json::from_str("\"container\"").unwrap();
        assert_eq!(unit, RelativeUnit::ContainerInline);
        let unit: RelativeUnit = serde_json::from_str("\"vw\"").unwrap();
        assert_eq!(unit.token(), "vw");
        assert_eq!(serde_json::to_string(&RelativeUnit::ContainerInline).unwrap(), "\"cqi\"");
    }

    #[test]
    fn test_serialization() {
        let px = Px(12.5);
        let json = serde_json::to_string(&px).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Px = serde_json::from_str(&json).unwrap();
        assert_eq!(px, roundtrip);
    }
}
