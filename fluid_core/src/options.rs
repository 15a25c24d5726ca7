//! # Output Options
//!
//! Formatting and field-inclusion settings shared by every generator.
//!
//! Two revisions of the reference output exist: an older one using `vw` with
//! only the core fields, and a newer one using `vi` that also emits px
//! variants, multipliers, labels and WCAG checks. Both are reachable here:
//! [`OutputOptions::default`] is the newer behavior, [`OutputOptions::legacy`]
//! the older.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "relativeUnit": "vi",
//!   "precision": 4,
//!   "fields": { "clampPx": true, "multiplier": true, "label": true, "wcag": true }
//! }
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::units::RelativeUnit;

/// Decimal places kept in every formatted or rounded output value
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest precision honored; higher values are treated as this
pub const MAX_PRECISION: u32 = 10;

/// Global output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputOptions {
    /// Unit for the slope term when a config does not name one
    pub relative_unit: RelativeUnit,

    /// Decimal places for rounding, capped at [`MAX_PRECISION`]
    pub precision: u32,

    /// Optional fields to include in results
    pub fields: OutputFields,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            relative_unit: RelativeUnit::default(),
            precision: DEFAULT_PRECISION,
            fields: OutputFields::default(),
        }
    }
}

impl OutputOptions {
    /// Settings reproducing the older revision: `vw`, 3 decimals, core fields only.
    pub fn legacy() -> Self {
        OutputOptions {
            fields: OutputFields::none(),
            ..OutputOptions::default()
        }
        .with_relative_unit(RelativeUnit::ViewportWidth)
        .with_precision(3)
    }

    /// Builder-style override of the relative unit.
    pub fn with_relative_unit(mut self, unit: RelativeUnit) -> Self {
        self.relative_unit = unit;
        self
    }

    /// Builder-style override of the precision, capped at [`MAX_PRECISION`].
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Resolve a per-config override against the global unit.
    pub fn resolve_unit(&self, relative_to: Option<RelativeUnit>) -> RelativeUnit {
        relative_to.unwrap_or(self.relative_unit)
    }
}

/// Which optional fields generators fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputFields {
    /// `clampPx` on clamp pairs and space entries
    pub clamp_px: bool,
    /// `multiplier` on space sizes
    pub multiplier: bool,
    /// `label` on type steps
    pub label: bool,
    /// `wcagViolation` on type steps
    pub wcag: bool,
}

impl Default for OutputFields {
    fn default() -> Self {
        OutputFields {
            clamp_px: true,
            multiplier: true,
            label: true,
            wcag: true,
        }
    }
}

impl OutputFields {
    /// Only the core fields.
    pub fn none() -> Self {
        OutputFields {
            clamp_px: false,
            multiplier: false,
            label: false,
            wcag: false,
        }
    }
}
