//! # Clamp Formatter
//!
//! Turns a linear size ramp into a CSS `clamp()` expression:
//!
//! ```text
//! clamp(<min><unit>, <intercept><unit> + <slope><relative>, <max><unit>)
//! ```
//!
//! The ramp runs from `min_size` at `min_width` to `max_size` at `max_width`
//! (all in px). Bounds in the output are always numerically ordered, while
//! the slope keeps the direction of the ramp, so a shrinking ramp prints as
//! `+ -1.5789vi`.
//!
//! ## Example
//!
//! ```rust
//! use fluid_core::clamp::{calculate_clamp, ClampRequest};
//! use fluid_core::options::OutputOptions;
//!
//! let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
//! assert_eq!(
//!     calculate_clamp(&request, &OutputOptions::default()),
//!     "clamp(1rem, 0.6522rem + 1.7391vi, 2rem)"
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::{FluidError, FluidResult};
use crate::interpolate::round_to;
use crate::options::OutputOptions;
use crate::units::{LengthUnit, Px, RelativeUnit};

/// A single fluid ramp to format.
///
/// ## JSON Example
///
/// ```json
/// { "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 1240, "usePx": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampRequest {
    /// Size at `min_width` (px)
    pub min_size: f64,

    /// Size at `max_width` (px)
    pub max_size: f64,

    /// Viewport (or container) width where the ramp starts (px)
    pub min_width: f64,

    /// Viewport (or container) width where the ramp ends (px)
    pub max_width: f64,

    /// Format in px instead of rem
    #[serde(default)]
    pub use_px: bool,

    /// Unit for the slope term; falls back to [`OutputOptions::relative_unit`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeUnit>,
}

impl ClampRequest {
    /// Create a rem request using the default relative unit.
    pub fn new(min_size: f64, max_size: f64, min_width: f64, max_width: f64) -> Self {
        ClampRequest {
            min_size,
            max_size,
            min_width,
            max_width,
            use_px: false,
            relative_to: None,
        }
    }

    /// Format in px instead of rem.
    pub fn with_px(mut self, use_px: bool) -> Self {
        self.use_px = use_px;
        self
    }

    /// Override the relative unit.
    pub fn with_relative_to(mut self, unit: RelativeUnit) -> Self {
        self.relative_to = Some(unit);
        self
    }

    /// Unit used for bounds and intercept
    pub fn length_unit(&self) -> LengthUnit {
        if self.use_px {
            LengthUnit::Px
        } else {
            LengthUnit::Rem
        }
    }

    /// Validate input parameters.
    ///
    /// Only used by [`try_calculate_clamp`]; the lenient formatter accepts
    /// anything and lets degenerate input produce degenerate output.
    pub fn validate(&self) -> FluidResult<()> {
        let fields = [
            ("minSize", self.min_size),
            ("maxSize", self.max_size),
            ("minWidth", self.min_width),
            ("maxWidth", self.max_width),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(FluidError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be finite",
                ));
            }
            if value <= 0.0 {
                return Err(FluidError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if self.min_width == self.max_width {
            return Err(FluidError::DegenerateRange {
                min_width: self.min_width,
                max_width: self.max_width,
            });
        }
        Ok(())
    }
}

/// Slope and intercept of a ramp, both expressed in `unit`.
///
/// Slope is size per unit of width; multiply by 100 for a percentage of the
/// relative unit. Each input is converted before subtracting so the results
/// match the reference output to the last printed digit.
pub fn slope_intercept(
    min_size: f64,
    max_size: f64,
    min_width: f64,
    max_width: f64,
    unit: LengthUnit,
) -> (f64, f64) {
    let min_size = unit.convert(Px(min_size));
    let max_size = unit.convert(Px(max_size));
    let min_width = unit.convert(Px(min_width));
    let max_width = unit.convert(Px(max_width));

    let slope = (max_size - min_size) / (max_width - min_width);
    let intercept = -min_width * slope + min_size;
    (slope, intercept)
}

/// Format a rounded number the way CSS authors write it: `1`, `0.6522`, `-1.5789`.
pub fn format_number(value: f64, precision: u32) -> String {
    round_to(value, precision).to_string()
}

/// Format a single clamp expression.
pub fn calculate_clamp(request: &ClampRequest, options: &OutputOptions) -> String {
    let unit = request.length_unit();
    let relative = options.resolve_unit(request.relative_to);
    let precision = options.precision;

    let low = request.min_size.min(request.max_size);
    let high = request.min_size.max(request.max_size);
    let (slope, intercept) = slope_intercept(
        request.min_size,
        request.max_size,
        request.min_width,
        request.max_width,
        unit,
    );

    let clamp = format!(
        "clamp({min}{unit}, {intercept}{unit} + {slope}{relative}, {max}{unit})",
        min = format_number(unit.convert(Px(low)), precision),
        intercept = format_number(intercept, precision),
        slope = format_number(slope * 100.0, precision),
        max = format_number(unit.convert(Px(high)), precision),
    );
    trace!(?request, %clamp, "formatted clamp");
    clamp
}

/// Validate, then format. Rejects non-positive or non-finite inputs and an
/// empty viewport range instead of emitting `NaN`/`inf` in the expression.
pub fn try_calculate_clamp(request: &ClampRequest, options: &OutputOptions) -> FluidResult<String> {
    if let Err(err) = request.validate() {
        warn!(code = err.error_code(), "rejected clamp request: {}", err);
        return Err(err);
    }
    Ok(calculate_clamp(request, options))
}

/// The rem expression and, when enabled, its px twin.
pub(crate) fn clamp_variants(
    min_size: f64,
    max_size: f64,
    min_width: f64,
    max_width: f64,
    relative_to: RelativeUnit,
    options: &OutputOptions,
) -> (String, Option<String>) {
    let request =
        ClampRequest::new(min_size, max_size, min_width, max_width).with_relative_to(relative_to);
    let clamp = calculate_clamp(&request, options);
    let clamp_px = options
        .fields
        .clamp_px
        .then(|| calculate_clamp(&request.with_px(true), options));
    (clamp, clamp_px)
}

// ============================================================================
// Clamp List
// ============================================================================

/// A list of (min, max) size pairs sharing one viewport range.
///
/// ## JSON Example
///
/// ```json
/// { "minWidth": 320, "maxWidth": 1080, "pairs": [[12, 16], [40, 28]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampsConfig {
    /// Width where every ramp starts (px)
    pub min_width: f64,

    /// Width where every ramp ends (px)
    pub max_width: f64,

    /// `(min_size, max_size)` pairs in px
    #[serde(default)]
    pub pairs: Vec<(f64, f64)>,

    /// Unit for the slope term; falls back to [`OutputOptions::relative_unit`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeUnit>,
}

/// One formatted pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampPair {
    /// `"<min>-<max>"` in input order
    pub label: String,

    /// rem expression
    pub clamp: String,

    /// px expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp_px: Option<String>,
}

/// Format every pair of a [`ClampsConfig`], preserving input order.
///
/// The label keeps the caller's order even when the pair shrinks, so
/// `(40, 28)` is labelled `"40-28"` while its bounds print as `28px ... 40px`.
pub fn calculate_clamps(config: &ClampsConfig, options: &OutputOptions) -> Vec<ClampPair> {
    let relative = options.resolve_unit(config.relative_to);
    debug!(pairs = config.pairs.len(), %relative, "calculating clamp list");

    config
        .pairs
        .iter()
        .map(|&(min_size, max_size)| {
            let (clamp, clamp_px) = clamp_variants(
                min_size,
                max_size,
                config.min_width,
                config.max_width,
                relative,
                options,
            );
            ClampPair {
                label: format!("{}-{}", min_size, max_size),
                clamp,
                clamp_px,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MAX_PRECISION;

    fn options() -> OutputOptions {
        OutputOptions::default()
    }

    #[test]
    fn test_single_clamp() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
        assert_eq!(
            calculate_clamp(&request, &options()),
            "clamp(1rem, 0.6522rem + 1.7391vi, 2rem)"
        );
    }

    #[test]
    fn test_px_clamp() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0).with_px(true);
        assert_eq!(
            calculate_clamp(&request, &options()),
            "clamp(16px, 10.4348px + 1.7391vi, 32px)"
        );
    }

    #[test]
    fn test_container_clamp() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0)
            .with_relative_to(RelativeUnit::ContainerInline);
        assert_eq!(
            calculate_clamp(&request, &options()),
            "clamp(1rem, 0.6522rem + 1.7391cqi, 2rem)"
        );
    }

    #[test]
    fn test_legacy_vw_clamp() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
        let legacy = OutputOptions::default().with_relative_unit(RelativeUnit::ViewportWidth);
        assert_eq!(calculate_clamp(&request, &legacy), "clamp(1rem, 0.6522rem + 1.7391vw, 2rem)");
    }

    #[test]
    fn test_three_decimal_precision() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
        assert_eq!(
            calculate_clamp(&request, &OutputOptions::legacy()),
            "clamp(1rem, 0.652rem + 1.739vw, 2rem)"
        );
    }

    #[test]
    fn test_equal_sizes_give_flat_clamp() {
        let request = ClampRequest::new(5.0, 5.0, 320.0, 1240.0);
        assert_eq!(
            calculate_clamp(&request, &options()),
            "clamp(0.3125rem, 0.3125rem + 0vi, 0.3125rem)"
        );
        assert_eq!(
            calculate_clamp(&request.with_px(true), &options()),
            "clamp(5px, 5px + 0vi, 5px)"
        );
    }

    #[test]
    fn test_shrinking_ramp_orders_bounds_but_keeps_slope_sign() {
        let request = ClampRequest::new(40.0, 28.0, 320.0, 1080.0);
        assert_eq!(
            calculate_clamp(&request, &options()),
            "clamp(1.75rem, 2.8158rem + -1.5789vi, 2.5rem)"
        );
    }

    #[test]
    fn test_excessive_precision_is_capped() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
        let huge = OutputOptions {
            precision: 400,
            ..OutputOptions::default()
        };
        let capped = OutputOptions {
            precision: MAX_PRECISION,
            ..OutputOptions::default()
        };

        let clamp = calculate_clamp(&request, &huge);
        assert!(!clamp.contains("NaN"));
        assert!(!clamp.contains("inf"));
        assert_eq!(clamp, calculate_clamp(&request, &capped));
        assert!(clamp.starts_with("clamp(1rem, 0.652173913"));
    }

    #[test]
    fn test_slope_intercept() {
        let (slope, intercept) = slope_intercept(16.0, 32.0, 320.0, 1240.0, LengthUnit::Px);
        assert!((slope - 16.0 / 920.0).abs() < 1e-12);
        assert!((intercept - 10.434_782_6).abs() < 1e-6);
    }

    #[test]
    fn test_idempotent() {
        let request = ClampRequest::new(18.0, 20.0, 320.0, 1240.0);
        assert_eq!(calculate_clamp(&request, &options()), calculate_clamp(&request, &options()));
    }

    #[test]
    fn test_strict_mode_rejects_degenerate_range() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 320.0);
        let err = try_calculate_clamp(&request, &options()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_RANGE");

        // Lenient mode still formats something
        assert!(calculate_clamp(&request, &options()).starts_with("clamp(1rem, "));
    }

    #[test]
    fn test_strict_mode_rejects_non_positive() {
        let request = ClampRequest::new(-16.0, 32.0, 320.0, 1240.0);
        let err = try_calculate_clamp(&request, &options()).unwrap_err();
        assert!(matches!(err, FluidError::InvalidInput { ref field, .. } if field == "minSize"));

        let request = ClampRequest::new(16.0, f64::NAN, 320.0, 1240.0);
        assert!(try_calculate_clamp(&request, &options()).is_err());
    }

    #[test]
    fn test_strict_mode_accepts_valid() {
        let request = ClampRequest::new(16.0, 32.0, 320.0, 1240.0);
        assert_eq!(
            try_calculate_clamp(&request, &options()).unwrap(),
            "clamp(1rem, 0.6522rem + 1.7391vi, 2rem)"
        );
    }

    #[test]
    fn test_multiple_clamps() {
        let config = ClampsConfig {
            min_width: 320.0,
            max_width: 1080.0,
            pairs: vec![(12.0, 16.0), (40.0, 28.0)],
            relative_to: Some(RelativeUnit::ViewportWidth),
        };
        let result = calculate_clamps(&config, &options());
        assert_eq!(
            result,
            vec![
                ClampPair {
                    label: "12-16".to_string(),
                    clamp: "clamp(0.75rem, 0.6447rem + 0.5263vw, 1rem)".to_string(),
                    clamp_px: Some("clamp(12px, 10.3158px + 0.5263vw, 16px)".to_string()),
                },
                ClampPair {
                    label: "40-28".to_string(),
                    clamp: "clamp(1.75rem, 2.8158rem + -1.5789vw, 2.5rem)".to_string(),
                    clamp_px: Some("clamp(28px, 45.0526px + -1.5789vw, 40px)".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_clamps_without_px_field() {
        let config = ClampsConfig {
            min_width: 320.0,
            max_width: 1080.0,
            pairs: vec![(12.0, 16.0)],
            relative_to: None,
        };
        let result = calculate_clamps(&config, &OutputOptions::legacy());
        assert_eq!(result[0].clamp_px, None);
        let json = serde_json::to_string(&result[0]).unwrap();
        assert!(!json.contains("clampPx"));
    }

    #[test]
    fn test_request_json() {
        let request: ClampRequest = serde_json::from_str(
            r#"{
                "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 1240,
                "relativeTo": "container"
            }"#,
        )
        .unwrap();
        assert!(!request.use_px);
        assert_eq!(request.relative_to, Some(RelativeUnit::ContainerInline));

        let config: ClampsConfig =
            serde_json::from_str(r#"{"minWidth": 320, "maxWidth": 1080, "pairs": [[12, 16]]}"#)
                .unwrap();
        assert_eq!(config.pairs, vec![(12.0, 16.0)]);
    }
}
