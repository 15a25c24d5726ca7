//! # WCAG 1.4.4 Resize Text Check
//!
//! Fluid type ties font size to the viewport, and zooming shrinks the
//! viewport in CSS px. A steep ramp can therefore stop text from reaching
//! 200% of its size even at the browser's 500% zoom ceiling.
//!
//! For a device viewport width `V` and zoom `z`, the rendered size in device
//! px of `clamp(low, b + s*vw, high)` is `clamp(z*low, z*b + s*V, z*high)`.
//! The ramp fails at `V` when the 500% size is below twice the 100% size.
//! Both sides are piecewise linear in `V`, so the failing range is found
//! exactly from the breakpoints and zero crossings.
//!
//! The margin between the two sides only ever falls, levels off, then rises
//! again as `V` grows, so the failing viewports always form one contiguous
//! range and a single `{from, to}` describes them all.
//!
//! ```rust
//! use fluid_core::wcag::{check_wcag, WcagInput};
//!
//! let gentle = WcagInput { min_size: 18.0, max_size: 20.0, min_width: 320.0, max_width: 1240.0 };
//! assert!(check_wcag(&gentle, 4).is_none());
//!
//! let steep = WcagInput { min_size: 16.0, max_size: 80.0, min_width: 320.0, max_width: 1240.0 };
//! assert!(check_wcag(&steep, 4).is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::clamp::slope_intercept;
use crate::interpolate::{clamp_scalar, lerp, round_to};
use crate::units::LengthUnit;

/// Highest zoom level browsers offer
pub const MAX_ZOOM: f64 = 5.0;

/// Text must reach this multiple of its unzoomed size
pub const REQUIRED_SCALE: f64 = 2.0;

/// The ramp to check, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagInput {
    /// Font size at `min_width`
    pub min_size: f64,
    /// Font size at `max_width`
    pub max_size: f64,
    /// Viewport width where the ramp starts
    pub min_width: f64,
    /// Viewport width where the ramp ends
    pub max_width: f64,
}

/// Device viewport range (px) where the ramp fails.
///
/// Every viewport between `from` and `to` fails and none outside does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WcagViolation {
    /// First failing device viewport width
    pub from: f64,
    /// Last failing device viewport width
    pub to: f64,
}

/// A clamped linear ramp in px, `clamp(low, intercept + slope * V, high)`.
#[derive(Debug, Clone, Copy)]
struct Ramp {
    low: f64,
    high: f64,
    slope: f64,
    intercept: f64,
}

impl Ramp {
    fn new(input: &WcagInput) -> Option<Self> {
        let (slope, intercept) = slope_intercept(
            input.min_size,
            input.max_size,
            input.min_width,
            input.max_width,
            LengthUnit::Px,
        );
        if !slope.is_finite() || !intercept.is_finite() {
            return None;
        }
        Some(Ramp {
            low: input.min_size.min(input.max_size),
            high: input.min_size.max(input.max_size),
            slope,
            intercept,
        })
    }

    /// Rendered size in device px at device viewport `viewport` and `zoom`.
    fn size_at(&self, zoom: f64, viewport: f64) -> f64 {
        clamp_scalar(
            zoom * self.intercept + self.slope * viewport,
            zoom * self.low,
            zoom * self.high,
        )
    }

    /// Negative where the fully zoomed size misses the required scale.
    fn margin(&self, viewport: f64) -> f64 {
        self.size_at(MAX_ZOOM, viewport) - REQUIRED_SCALE * self.size_at(1.0, viewport)
    }
}

/// Check a ramp against WCAG 1.4.4. Returns `None` when it passes everywhere.
pub fn check_wcag(input: &WcagInput, precision: u32) -> Option<WcagViolation> {
    let ramp = Ramp::new(input)?;

    // Past MAX_ZOOM * max_width both sides are saturated at their upper bound
    let end = MAX_ZOOM * input.min_width.max(input.max_width);
    let mut points = vec![0.0, end];
    if ramp.slope != 0.0 {
        for zoom in [1.0, MAX_ZOOM] {
            for bound in [ramp.low, ramp.high] {
                let viewport = zoom * (bound - ramp.intercept) / ramp.slope;
                if viewport > 0.0 && viewport < end {
                    points.push(viewport);
                }
            }
        }
    }
    points.sort_by(f64::total_cmp);
    points.dedup();

    let mut failing: Option<(f64, f64)> = None;
    for window in points.windows(2) {
        let (a, b) = (window[0], window[1]);
        let (margin_a, margin_b) = (ramp.margin(a), ramp.margin(b));
        let crossing = || lerp(a, b, margin_a / (margin_a - margin_b));

        let segment = match (margin_a < 0.0, margin_b < 0.0) {
            (true, true) => Some((a, b)),
            (true, false) => Some((a, crossing())),
            (false, true) => Some((crossing(), b)),
            (false, false) => None,
        };
        // Failing segments are consecutive windows; extend the open range
        if let Some((from, to)) = segment {
            failing = Some(match failing {
                Some((prev_from, _)) => (prev_from, to),
                None => (from, to),
            });
        }
    }

    failing.map(|(from, to)| WcagViolation {
        from: round_to(from, precision),
        to: round_to(to, precision),
    })
}
