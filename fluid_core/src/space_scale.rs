//! # Space Scale
//!
//! Generates a named spacing scale from arbitrary multipliers of a base
//! size, plus fluid pairs that span from one size to another.
//!
//! ## Labels
//!
//! | Step | Label    |
//! |------|----------|
//! | -3   | `3xs`    |
//! | -2   | `2xs`    |
//! | -1   | `xs`     |
//! | 0    | `s`      |
//! | 1    | `m`      |
//! | 2    | `l`      |
//! | 3    | `xl`     |
//! | 4    | `2xl`    |
//!
//! Sizes are whole pixels. Spacing tokens are rounded to the nearest px
//! before any clamp is built from them.
//!
//! ## Example
//!
//! ```rust
//! use fluid_core::space_scale::{calculate_space_scale, SpaceScaleConfig};
//! use fluid_core::options::OutputOptions;
//!
//! let config = SpaceScaleConfig {
//!     min_width: 320.0,
//!     max_width: 1240.0,
//!     min_size: 18.0,
//!     max_size: 20.0,
//!     positive_steps: vec![1.5, 2.0, 3.0],
//!     negative_steps: vec![0.75, 0.5],
//!     custom_sizes: vec!["s-l".to_string()],
//!     relative_to: None,
//! };
//!
//! let scale = calculate_space_scale(&config, &OutputOptions::default());
//! assert_eq!(scale.sizes.len(), 6);
//! assert_eq!(scale.one_up_pairs.len(), 5);
//! assert_eq!(scale.custom_pairs[0].label, "s-l");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clamp::clamp_variants;
use crate::interpolate::round_to;
use crate::options::OutputOptions;
use crate::units::{Px, RelativeUnit};

/// Input parameters for a space scale.
///
/// ## JSON Example
///
/// ```json
/// {
///   "minWidth": 320,
///   "maxWidth": 1240,
///   "minSize": 18,
///   "maxSize": 20,
///   "positiveSteps": [1.5, 2, 3, 4, 6],
///   "negativeSteps": [0.75, 0.5, 0.25],
///   "customSizes": ["s-l", "2xl-4xl"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceScaleConfig {
    /// Viewport width where the scale starts (px)
    pub min_width: f64,

    /// Viewport width where the scale ends (px)
    pub max_width: f64,

    /// Base (`s`) size at `min_width` (px)
    pub min_size: f64,

    /// Base (`s`) size at `max_width` (px)
    pub max_size: f64,

    /// Multipliers above the base, any order
    #[serde(default)]
    pub positive_steps: Vec<f64>,

    /// Multipliers below the base, any order
    #[serde(default)]
    pub negative_steps: Vec<f64>,

    /// Extra pairs as `"<label>-<label>"`, e.g. `"s-l"`
    #[serde(default)]
    pub custom_sizes: Vec<String>,

    /// Unit for the slope term; falls back to [`OutputOptions::relative_unit`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeUnit>,
}

/// One named size of the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSize {
    /// Label such as `s`, `2xl`, `3xs`
    pub label: String,

    /// Size at `min_width` (whole px)
    pub min_size: f64,

    /// Size at `max_width` (whole px)
    pub max_size: f64,

    /// rem expression
    pub clamp: String,

    /// px expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp_px: Option<String>,

    /// Multiplier applied to the base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

/// A fluid range from one size's minimum to another size's maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePair {
    /// `"<from>-<to>"`
    pub label: String,

    /// `min_size` of the first size
    pub min_size: f64,

    /// `max_size` of the second size
    pub max_size: f64,

    /// rem expression
    pub clamp: String,

    /// px expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp_px: Option<String>,
}

/// Complete space scale output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceScale {
    /// Sizes from smallest to largest
    pub sizes: Vec<SpaceSize>,

    /// Every size paired with the next larger one
    pub one_up_pairs: Vec<SpacePair>,

    /// Pairs requested through `custom_sizes` that resolved
    pub custom_pairs: Vec<SpacePair>,
}

impl SpaceScale {
    /// Look up a size by label.
    pub fn size(&self, label: &str) -> Option<&SpaceSize> {
        self.sizes.iter().find(|size| size.label == label)
    }
}

/// Label for a space step.
pub fn space_label(step: i32) -> String {
    match step {
        0 => "s".to_string(),
        1 => "m".to_string(),
        2 => "l".to_string(),
        3 => "xl".to_string(),
        -1 => "xs".to_string(),
        n if n > 3 => format!("{}xl", n - 2),
        n => format!("{}xs", n.unsigned_abs()),
    }
}

struct ScaleContext<'a> {
    config: &'a SpaceScaleConfig,
    relative: RelativeUnit,
    options: &'a OutputOptions,
}

impl ScaleContext<'_> {
    fn size(&self, multiplier: f64, step: i32) -> SpaceSize {
        // f64::round takes halves away from zero; sizes are positive, so halves round up
        let min_size = (Px(self.config.min_size) * multiplier).value().round();
        let max_size = (Px(self.config.max_size) * multiplier).value().round();
        let (clamp, clamp_px) = self.clamps(min_size, max_size);

        SpaceSize {
            label: space_label(step),
            min_size: round_to(min_size, self.options.precision),
            max_size: round_to(max_size, self.options.precision),
            clamp,
            clamp_px,
            multiplier: self.options.fields.multiplier.then_some(multiplier),
        }
    }

    fn pair(&self, from: &SpaceSize, to: &SpaceSize) -> SpacePair {
        let (clamp, clamp_px) = self.clamps(from.min_size, to.max_size);
        SpacePair {
            label: format!("{}-{}", from.label, to.label),
            min_size: from.min_size,
            max_size: to.max_size,
            clamp,
            clamp_px,
        }
    }

    fn clamps(&self, min_size: f64, max_size: f64) -> (String, Option<String>) {
        clamp_variants(
            min_size,
            max_size,
            self.config.min_width,
            self.config.max_width,
            self.relative,
            self.options,
        )
    }
}

/// Pair every size with its successor. `sizes` must be ascending.
fn one_up_pairs(ctx: &ScaleContext<'_>, sizes: &[SpaceSize]) -> Vec<SpacePair> {
    sizes.windows(2).map(|w| ctx.pair(&w[0], &w[1])).collect()
}

/// Resolve `"<a>-<b>"` labels. Malformed or unknown labels are skipped.
fn custom_pairs(ctx: &ScaleContext<'_>, sizes: &[SpaceSize]) -> Vec<SpacePair> {
    let find = |label: &str| sizes.iter().find(|size| size.label == label);

    ctx.config
        .custom_sizes
        .iter()
        .filter_map(|custom| {
            let mut parts = custom.split('-');
            let key_a = parts.next().filter(|key| !key.is_empty());
            let key_b = parts.next().filter(|key| !key.is_empty());

            let pair = match (key_a.and_then(find), key_b.and_then(find)) {
                (Some(a), Some(b)) => Some(ctx.pair(a, b)),
                _ => None,
            };
            if pair.is_none() {
                trace!(custom = %custom, "skipping unresolved custom pair");
            }
            pair
        })
        .collect()
}

/// Generate sizes, one-up pairs and custom pairs.
pub fn calculate_space_scale(config: &SpaceScaleConfig, options: &OutputOptions) -> SpaceScale {
    let ctx = ScaleContext {
        config,
        relative: options.resolve_unit(config.relative_to),
        options,
    };
    debug!(
        positive = config.positive_steps.len(),
        negative = config.negative_steps.len(),
        custom = config.custom_sizes.len(),
        relative = %ctx.relative,
        "calculating space scale"
    );

    let mut positive = config.positive_steps.clone();
    positive.sort_by(f64::total_cmp);

    // Largest fraction sits closest to the base
    let mut negative = config.negative_steps.clone();
    negative.sort_by(|a, b| b.total_cmp(a));

    let mut sizes: Vec<SpaceSize> = negative
        .iter()
        .zip(1..)
        .map(|(&multiplier, n): (&f64, i32)| ctx.size(multiplier, -n))
        .collect();
    sizes.reverse();
    sizes.push(ctx.size(1.0, 0));
    sizes.extend(
        positive
            .iter()
            .zip(1..)
            .map(|(&multiplier, n): (&f64, i32)| ctx.size(multiplier, n)),
    );

    let one_up_pairs = one_up_pairs(&ctx, &sizes);
    let custom_pairs = custom_pairs(&ctx, &sizes);

    SpaceScale {
        sizes,
        one_up_pairs,
        custom_pairs,
    }
}
