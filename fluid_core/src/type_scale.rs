//! # Type Scale
//!
//! Generates a geometric type scale around a base font size. Both the base
//! size and the scale ratio are interpolated across the viewport range, so
//! at wide viewports the base is larger *and* each step grows faster:
//!
//! ```text
//! size(viewport, step) = font_size(viewport) * ratio(viewport) ^ step
//! ```
//!
//! Steps are emitted largest first: `+N ..= +1`, `0`, `-1 ..= -M`.
//!
//! ## Example
//!
//! ```rust
//! use fluid_core::type_scale::{calculate_type_scale, TypeScaleConfig};
//! use fluid_core::options::OutputOptions;
//!
//! let config = TypeScaleConfig {
//!     min_width: 320.0,
//!     max_width: 1240.0,
//!     min_font_size: 18.0,
//!     max_font_size: 20.0,
//!     min_type_scale: 1.2,
//!     max_type_scale: 1.25,
//!     positive_steps: 5,
//!     negative_steps: 2,
//!     label_style: None,
//!     relative_to: None,
//! };
//!
//! let steps = calculate_type_scale(&config, &OutputOptions::default());
//! assert_eq!(steps.len(), 8);
//! assert_eq!(steps[5].step, 0);
//! assert_eq!(steps[5].min_font_size, 18.0);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::clamp::clamp_variants;
use crate::interpolate::{range, round_to};
use crate::options::OutputOptions;
use crate::units::RelativeUnit;
use crate::wcag::{check_wcag, WcagInput, WcagViolation};

/// Input parameters for a type scale.
///
/// ## JSON Example
///
/// ```json
/// {
///   "minWidth": 320,
///   "maxWidth": 1240,
///   "minFontSize": 18,
///   "maxFontSize": 20,
///   "minTypeScale": 1.2,
///   "maxTypeScale": 1.25,
///   "positiveSteps": 5,
///   "negativeSteps": 2,
///   "labelStyle": "tailwind"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScaleConfig {
    /// Viewport width where the scale starts (px)
    pub min_width: f64,

    /// Viewport width where the scale ends (px)
    pub max_width: f64,

    /// Base font size at `min_width` (px)
    pub min_font_size: f64,

    /// Base font size at `max_width` (px)
    pub max_font_size: f64,

    /// Scale ratio at `min_width` (e.g. 1.2, minor third)
    pub min_type_scale: f64,

    /// Scale ratio at `max_width` (e.g. 1.25, major third)
    pub max_type_scale: f64,

    /// Number of steps above the base
    #[serde(default)]
    pub positive_steps: u32,

    /// Number of steps below the base
    #[serde(default)]
    pub negative_steps: u32,

    /// How steps are labelled; numeric when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_style: Option<LabelStyle>,

    /// Unit for the slope term; falls back to [`OutputOptions::relative_unit`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeUnit>,
}

impl TypeScaleConfig {
    /// Font size in px at `viewport` for `step`.
    pub fn size_at(&self, viewport: f64, step: i32) -> f64 {
        let across = |at_min: f64, at_max: f64| {
            range(self.min_width, self.max_width, at_min, at_max, viewport)
        };
        let ratio = across(self.min_type_scale, self.max_type_scale);
        let font_size = across(self.min_font_size, self.max_font_size);
        font_size * ratio.powf(f64::from(step))
    }
}

/// Label vocabulary for type steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `"2"`, `"1"`, `"0"`, `"-1"`
    #[default]
    Numeric,
    /// `xl`, `l`, `m`, `s`, `xs`
    Tshirt,
    /// `xl`, `lg`, `base`, `sm`, `xs`
    Tailwind,
}

impl LabelStyle {
    /// Label for `step`. Both named styles count outward from `xl`/`xs`,
    /// so step 3 is `2xl` and step -3 is `2xs`.
    pub fn label(self, step: i32) -> String {
        let (up, base, down) = match self {
            LabelStyle::Numeric => return step.to_string(),
            LabelStyle::Tshirt => ("l", "m", "s"),
            LabelStyle::Tailwind => ("lg", "base", "sm"),
        };
        match step {
            0 => base.to_string(),
            1 => up.to_string(),
            -1 => down.to_string(),
            2 => "xl".to_string(),
            -2 => "xs".to_string(),
            n if n > 0 => format!("{}xl", n - 1),
            n => format!("{}xs", n.unsigned_abs() - 1),
        }
    }
}

/// One generated step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStep {
    /// Step index, 0 is the base
    pub step: i32,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Size at `min_width` (px, rounded)
    pub min_font_size: f64,

    /// Size at `max_width` (px, rounded)
    pub max_font_size: f64,

    /// WCAG 1.4.4 result; `Some(None)` is a pass, `None` means not checked
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub wcag_violation: Option<Option<WcagViolation>>,

    /// rem expression
    pub clamp: String,

    /// px expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp_px: Option<String>,
}

/// Keep an explicit `null` distinct from a missing key.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn calculate_type_step(
    config: &TypeScaleConfig,
    step: i32,
    relative: RelativeUnit,
    options: &OutputOptions,
) -> TypeStep {
    let min_font_size = config.size_at(config.min_width, step);
    let max_font_size = config.size_at(config.max_width, step);

    // Clamp from unrounded sizes so rounding does not leak into the slope
    let (clamp, clamp_px) = clamp_variants(
        min_font_size,
        max_font_size,
        config.min_width,
        config.max_width,
        relative,
        options,
    );

    let label = options
        .fields
        .label
        .then(|| config.label_style.unwrap_or_default().label(step));

    let wcag_violation = options.fields.wcag.then(|| {
        let input = WcagInput {
            min_size: min_font_size,
            max_size: max_font_size,
            min_width: config.min_width,
            max_width: config.max_width,
        };
        check_wcag(&input, options.precision)
    });

    TypeStep {
        step,
        label,
        min_font_size: round_to(min_font_size, options.precision),
        max_font_size: round_to(max_font_size, options.precision),
        wcag_violation,
        clamp,
        clamp_px,
    }
}

/// Generate the full type scale, largest step first.
pub fn calculate_type_scale(config: &TypeScaleConfig, options: &OutputOptions) -> Vec<TypeStep> {
    let relative = options.resolve_unit(config.relative_to);
    debug!(
        positive = config.positive_steps,
        negative = config.negative_steps,
        %relative,
        "calculating type scale"
    );

    let positive = (1..=config.positive_steps as i32).rev();
    let negative = (1..=config.negative_steps as i32).map(|n| -n);

    positive
        .chain(std::iter::once(0))
        .chain(negative)
        .map(|step| calculate_type_step(config, step, relative, options))
        .collect()
}
