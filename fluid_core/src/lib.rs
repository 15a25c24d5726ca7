//! # fluid_core - Fluid Type & Space Scale Engine
//!
//! `fluid_core` computes CSS `clamp()` expressions that grow linearly with
//! the viewport (or a container) between two widths, and builds complete
//! typographic and spacing scales on top of them. All inputs and outputs are
//! JSON-serializable, with camelCase field names.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Lenient by default**: Degenerate input gives degenerate output; strict validation is opt-in
//! - **Deterministic**: Same input, byte-identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use fluid_core::{calculate_clamp, ClampRequest, OutputOptions};
//!
//! let clamp = calculate_clamp(
//!     &ClampRequest::new(16.0, 32.0, 320.0, 1240.0).with_px(true),
//!     &OutputOptions::default(),
//! );
//! assert_eq!(clamp, "clamp(16px, 10.4348px + 1.7391vi, 32px)");
//! ```
//!
//! ## Modules
//!
//! - [`interpolate`] - lerp / inverse lerp / range / rounding primitives
//! - [`units`] - px/rem newtypes and CSS unit tokens
//! - [`options`] - Output formatting and field-inclusion settings
//! - [`clamp`] - Clamp formatter and clamp lists
//! - [`type_scale`] - Geometric type scales
//! - [`space_scale`] - Multiplier space scales with one-up and custom pairs
//! - [`wcag`] - WCAG 1.4.4 resize-text check for fluid ramps
//! - [`request`] - Tagged JSON envelope over every operation
//! - [`errors`] - Structured error types

pub mod clamp;
pub mod errors;
pub mod interpolate;
pub mod options;
pub mod request;
pub mod space_scale;
pub mod type_scale;
pub mod units;
pub mod wcag;

// Re-export commonly used types at crate root for convenience
pub use clamp::{
    calculate_clamp, calculate_clamps, try_calculate_clamp, ClampPair, ClampRequest, ClampsConfig,
};
pub use errors::{FluidError, FluidResult};
pub use options::{OutputFields, OutputOptions};
pub use request::{CalculationRequest, CalculationResponse};
pub use space_scale::{calculate_space_scale, SpacePair, SpaceScale, SpaceScaleConfig, SpaceSize};
pub use type_scale::{calculate_type_scale, LabelStyle, TypeScaleConfig, TypeStep};
pub use units::{LengthUnit, RelativeUnit};
pub use wcag::{check_wcag, WcagInput, WcagViolation};
