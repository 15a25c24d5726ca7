//! # Calculation Requests
//!
//! A single tagged envelope over every operation, so JSON callers (the CLI,
//! an MCP tool, a web worker) can send one document and get one back.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "type": "clamp",
//!   "minSize": 16,
//!   "maxSize": 32,
//!   "minWidth": 320,
//!   "maxWidth": 1240,
//!   "options": { "relativeUnit": "container" }
//! }
//! ```
//!
//! ```rust
//! use fluid_core::request::{CalculationRequest, CalculationResponse};
//!
//! let request = CalculationRequest::from_json(
//!     r#"{"type": "clamp", "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 1240}"#,
//! ).unwrap();
//!
//! let response = request.run().unwrap();
//! assert_eq!(
//!     response,
//!     CalculationResponse::Clamp { clamp: "clamp(1rem, 0.6522rem + 1.7391vi, 2rem)".to_string() }
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clamp::{
    calculate_clamp, calculate_clamps, try_calculate_clamp, ClampPair, ClampRequest, ClampsConfig,
};
use crate::errors::FluidResult;
use crate::options::OutputOptions;
use crate::space_scale::{calculate_space_scale, SpaceScale, SpaceScaleConfig};
use crate::type_scale::{calculate_type_scale, TypeScaleConfig, TypeStep};

/// Any calculation, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CalculationRequest {
    /// Single clamp expression
    Clamp {
        #[serde(flatten)]
        request: ClampRequest,
        /// Validate inputs and fail instead of formatting degenerate output
        #[serde(default)]
        strict: bool,
        #[serde(default)]
        options: OutputOptions,
    },
    /// List of clamp expressions
    Clamps {
        #[serde(flatten)]
        config: ClampsConfig,
        #[serde(default)]
        options: OutputOptions,
    },
    /// Geometric type scale
    TypeScale {
        #[serde(flatten)]
        config: TypeScaleConfig,
        #[serde(default)]
        options: OutputOptions,
    },
    /// Multiplier space scale
    SpaceScale {
        #[serde(flatten)]
        config: SpaceScaleConfig,
        #[serde(default)]
        options: OutputOptions,
    },
}

/// Result of a [`CalculationRequest`], tagged like the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CalculationResponse {
    Clamp { clamp: String },
    Clamps { clamps: Vec<ClampPair> },
    TypeScale { steps: Vec<TypeStep> },
    SpaceScale(SpaceScale),
}

impl CalculationRequest {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> FluidResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Operation name as it appears in the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationRequest::Clamp { .. } => "clamp",
            CalculationRequest::Clamps { .. } => "clamps",
            CalculationRequest::TypeScale { .. } => "typeScale",
            CalculationRequest::SpaceScale { .. } => "spaceScale",
        }
    }

    /// Run the calculation. Only strict clamp requests can fail.
    pub fn run(&self) -> FluidResult<CalculationResponse> {
        debug!(kind = self.kind(), "running calculation request");
        let response = match self {
            CalculationRequest::Clamp { request, strict, options } => {
                let clamp = if *strict {
                    try_calculate_clamp(request, options)?
                } else {
                    calculate_clamp(request, options)
                };
                CalculationResponse::Clamp { clamp }
            }
            CalculationRequest::Clamps { config, options } => CalculationResponse::Clamps {
                clamps: calculate_clamps(config, options),
            },
            CalculationRequest::TypeScale { config, options } => CalculationResponse::TypeScale {
                steps: calculate_type_scale(config, options),
            },
            CalculationRequest::SpaceScale { config, options } => {
                CalculationResponse::SpaceScale(calculate_space_scale(config, options))
            }
        };
        Ok(response)
    }
}

impl CalculationResponse {
    /// Pretty JSON for display or transmission.
    pub fn to_json_pretty(&self) -> FluidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_clamp_request_fails() {
        let request = CalculationRequest::from_json(
            r#"{"type": "clamp", "minSize": 16, "maxSize": 32, "minWidth": 320, "maxWidth": 320,
                "strict": true}"#,
        )
        .unwrap();
        let err = request.run().unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_RANGE");
    }

    #[test]
    fn test_clamps_request_with_options() {
        let request = CalculationRequest::from_json(
            r#"{"type": "clamps", "minWidth": 320, "maxWidth": 1080, "pairs": [[12, 16]],
                "options": {"relativeUnit": "vw", "fields": {"clampPx": false}}}"#,
        )
        .unwrap();
        assert_eq!(request.kind(), "clamps");
        match request.run().unwrap() {
            CalculationResponse::Clamps { clamps } => {
                assert_eq!(clamps.len(), 1);
                assert_eq!(clamps[0].clamp, "clamp(0.75rem, 0.6447rem + 0.5263vw, 1rem)");
                assert_eq!(clamps[0].clamp_px, None);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_type_scale_request() {
        let request = CalculationRequest::from_json(
            r#"{"type": "typeScale", "minWidth": 320, "maxWidth": 1240, "minFontSize": 18,
                "maxFontSize": 20, "minTypeScale": 1.2, "maxTypeScale": 1.25, "positiveSteps": 2}"#,
        )
        .unwrap();
        match request.run().unwrap() {
            CalculationResponse::TypeScale { steps } => {
                assert_eq!(steps.len(), 3);
                assert_eq!(steps[2].clamp, "clamp(1.125rem, 1.0815rem + 0.2174vi, 1.25rem)");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_space_scale_response_json() {
        let request = CalculationRequest::from_json(
            r#"{"type": "spaceScale", "minWidth": 320, "maxWidth": 1240,
                "minSize": 18, "maxSize": 20,
                "positiveSteps": [1.5], "negativeSteps": [0.5]}"#,
        )
        .unwrap();
        let json = request.run().unwrap().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "spaceScale");
        assert_eq!(value["sizes"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["oneUpPairs"][0]["label"], "xs-s");
    }

    #[test]
    fn test_unknown_type_is_a_serialization_error() {
        let err = CalculationRequest::from_json(r#"{"type": "gridScale"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
