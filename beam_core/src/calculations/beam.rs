//! # Simply-Supported Beam Calculation
//!
//! Computes the maximum bending moment and maximum deflection of a simply
//! supported, prismatic, linearly elastic beam using standard closed-form
//! formulas from Euler-Bernoulli beam theory.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Small deflections (linear elastic behavior)
//! - Prismatic beam (constant E and I along the length)
//! - Load cases: center point load OR full-span uniform load
//!
//! This is a quick-check tool, not a full structural analysis program:
//! no discretization, no load combinations, no multi-span systems.
//!
//! ## Units
//!
//! Units are not tracked; the caller must keep them consistent.
//! Example (SI): L in m, P in N, w in N/m, E in Pa, I in m⁴.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//! use beam_core::loads::LoadType;
//!
//! let input = BeamInput {
//!     length: 10.0,
//!     load_type: LoadType::PointLoadCenter,
//!     load: 100.0,
//!     youngs_modulus: 200e9,
//!     moment_of_inertia: 1e-6,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Max moment:     {:.1}", result.max_moment);     // 250.0
//! println!("Max deflection: {:.7}", result.max_deflection); // 0.0104167
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadType;

/// Input parameters for a simply-supported beam.
///
/// All fields share one consistent unit system chosen by the caller.
///
/// ## JSON Example (SI units)
///
/// ```json
/// {
///   "length": 10.0,
///   "load_type": "PointLoadCenter",
///   "load": 100.0,
///   "youngs_modulus": 200e9,
///   "moment_of_inertia": 1e-6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Beam length (distance between supports), must be positive
    pub length: f64,

    /// Load case (point load at center or uniform load)
    pub load_type: LoadType,

    /// Load magnitude, must be non-negative
    ///
    /// For PointLoadCenter this is P (concentrated force).
    /// For UniformLoad this is w (force per unit length).
    pub load: f64,

    /// Young's modulus E, must be positive. Higher E, stiffer material,
    /// less deflection.
    pub youngs_modulus: f64,

    /// Second moment of area I of the cross section, must be positive.
    /// Higher I, more resistance to bending, less deflection.
    pub moment_of_inertia: f64,
}

impl BeamInput {
    /// Validate physical admissibility of the inputs.
    ///
    /// Checks run in a fixed order and the first violation wins:
    /// length, Young's modulus, moment of inertia, load.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "length must be positive",
            ));
        }
        if self.youngs_modulus <= 0.0 {
            return Err(CalcError::invalid_input(
                "youngs_modulus",
                self.youngs_modulus.to_string(),
                "Young's modulus must be positive",
            ));
        }
        if self.moment_of_inertia <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_of_inertia",
                self.moment_of_inertia.to_string(),
                "moment of inertia must be positive",
            ));
        }
        if self.load < 0.0 {
            return Err(CalcError::invalid_input(
                "load",
                self.load.to_string(),
                "load must be non-negative",
            ));
        }
        Ok(())
    }

    /// Bending stiffness product E·I
    pub fn flexural_rigidity(&self) -> f64 {
        self.youngs_modulus * self.moment_of_inertia
    }
}

/// Results from a beam calculation.
///
/// Both maxima occur at mid-span for the supported load cases. Values are
/// in the caller's unit system, unrounded; round at presentation time.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment": 250.0,
///   "max_deflection": 0.0104167
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Maximum bending moment, at mid-span
    ///
    /// Point load at center: M = P·L/4
    /// Uniform load:         M = w·L²/8
    pub max_moment: f64,

    /// Maximum vertical deflection (sag), at mid-span
    ///
    /// Point load at center: δ = P·L³/(48·E·I)
    /// Uniform load:         δ = 5·w·L⁴/(384·E·I)
    pub max_deflection: f64,
}

/// Max moment and deflection for a point load at the center of the span.
///
/// M = P·L/4, δ = P·L³/(48·E·I)
fn point_load_center(input: &BeamInput) -> BeamResult {
    let p = input.load;
    let l = input.length;

    BeamResult {
        max_moment: p * l / 4.0,
        max_deflection: p * l.powi(3) / (48.0 * input.flexural_rigidity()),
    }
}

/// Max moment and deflection for a uniform load over the full span.
///
/// M = w·L²/8, δ = 5·w·L⁴/(384·E·I)
fn uniform_load(input: &BeamInput) -> BeamResult {
    let w = input.load;
    let l = input.length;

    BeamResult {
        max_moment: w * l.powi(2) / 8.0,
        max_deflection: 5.0 * w * l.powi(4) / (384.0 * input.flexural_rigidity()),
    }
}

/// Calculate the maximum moment and deflection for the given beam input.
///
/// This is a pure function suitable for LLM invocation: no shared state,
/// no I/O, safe to call from any thread.
///
/// # Arguments
///
/// * `input` - Beam geometry, material properties, and load case/magnitude
///
/// # Returns
///
/// * `Ok(BeamResult)` - Max moment and max deflection for the load case
/// * `Err(CalcError)` - Structured error if inputs are non-physical
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::beam::{calculate, BeamInput};
/// use beam_core::loads::LoadType;
///
/// let input = BeamInput {
///     length: 10.0,
///     load_type: LoadType::UniformLoad,
///     load: 20.0,
///     youngs_modulus: 200e9,
///     moment_of_inertia: 1e-6,
/// };
///
/// let result = calculate(&input).expect("valid input");
/// assert!((result.max_moment - 250.0).abs() < 1e-9);
/// ```
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    Ok(match input.load_type {
        LoadType::PointLoadCenter => point_load_center(input),
        LoadType::UniformLoad => uniform_load(input),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SI test beam: 10 m span, E = 200 GPa, I = 1e-6 m⁴
    fn test_beam(load_type: LoadType, load: f64) -> BeamInput {
        BeamInput {
            length: 10.0,
            load_type,
            load,
            youngs_modulus: 200e9,
            moment_of_inertia: 1e-6,
        }
    }

    #[test]
    fn test_point_load_moment() {
        let result = calculate(&test_beam(LoadType::PointLoadCenter, 100.0)).unwrap();

        // M = P·L/4 = 100 * 10 / 4 = 250
        assert!((result.max_moment - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_load_deflection() {
        let result = calculate(&test_beam(LoadType::PointLoadCenter, 100.0)).unwrap();

        // δ = P·L³/(48·E·I) = 100 * 10³ / (48 * 200e9 * 1e-6) = 0.0104167
        assert!((result.max_deflection - 0.0104167).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_load_moment() {
        let result = calculate(&test_beam(LoadType::UniformLoad, 20.0)).unwrap();

        // M = w·L²/8 = 20 * 10² / 8 = 250
        assert!((result.max_moment - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_load_deflection() {
        let result = calculate(&test_beam(LoadType::UniformLoad, 20.0)).unwrap();

        // δ = 5·w·L⁴/(384·E·I) = 5 * 20 * 10⁴ / (384 * 200e9 * 1e-6) = 0.0130208
        assert!((result.max_deflection - 0.0130208).abs() < 1e-6);
    }

    #[test]
    fn test_zero_load_is_valid_and_exact_zero() {
        for load_type in LoadType::ALL {
            let result = calculate(&test_beam(load_type, 0.0)).unwrap();
            assert_eq!(result.max_moment, 0.0);
            assert_eq!(result.max_deflection, 0.0);
        }
    }

    #[test]
    fn test_results_scale_linearly_with_load() {
        for load_type in LoadType::ALL {
            let base = calculate(&test_beam(load_type, 50.0)).unwrap();
            let doubled = calculate(&test_beam(load_type, 100.0)).unwrap();

            assert!((doubled.max_moment - 2.0 * base.max_moment).abs() < 1e-9);
            assert!((doubled.max_deflection - 2.0 * base.max_deflection).abs() < 1e-12);
        }
    }

    #[test]
    fn test_results_are_non_negative() {
        for load_type in LoadType::ALL {
            let result = calculate(&test_beam(load_type, 1234.5)).unwrap();
            assert!(result.max_moment >= 0.0);
            assert!(result.max_deflection >= 0.0);
        }
    }

    #[test]
    fn test_invalid_length() {
        for length in [0.0, -5.0] {
            let mut input = test_beam(LoadType::PointLoadCenter, 100.0);
            input.length = length;
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "length"));
        }
    }

    #[test]
    fn test_invalid_youngs_modulus() {
        for e in [0.0, -200e9] {
            let mut input = test_beam(LoadType::PointLoadCenter, 100.0);
            input.youngs_modulus = e;
            let err = calculate(&input).unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidInput { ref field, .. } if field == "youngs_modulus")
            );
        }
    }

    #[test]
    fn test_invalid_moment_of_inertia() {
        for i in [0.0, -1e-6] {
            let mut input = test_beam(LoadType::PointLoadCenter, 100.0);
            input.moment_of_inertia = i;
            let err = calculate(&input).unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidInput { ref field, .. } if field == "moment_of_inertia")
            );
        }
    }

    #[test]
    fn test_negative_load() {
        let err = calculate(&test_beam(LoadType::PointLoadCenter, -50.0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "load"));
        assert!(err.is_user_correctable());
    }

    #[test]
    fn test_first_violation_wins() {
        // Both length and load are bad; length is checked first
        let input = BeamInput {
            length: -1.0,
            load_type: LoadType::UniformLoad,
            load: -1.0,
            youngs_modulus: 200e9,
            moment_of_inertia: 1e-6,
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "length"));
    }

    #[test]
    fn test_validation_runs_before_dispatch() {
        // Invalid E must be reported even though the formulas for moment
        // never touch E
        let mut input = test_beam(LoadType::PointLoadCenter, 100.0);
        input.youngs_modulus = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_beam(LoadType::UniformLoad, 20.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_beam(LoadType::PointLoadCenter, 100.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("max_moment"));
        assert!(json.contains("max_deflection"));

        let roundtrip: BeamResult = serde_json::from_str(&json).unwrap();
        assert!((result.max_moment - roundtrip.max_moment).abs() < 1e-9);
    }

    #[test]
    fn test_input_from_raw_discriminant() {
        // External callers hand over load cases as integers; the boundary
        // conversion must reject anything outside the closed set
        let load_type = LoadType::try_from(1u32).unwrap();
        let result = calculate(&test_beam(load_type, 20.0)).unwrap();
        assert!((result.max_moment - 250.0).abs() < 1e-9);

        let err = LoadType::try_from(999u32).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LOAD_TYPE");
    }
}
