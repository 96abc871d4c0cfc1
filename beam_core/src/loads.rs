//! Load case definitions for the simply-supported beam
//!
//! This module defines the closed set of supported load cases. Adding a
//! load case means adding a variant here plus its formula pair in
//! [`crate::calculations::beam`]; there is no plugin mechanism.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Supported load cases for a simply supported beam
///
/// Exactly two cases exist. Both place the critical section (maximum
/// moment and maximum deflection) at mid-span.
///
/// # Example
/// ```
/// use beam_core::loads::LoadType;
///
/// let point = LoadType::PointLoadCenter;
/// assert_eq!(point.code(), "P");
/// assert_eq!(point.description(), "Point load at mid-span");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// P - a single concentrated load applied at the center of the beam
    PointLoadCenter,
    /// w - a uniformly distributed load along the entire beam length
    UniformLoad,
}

impl LoadType {
    /// All load cases in standard order, for frontend selectors
    pub const ALL: [LoadType; 2] = [LoadType::PointLoadCenter, LoadType::UniformLoad];

    /// Symbol used for the load magnitude in the formulas (P or w)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::PointLoadCenter => "P",
            LoadType::UniformLoad => "w",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::PointLoadCenter => "Point load at mid-span",
            LoadType::UniformLoad => "Uniform load over full span",
        }
    }

    /// Whether the load magnitude is a force per unit length
    /// (as opposed to a concentrated force)
    pub fn is_distributed(&self) -> bool {
        matches!(self, LoadType::UniformLoad)
    }
}

/// Fallible conversion from a raw discriminant, for callers that receive
/// load cases as integers (foreign APIs, columnar data, wire formats).
///
/// Unrecognized values fail with [`CalcError::UnsupportedLoadType`] rather
/// than defaulting to a supported case.
///
/// # Example
/// ```
/// use beam_core::loads::LoadType;
///
/// assert_eq!(LoadType::try_from(0).unwrap(), LoadType::PointLoadCenter);
/// assert_eq!(LoadType::try_from(1).unwrap(), LoadType::UniformLoad);
/// assert!(LoadType::try_from(999).is_err());
/// ```
impl TryFrom<u32> for LoadType {
    type Error = CalcError;

    fn try_from(discriminant: u32) -> Result<Self, Self::Error> {
        match discriminant {
            0 => Ok(LoadType::PointLoadCenter),
            1 => Ok(LoadType::UniformLoad),
            other => Err(CalcError::unsupported_load_type(other)),
        }
    }
}
