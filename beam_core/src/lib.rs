//! # beam_core - Simply-Supported Beam Calculation Engine
//!
//! `beam_core` computes the maximum bending moment and maximum deflection of
//! a simply supported, prismatic, linearly elastic beam under two canonical
//! load cases, using closed-form formulas. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{calculate, BeamInput, LoadType};
//!
//! let input = BeamInput {
//!     length: 10.0,
//!     load_type: LoadType::UniformLoad,
//!     load: 20.0,
//!     youngs_modulus: 200e9,
//!     moment_of_inertia: 1e-6,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment - 250.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Closed-form beam calculations
//! - [`loads`] - The closed set of supported load cases
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BeamInput, BeamResult};
pub use errors::{CalcError, CalcResult};
pub use loads::LoadType;
