//! vf-engine: the natural-ventilation calculation engine.
//!
//! A pure, synchronous pipeline over one validated request: fugitive-leak
//! aggregation, required-rate selection, wind/stack driving forces, mode
//! resolution, and recommendations. Each call produces one immutable
//! result snapshot and touches no ambient state.
//!
//! # Example
//!
//! ```
//! use vf_core::units::{degf, ft, mph};
//! use vf_engine::{
//!     BuildingGeometry, CalculationMethod, CalculationMode, CalculationRequest, Environment,
//!     VentConfig, compute,
//! };
//! use vf_results::{GasBuoyancy, Outcome};
//!
//! let request = CalculationRequest {
//!     geometry: BuildingGeometry::new(ft(40.0), ft(30.0), ft(12.0)).unwrap(),
//!     environment: Environment::new(degf(70.0), degf(40.0), mph(10.0), 1.0, 0.35).unwrap(),
//!     vents: VentConfig::new(0.65, 0.5, 0.5).unwrap(),
//!     gas_buoyancy: GasBuoyancy::LighterThanAir,
//!     method: CalculationMethod::Area,
//!     mode: CalculationMode::Design,
//! };
//!
//! let result = compute(&request).unwrap();
//! assert!((result.requirement.required_rate_cfm - 2880.0).abs() < 1e-9);
//! assert!(matches!(result.outcome, Outcome::Design { .. }));
//! ```

pub mod advise;
pub mod compute;
pub mod error;
pub mod forces;
pub mod rate;
pub mod request;
pub mod resolve;

// Re-exports
pub use compute::compute;
pub use error::{EngineError, EngineResult};
pub use request::{
    BuildingGeometry, CalculationMethod, CalculationMode, CalculationRequest, Environment,
    VentConfig,
};
