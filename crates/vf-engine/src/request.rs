//! Typed, validated calculation request.
//!
//! Construction is validation: once a value of these types exists, its
//! invariants hold and the compute pipeline can run without re-checking
//! shapes. The engine never reads ambient state; the request owns a
//! snapshot of every input, including the leak inventory.

use vf_core::units::{Area, Length, Temperature, Velocity, Volume, to_ft, to_rankine};
use vf_factors::{FactorSetKey, LeakInventory};
use vf_results::GasBuoyancy;

use crate::error::{EngineError, EngineResult};

/// Enclosure dimensions. All three must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingGeometry {
    length: Length,
    width: Length,
    height: Length,
}

impl BuildingGeometry {
    pub fn new(length: Length, width: Length, height: Length) -> EngineResult<Self> {
        check_positive(to_ft(length), "building length must be a positive length")?;
        check_positive(to_ft(width), "building width must be a positive length")?;
        check_positive(to_ft(height), "building height must be a positive length")?;
        Ok(Self {
            length,
            width,
            height,
        })
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn width(&self) -> Length {
        self.width
    }

    pub fn height(&self) -> Length {
        self.height
    }

    /// Interior volume.
    pub fn volume(&self) -> Volume {
        self.length * self.width * self.height
    }

    /// Footprint area.
    pub fn floor_area(&self) -> Area {
        self.length * self.width
    }
}

/// Environmental conditions at the site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    inside_temp: Temperature,
    outside_temp: Temperature,
    wind_velocity: Velocity,
    terrain_factor: f64,
    wind_effectiveness: f64,
}

impl Environment {
    /// `terrain_factor` scales the reported wind speed to the site;
    /// `wind_effectiveness` is the orientation-dependent coefficient of
    /// the vent face (0.25 for parallel, larger for perpendicular winds).
    pub fn new(
        inside_temp: Temperature,
        outside_temp: Temperature,
        wind_velocity: Velocity,
        terrain_factor: f64,
        wind_effectiveness: f64,
    ) -> EngineResult<Self> {
        if !to_rankine(inside_temp).is_finite() {
            return Err(EngineError::InvalidArg {
                what: "inside temperature must be a finite number",
            });
        }
        if !to_rankine(outside_temp).is_finite() {
            return Err(EngineError::InvalidArg {
                what: "outside temperature must be a finite number",
            });
        }
        let wind_mph = vf_core::units::to_mph(wind_velocity);
        if !wind_mph.is_finite() || wind_mph < 0.0 {
            return Err(EngineError::InvalidArg {
                what: "wind velocity must be non-negative",
            });
        }
        check_positive(terrain_factor, "terrain factor must be positive")?;
        check_positive(
            wind_effectiveness,
            "wind effectiveness coefficient must be positive",
        )?;
        Ok(Self {
            inside_temp,
            outside_temp,
            wind_velocity,
            terrain_factor,
            wind_effectiveness,
        })
    }

    pub fn inside_temp(&self) -> Temperature {
        self.inside_temp
    }

    pub fn outside_temp(&self) -> Temperature {
        self.outside_temp
    }

    pub fn wind_velocity(&self) -> Velocity {
        self.wind_velocity
    }

    pub fn terrain_factor(&self) -> f64 {
        self.terrain_factor
    }

    pub fn wind_effectiveness(&self) -> f64 {
        self.wind_effectiveness
    }
}

/// Vent opening characteristics shared by both modes.
///
/// Obstruction factors are the free (unobstructed) fraction of gross vent
/// area. Values above 1.0 are accepted as given; only the lower bound is
/// enforced, since a zero factor makes area computations degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentConfig {
    discharge_coefficient: f64,
    inlet_obstruction: f64,
    outlet_obstruction: f64,
}

impl VentConfig {
    pub fn new(
        discharge_coefficient: f64,
        inlet_obstruction: f64,
        outlet_obstruction: f64,
    ) -> EngineResult<Self> {
        check_positive(
            discharge_coefficient,
            "discharge coefficient must be positive",
        )?;
        if !(inlet_obstruction.is_finite() && inlet_obstruction > 0.0) {
            return Err(EngineError::InvalidObstructionFactor {
                which: "inlet",
                value: inlet_obstruction,
            });
        }
        if !(outlet_obstruction.is_finite() && outlet_obstruction > 0.0) {
            return Err(EngineError::InvalidObstructionFactor {
                which: "outlet",
                value: outlet_obstruction,
            });
        }
        Ok(Self {
            discharge_coefficient,
            inlet_obstruction,
            outlet_obstruction,
        })
    }

    pub fn discharge_coefficient(&self) -> f64 {
        self.discharge_coefficient
    }

    pub fn inlet_obstruction(&self) -> f64 {
        self.inlet_obstruction
    }

    pub fn outlet_obstruction(&self) -> f64 {
        self.outlet_obstruction
    }
}

/// Strategy that produces the required ventilation rate.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationMethod {
    /// Air-change / floor-area heuristic (AGA XL1001).
    Area,
    /// Dilution of a quantified fugitive leak (API RP 500).
    FugitiveEmission {
        factor_set: FactorSetKey,
        sources: LeakInventory,
        /// Lower flammable limit as a percentage (5.0 means 5%).
        lfl_pct: f64,
        /// Target fraction of LFL (0.25 means dilute to 25% of LFL).
        safety_factor: f64,
    },
}

/// What the calculation answers: how much vent area is needed, or whether
/// the existing vents suffice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationMode {
    Design,
    Verification {
        existing_inlet_area: Area,
        existing_outlet_area: Area,
    },
}

/// One complete calculation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub geometry: BuildingGeometry,
    pub environment: Environment,
    pub vents: VentConfig,
    pub gas_buoyancy: GasBuoyancy,
    pub method: CalculationMethod,
    pub mode: CalculationMode,
}

fn check_positive(value: f64, what: &'static str) -> EngineResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidArg { what })
    }
}
