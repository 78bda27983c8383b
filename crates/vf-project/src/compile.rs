//! Compile a request document into the typed engine request.
//!
//! All string/number parsing has already happened at the serde layer;
//! this step enforces cross-field requirements (which optional fields the
//! selected method and mode need) and defers per-value invariants to the
//! engine's own constructors. NaN in an optional field counts as absent.

use vf_core::units::{degf, ft, mph, sqft};
use vf_engine::{
    BuildingGeometry, CalculationMethod, CalculationMode, CalculationRequest, EngineError,
    Environment, VentConfig,
};
use vf_factors::{FactorError, LeakInventory};

use crate::schema::{CalculationDef, MethodKindDef, ModeKindDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Fugitive emission method requires {what}")]
    MissingDilutionParameters { what: &'static str },

    #[error("Fugitive emission method requires a factor set selection")]
    MissingFactorSet,

    #[error("Verification mode requires both existing inlet and outlet vent areas")]
    MissingExistingVentAreas,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Factor(#[from] FactorError),
}

/// Validate a document and build the typed engine request from it.
pub fn compile_request(def: &CalculationDef) -> Result<CalculationRequest, ValidationError> {
    let geometry = BuildingGeometry::new(
        ft(require_finite("length_ft", def.length_ft)?),
        ft(require_finite("width_ft", def.width_ft)?),
        ft(require_finite("height_ft", def.height_ft)?),
    )?;

    let environment = Environment::new(
        degf(require_finite("inside_temp_f", def.inside_temp_f)?),
        degf(require_finite("outside_temp_f", def.outside_temp_f)?),
        mph(require_finite("wind_velocity_mph", def.wind_velocity_mph)?),
        require_finite("terrain_factor", def.terrain_factor)?,
        require_finite("wind_effectiveness", def.wind_effectiveness)?,
    )?;

    let vents = VentConfig::new(
        require_finite("discharge_coefficient", def.discharge_coefficient)?,
        require_finite("inlet_obstruction", def.inlet_obstruction)?,
        require_finite("outlet_obstruction", def.outlet_obstruction)?,
    )?;

    let method = match def.method {
        MethodKindDef::AreaMethod => CalculationMethod::Area,
        MethodKindDef::FugitiveEmissionMethod => {
            let lfl_pct = def
                .lfl_pct
                .filter(|value| value.is_finite())
                .ok_or(ValidationError::MissingDilutionParameters { what: "an LFL" })?;
            let safety_factor = def
                .safety_factor
                .filter(|value| value.is_finite())
                .ok_or(ValidationError::MissingDilutionParameters {
                    what: "a safety factor",
                })?;
            let factor_set = def
                .fugitive_factor_set
                .ok_or(ValidationError::MissingFactorSet)?;

            let mut sources = LeakInventory::new();
            for source in &def.fugitive_sources {
                sources.add(source.component, source.quantity)?;
            }

            CalculationMethod::FugitiveEmission {
                factor_set,
                sources,
                lfl_pct,
                safety_factor,
            }
        }
    };

    let mode = match def.mode {
        ModeKindDef::Design => CalculationMode::Design,
        ModeKindDef::Verification => {
            let inlet = def
                .existing_inlet_area_ft2
                .filter(|value| value.is_finite());
            let outlet = def
                .existing_outlet_area_ft2
                .filter(|value| value.is_finite());
            match (inlet, outlet) {
                (Some(inlet), Some(outlet)) => CalculationMode::Verification {
                    existing_inlet_area: sqft(inlet),
                    existing_outlet_area: sqft(outlet),
                },
                _ => return Err(ValidationError::MissingExistingVentAreas),
            }
        }
    };

    Ok(CalculationRequest {
        geometry,
        environment,
        vents,
        gas_buoyancy: def.gas_buoyancy,
        method,
        mode,
    })
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}
