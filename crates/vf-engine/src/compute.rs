//! The one-call calculation pipeline.

use vf_core::units::{to_cuft, to_degf, to_ft, to_mph, to_sqft};
use vf_factors::factor_set;
use vf_results::{CalculationResult, EmissionSummary, EnvironmentSnapshot, GeometrySnapshot};

use crate::error::EngineResult;
use crate::request::{CalculationMethod, CalculationRequest};
use crate::{advise, forces, rate, resolve};

/// Run one complete calculation.
///
/// The pipeline is strictly forward: leak aggregation, required rate,
/// driving forces, mode resolution, recommendations. Any validation
/// failure surfaces immediately and yields no result. Identical requests
/// produce identical results; the engine holds no state between calls.
pub fn compute(request: &CalculationRequest) -> EngineResult<CalculationResult> {
    let emissions = match &request.method {
        CalculationMethod::FugitiveEmission {
            factor_set: key,
            sources,
            lfl_pct,
            safety_factor,
        } => {
            let leak_rate_cfm = sources.total_leak_cfm(factor_set(*key))?;
            Some(EmissionSummary {
                factor_set: *key,
                sources: sources.sources().to_vec(),
                leak_rate_cfm,
                lfl_pct: *lfl_pct,
                safety_factor: *safety_factor,
            })
        }
        CalculationMethod::Area => None,
    };
    let leak_rate_cfm = emissions.as_ref().map_or(0.0, |e| e.leak_rate_cfm);

    let requirement = rate::required_rate(&request.method, &request.geometry, leak_rate_cfm)?;

    let air = forces::air_state(&request.environment)?;
    let driving = forces::driving_forces(&request.environment, &request.vents, &request.geometry, &air);

    let outcome = resolve::resolve(
        &request.mode,
        &request.vents,
        requirement.required_rate_cfm,
        &driving,
    )?;

    let mut result = CalculationResult {
        geometry: GeometrySnapshot {
            length_ft: to_ft(request.geometry.length()),
            width_ft: to_ft(request.geometry.width()),
            height_ft: to_ft(request.geometry.height()),
            volume_ft3: to_cuft(request.geometry.volume()),
            floor_area_ft2: to_sqft(request.geometry.floor_area()),
        },
        environment: EnvironmentSnapshot {
            inside_temp_f: to_degf(request.environment.inside_temp()),
            outside_temp_f: to_degf(request.environment.outside_temp()),
            wind_velocity_mph: to_mph(request.environment.wind_velocity()),
            terrain_factor: request.environment.terrain_factor(),
            wind_effectiveness: request.environment.wind_effectiveness(),
            discharge_coefficient: request.vents.discharge_coefficient(),
            inlet_obstruction: request.vents.inlet_obstruction(),
            outlet_obstruction: request.vents.outlet_obstruction(),
            gas_buoyancy: request.gas_buoyancy,
        },
        air,
        requirement,
        forces: driving,
        outcome,
        emissions,
        recommendations: Vec::new(),
    };
    result.recommendations = advise::recommendations(&result);

    Ok(result)
}
