//! Design / verification outcome resolution.

use vf_core::units::to_sqft;
use vf_results::{Adequacy, DrivingForces, Outcome};

use crate::error::{EngineError, EngineResult};
use crate::request::{CalculationMode, VentConfig};

/// Total flows per area below this cannot drive meaningful ventilation
/// [CFM/ft²].
pub const EPSILON_FLOW: f64 = 1e-6;

/// Resolve the mode-specific outcome from the required rate and the total
/// driving force.
pub fn resolve(
    mode: &CalculationMode,
    vents: &VentConfig,
    required_rate_cfm: f64,
    forces: &DrivingForces,
) -> EngineResult<Outcome> {
    match mode {
        CalculationMode::Design => {
            // No driving force: no finite free area meets the requirement.
            let required_free_area_ft2 = if forces.total_flow_cfm_per_ft2 < EPSILON_FLOW {
                None
            } else {
                Some(required_rate_cfm / forces.total_flow_cfm_per_ft2)
            };
            Ok(Outcome::Design {
                required_free_area_ft2,
                gross_inlet_area_ft2: required_free_area_ft2
                    .map(|area| area / vents.inlet_obstruction()),
                gross_outlet_area_ft2: required_free_area_ft2
                    .map(|area| area / vents.outlet_obstruction()),
            })
        }
        CalculationMode::Verification {
            existing_inlet_area,
            existing_outlet_area,
        } => {
            let existing_inlet_area_ft2 = to_sqft(*existing_inlet_area);
            let existing_outlet_area_ft2 = to_sqft(*existing_outlet_area);
            for area in [existing_inlet_area_ft2, existing_outlet_area_ft2] {
                if !(area.is_finite() && area >= 0.0) {
                    return Err(EngineError::InvalidArg {
                        what: "existing vent areas must be non-negative",
                    });
                }
            }

            let free_inlet_area_ft2 = existing_inlet_area_ft2 * vents.inlet_obstruction();
            let free_outlet_area_ft2 = existing_outlet_area_ft2 * vents.outlet_obstruction();
            // Series flow: the smaller path governs.
            let limiting_free_area_ft2 = free_inlet_area_ft2.min(free_outlet_area_ft2);

            let actual_rate_cfm = limiting_free_area_ft2 * forces.total_flow_cfm_per_ft2;
            let flow_difference_cfm = actual_rate_cfm - required_rate_cfm;
            let status = if actual_rate_cfm >= required_rate_cfm {
                Adequacy::Adequate
            } else {
                Adequacy::Inadequate
            };

            Ok(Outcome::Verification {
                existing_inlet_area_ft2,
                existing_outlet_area_ft2,
                free_inlet_area_ft2,
                free_outlet_area_ft2,
                limiting_free_area_ft2,
                actual_rate_cfm,
                flow_difference_cfm,
                status,
            })
        }
    }
}
