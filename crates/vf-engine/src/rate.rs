//! Required ventilation rate strategies.

use vf_core::units::{to_cuft, to_sqft};
use vf_results::{RateBasis, Requirement};

use crate::error::{EngineError, EngineResult};
use crate::request::{BuildingGeometry, CalculationMethod};

/// One full air change every five minutes.
const AIR_CHANGE_PERIOD_MIN: f64 = 5.0;

/// Floor-area heuristic [CFM per ft² of floor].
const FLOOR_AREA_RATE_CFM_PER_FT2: f64 = 1.5;

/// Required ventilation rate for the selected method.
///
/// `leak_rate_cfm` is the pre-aggregated fugitive total; it is ignored by
/// the area method.
pub fn required_rate(
    method: &CalculationMethod,
    geometry: &BuildingGeometry,
    leak_rate_cfm: f64,
) -> EngineResult<Requirement> {
    match method {
        CalculationMethod::Area => {
            let air_change_rate_cfm = to_cuft(geometry.volume()) / AIR_CHANGE_PERIOD_MIN;
            let floor_area_rate_cfm = to_sqft(geometry.floor_area()) * FLOOR_AREA_RATE_CFM_PER_FT2;
            Ok(Requirement {
                required_rate_cfm: air_change_rate_cfm.max(floor_area_rate_cfm),
                basis: RateBasis::AreaMethod {
                    air_change_rate_cfm,
                    floor_area_rate_cfm,
                },
            })
        }
        CalculationMethod::FugitiveEmission {
            sources,
            lfl_pct,
            safety_factor,
            ..
        } => {
            if sources.is_empty() {
                return Err(EngineError::MissingLeakSource);
            }
            if !(lfl_pct.is_finite() && *lfl_pct > 0.0) {
                return Err(EngineError::InvalidArg {
                    what: "LFL must be a positive percentage",
                });
            }
            if !(safety_factor.is_finite() && *safety_factor > 0.0) {
                return Err(EngineError::InvalidArg {
                    what: "safety factor must be positive",
                });
            }
            let required_rate_cfm = leak_rate_cfm / (safety_factor * (lfl_pct / 100.0));
            Ok(Requirement {
                required_rate_cfm,
                basis: RateBasis::FugitiveEmissionMethod {
                    leak_rate_cfm,
                    lfl_pct: *lfl_pct,
                    safety_factor: *safety_factor,
                },
            })
        }
    }
}
