//! Result data types.

use serde::{Deserialize, Serialize};
use vf_factors::{FactorSetKey, FugitiveSource};

/// Buoyancy class of the gas handled by the enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GasBuoyancy {
    LighterThanAir,
    HeavierThanAir,
}

/// Verdict of a verification-mode calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adequacy {
    Adequate,
    Inadequate,
}

/// Complete snapshot of one calculation: every input echoed plus every
/// derived quantity. Produced once per compute call, superseded by the
/// next call, and never mutated in between.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    pub geometry: GeometrySnapshot,
    pub environment: EnvironmentSnapshot,
    pub air: AirState,
    pub requirement: Requirement,
    pub forces: DrivingForces,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionSummary>,
    pub recommendations: Vec<Recommendation>,
}

/// Enclosure dimensions and derived measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeometrySnapshot {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    pub volume_ft3: f64,
    pub floor_area_ft2: f64,
}

/// Environmental and vent-configuration inputs, echoed for auditability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentSnapshot {
    pub inside_temp_f: f64,
    pub outside_temp_f: f64,
    pub wind_velocity_mph: f64,
    pub terrain_factor: f64,
    pub wind_effectiveness: f64,
    pub discharge_coefficient: f64,
    pub inlet_obstruction: f64,
    pub outlet_obstruction: f64,
    pub gas_buoyancy: GasBuoyancy,
}

/// Air state on both sides of the envelope, from the ideal-gas relation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AirState {
    pub inside_temp_r: f64,
    pub outside_temp_r: f64,
    pub density_inside_lb_ft3: f64,
    pub density_outside_lb_ft3: f64,
    pub density_difference_lb_ft3: f64,
    pub density_average_lb_ft3: f64,
}

/// Required ventilation rate plus the evidence behind it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    pub required_rate_cfm: f64,
    pub basis: RateBasis,
}

/// Which strategy produced the required rate, with its sub-results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum RateBasis {
    /// Air-change / floor-area heuristic; the larger candidate governs.
    AreaMethod {
        air_change_rate_cfm: f64,
        floor_area_rate_cfm: f64,
    },
    /// Dilution of a quantified leak to a fraction of its LFL.
    FugitiveEmissionMethod {
        leak_rate_cfm: f64,
        lfl_pct: f64,
        safety_factor: f64,
    },
}

/// Flow produced per unit of free vent area [CFM/ft²].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DrivingForces {
    pub effective_obstruction: f64,
    pub effective_wind_mph: f64,
    pub wind_flow_cfm_per_ft2: f64,
    pub stack_flow_cfm_per_ft2: f64,
    pub total_flow_cfm_per_ft2: f64,
}

/// Mode-specific outcome.
///
/// Design-mode areas are `None` when no driving force exists: no finite
/// vent area achieves the required rate. That is a valid, meaningful
/// result, distinct from any input-validation error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Outcome {
    Design {
        required_free_area_ft2: Option<f64>,
        gross_inlet_area_ft2: Option<f64>,
        gross_outlet_area_ft2: Option<f64>,
    },
    Verification {
        existing_inlet_area_ft2: f64,
        existing_outlet_area_ft2: f64,
        free_inlet_area_ft2: f64,
        free_outlet_area_ft2: f64,
        limiting_free_area_ft2: f64,
        actual_rate_cfm: f64,
        /// Signed surplus (positive) or deficit (negative) [CFM].
        flow_difference_cfm: f64,
        status: Adequacy,
    },
}

/// Fugitive-emission inputs and aggregation, echoed when that method ran.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionSummary {
    pub factor_set: FactorSetKey,
    pub sources: Vec<FugitiveSource>,
    pub leak_rate_cfm: f64,
    pub lfl_pct: f64,
    pub safety_factor: f64,
}

/// Severity of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Advisory,
    Critical,
}

/// One qualitative guidance item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub severity: Severity,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tags_by_mode() {
        let outcome = Outcome::Design {
            required_free_area_ft2: Some(10.0),
            gross_inlet_area_ft2: Some(20.0),
            gross_outlet_area_ft2: Some(20.0),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"mode\":\"design\""));

        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn unachievable_design_outcome_round_trips() {
        let outcome = Outcome::Design {
            required_free_area_ft2: None,
            gross_inlet_area_ft2: None,
            gross_outlet_area_ft2: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn rate_basis_uses_document_method_keys() {
        let basis = RateBasis::FugitiveEmissionMethod {
            leak_rate_cfm: 0.0121,
            lfl_pct: 5.0,
            safety_factor: 0.25,
        };
        let json = serde_json::to_string(&basis).unwrap();
        assert!(json.contains("\"method\":\"fugitive-emission-method\""));
    }
}
