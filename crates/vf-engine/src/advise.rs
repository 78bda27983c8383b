//! Qualitative guidance derived from the completed snapshot.
//!
//! Every rule inspects the result (which echoes all inputs) and appends at
//! most one message; all rules run, in a fixed order, with no early exit.

use vf_core::numeric::{Tolerances, nearly_equal};
use vf_results::{
    Adequacy, CalculationResult, GasBuoyancy, Outcome, RateBasis, Recommendation, Severity,
};

/// Wind-effectiveness coefficient of a vent face parallel to the wind.
const PARALLEL_WIND_EFFECTIVENESS: f64 = 0.25;

/// Wind speeds below this make a design fragile [mph].
const LOW_WIND_MPH: f64 = 5.0;

/// Temperature differentials below this leave little stack effect [°F].
const SMALL_TEMP_DIFFERENTIAL_F: f64 = 10.0;

/// Gross vent area beyond this fraction of floor area is impractical.
const PRACTICAL_AREA_FRACTION: f64 = 0.1;

pub fn recommendations(result: &CalculationResult) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let tol = Tolerances::default();
    let env = &result.environment;

    // Gas buoyancy class drives vent placement.
    match env.gas_buoyancy {
        GasBuoyancy::HeavierThanAir => out.push(Recommendation {
            severity: Severity::Critical,
            text: "For heavier-than-air gases like propane, ventilation must be designed \
                   with high inlets and low outlets to effectively sweep vapors from floor \
                   level. The standard low-inlet/high-outlet design is ineffective and \
                   dangerous for these gases."
                .to_string(),
        }),
        GasBuoyancy::LighterThanAir => out.push(Recommendation {
            severity: Severity::Advisory,
            text: "For lighter-than-air gases like natural gas, the standard design of low \
                   inlets and high outlets is correct, promoting natural convection and \
                   effective ventilation."
                .to_string(),
        }),
    }

    if env.wind_velocity_mph < LOW_WIND_MPH {
        out.push(advisory(
            "The entered wind velocity is low. For a robust design, consider using a \
             conservative, year-round average wind speed for the specific location \
             (e.g., 7-10 mph).",
        ));
    }

    if (env.inside_temp_f - env.outside_temp_f).abs() < SMALL_TEMP_DIFFERENTIAL_F {
        out.push(advisory(
            "The temperature difference is small, which minimizes the 'Stack Effect.' This \
             makes ventilation highly dependent on wind. Ensure the average wind speed is \
             reliable or consider scenarios with no temperature difference.",
        ));
    }

    if nearly_equal(env.inlet_obstruction, 1.0, tol) || nearly_equal(env.outlet_obstruction, 1.0, tol)
    {
        out.push(advisory(
            "An unobstructed vent was selected. Verify that no screens (bird, insect) or \
             louvers will be installed, as these common items significantly reduce \
             effective vent area.",
        ));
    }

    if nearly_equal(env.wind_effectiveness, PARALLEL_WIND_EFFECTIVENESS, tol) {
        out.push(advisory(
            "A 'Parallel' building orientation provides the least effective wind-driven \
             ventilation. If possible, orient vents to be perpendicular to prevailing \
             winds, or consider a larger vent area to compensate.",
        ));
    }

    match result.requirement.basis {
        RateBasis::AreaMethod { .. } => out.push(advisory(
            "The Area Method (AGA XL1001) is a conservative approach suitable for \
             general-purpose buildings where specific leak sources are not defined. It \
             ensures a baseline level of air quality and safety.",
        )),
        RateBasis::FugitiveEmissionMethod { .. } => {
            out.push(advisory(
                "The Fugitive Emission Method (API RP 500) is ideal when you can quantify \
                 a potential leak rate. It provides a precise ventilation requirement to \
                 dilute a specific hazard to safe levels.",
            ));
            if result
                .emissions
                .as_ref()
                .is_some_and(|emissions| !emissions.sources.is_empty())
            {
                out.push(advisory(
                    "The total leak rate was calculated based on the specified components. \
                     Ensure this list is comprehensive and reflects the actual equipment \
                     in the building for an accurate result.",
                ));
            }
        }
    }

    match result.outcome {
        Outcome::Design {
            gross_inlet_area_ft2: Some(gross_inlet),
            gross_outlet_area_ft2: Some(gross_outlet),
            ..
        } => {
            let max_gross = gross_inlet.max(gross_outlet);
            if max_gross > result.geometry.floor_area_ft2 * PRACTICAL_AREA_FRACTION {
                out.push(advisory(
                    "The required gross vent area is very large relative to the building \
                     size. Natural ventilation may be insufficient or impractical. Consider \
                     evaluating building design or exploring mechanical ventilation options.",
                ));
            }
        }
        Outcome::Design { .. } => out.push(advisory(
            "No finite vent area satisfies the requirement: natural ventilation is \
             impossible under the specified conditions (zero wind and no temperature \
             difference). At least one driving force (wind or stack effect) is required.",
        )),
        Outcome::Verification {
            actual_rate_cfm,
            flow_difference_cfm,
            status,
            ..
        } => match status {
            Adequacy::Inadequate => out.push(advisory(&format!(
                "The existing ventilation is inadequate by a deficit of {:.2} CFM. To \
                 resolve this, consider increasing vent sizes, reducing vent obstructions \
                 (e.g., switching to high-flow louvers), or implementing a mechanical \
                 ventilation system.",
                flow_difference_cfm.abs()
            ))),
            Adequacy::Adequate => {
                let safety_margin = actual_rate_cfm / result.requirement.required_rate_cfm;
                out.push(advisory(&format!(
                    "The existing ventilation is adequate and exceeds the requirement by \
                     {flow_difference_cfm:.2} CFM, providing a safety margin of \
                     {safety_margin:.2}x. The current design is sufficient for the \
                     specified conditions."
                )));
            }
        },
    }

    out
}

fn advisory(text: &str) -> Recommendation {
    Recommendation {
        severity: Severity::Advisory,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_results::{
        AirState, DrivingForces, EnvironmentSnapshot, GeometrySnapshot, Requirement,
    };

    fn base_result(outcome: Outcome) -> CalculationResult {
        CalculationResult {
            geometry: GeometrySnapshot {
                length_ft: 40.0,
                width_ft: 30.0,
                height_ft: 12.0,
                volume_ft3: 14_400.0,
                floor_area_ft2: 1200.0,
            },
            environment: EnvironmentSnapshot {
                inside_temp_f: 70.0,
                outside_temp_f: 40.0,
                wind_velocity_mph: 10.0,
                terrain_factor: 1.0,
                wind_effectiveness: 0.35,
                discharge_coefficient: 0.65,
                inlet_obstruction: 0.5,
                outlet_obstruction: 0.5,
                gas_buoyancy: GasBuoyancy::LighterThanAir,
            },
            air: AirState {
                inside_temp_r: 529.67,
                outside_temp_r: 499.67,
                density_inside_lb_ft3: 0.0749,
                density_outside_lb_ft3: 0.0794,
                density_difference_lb_ft3: 0.0045,
                density_average_lb_ft3: 0.0771,
            },
            requirement: Requirement {
                required_rate_cfm: 2880.0,
                basis: RateBasis::AreaMethod {
                    air_change_rate_cfm: 2880.0,
                    floor_area_rate_cfm: 1800.0,
                },
            },
            forces: DrivingForces {
                effective_obstruction: 0.5,
                effective_wind_mph: 10.0,
                wind_flow_cfm_per_ft2: 154.0,
                stack_flow_cfm_per_ft2: 50.0,
                total_flow_cfm_per_ft2: 161.9,
            },
            outcome,
            emissions: None,
            recommendations: Vec::new(),
        }
    }

    fn achievable_design() -> Outcome {
        Outcome::Design {
            required_free_area_ft2: Some(17.8),
            gross_inlet_area_ft2: Some(35.6),
            gross_outlet_area_ft2: Some(35.6),
        }
    }

    #[test]
    fn heavier_than_air_is_critical_and_first() {
        let mut result = base_result(achievable_design());
        result.environment.gas_buoyancy = GasBuoyancy::HeavierThanAir;

        let recs = recommendations(&result);
        assert_eq!(recs[0].severity, Severity::Critical);
        assert!(recs[0].text.contains("heavier-than-air"));
    }

    #[test]
    fn lighter_than_air_is_advisory() {
        let recs = recommendations(&base_result(achievable_design()));
        assert_eq!(recs[0].severity, Severity::Advisory);
        assert!(recs[0].text.contains("lighter-than-air"));
    }

    #[test]
    fn low_wind_and_small_differential_caveats() {
        let mut result = base_result(achievable_design());
        result.environment.wind_velocity_mph = 3.0;
        result.environment.outside_temp_f = 65.0;

        let recs = recommendations(&result);
        assert!(recs.iter().any(|r| r.text.contains("wind velocity is low")));
        assert!(
            recs.iter()
                .any(|r| r.text.contains("temperature difference is small"))
        );
    }

    #[test]
    fn unobstructed_vent_and_parallel_orientation_notes() {
        let mut result = base_result(achievable_design());
        result.environment.inlet_obstruction = 1.0;
        result.environment.wind_effectiveness = 0.25;

        let recs = recommendations(&result);
        assert!(recs.iter().any(|r| r.text.contains("unobstructed vent")));
        assert!(recs.iter().any(|r| r.text.contains("'Parallel'")));
    }

    #[test]
    fn area_method_rationale_present() {
        let recs = recommendations(&base_result(achievable_design()));
        assert!(recs.iter().any(|r| r.text.contains("Area Method")));
    }

    #[test]
    fn fugitive_method_adds_completeness_reminder() {
        use vf_factors::{ComponentType, FactorSetKey, FugitiveSource};
        use vf_results::EmissionSummary;

        let mut result = base_result(achievable_design());
        result.requirement.basis = RateBasis::FugitiveEmissionMethod {
            leak_rate_cfm: 0.0121,
            lfl_pct: 5.0,
            safety_factor: 0.25,
        };
        result.emissions = Some(EmissionSummary {
            factor_set: FactorSetKey::AverageEpa,
            sources: vec![FugitiveSource {
                component: ComponentType::Valves,
                quantity: 3,
            }],
            leak_rate_cfm: 0.0121,
            lfl_pct: 5.0,
            safety_factor: 0.25,
        });

        let recs = recommendations(&result);
        assert!(recs.iter().any(|r| r.text.contains("Fugitive Emission Method")));
        assert!(recs.iter().any(|r| r.text.contains("comprehensive")));
    }

    #[test]
    fn oversized_design_area_warns() {
        // Floor area 1200 ft²; gross areas above 120 ft² are impractical.
        let recs = recommendations(&base_result(Outcome::Design {
            required_free_area_ft2: Some(100.0),
            gross_inlet_area_ft2: Some(200.0),
            gross_outlet_area_ft2: Some(130.0),
        }));
        assert!(recs.iter().any(|r| r.text.contains("very large")));
    }

    #[test]
    fn unachievable_design_names_the_missing_driving_force() {
        let recs = recommendations(&base_result(Outcome::Design {
            required_free_area_ft2: None,
            gross_inlet_area_ft2: None,
            gross_outlet_area_ft2: None,
        }));
        assert!(
            recs.iter()
                .any(|r| r.text.contains("natural ventilation is impossible"))
        );
    }

    #[test]
    fn verification_messages_carry_numbers() {
        let recs = recommendations(&base_result(Outcome::Verification {
            existing_inlet_area_ft2: 10.0,
            existing_outlet_area_ft2: 10.0,
            free_inlet_area_ft2: 5.0,
            free_outlet_area_ft2: 5.0,
            limiting_free_area_ft2: 5.0,
            actual_rate_cfm: 809.5,
            flow_difference_cfm: -2070.5,
            status: Adequacy::Inadequate,
        }));
        assert!(recs.iter().any(|r| r.text.contains("deficit of 2070.50 CFM")));

        let recs = recommendations(&base_result(Outcome::Verification {
            existing_inlet_area_ft2: 50.0,
            existing_outlet_area_ft2: 50.0,
            free_inlet_area_ft2: 25.0,
            free_outlet_area_ft2: 25.0,
            limiting_free_area_ft2: 25.0,
            actual_rate_cfm: 4047.5,
            flow_difference_cfm: 1167.5,
            status: Adequacy::Adequate,
        }));
        let adequate = recs
            .iter()
            .find(|r| r.text.contains("exceeds the requirement"))
            .unwrap();
        assert!(adequate.text.contains("1167.50 CFM"));
        assert!(adequate.text.contains("1.41x"));
    }

    #[test]
    fn rules_are_independent_and_ordered() {
        // Every trigger at once: buoyancy, wind, differential, obstruction,
        // orientation, method, outcome.
        let mut result = base_result(Outcome::Design {
            required_free_area_ft2: None,
            gross_inlet_area_ft2: None,
            gross_outlet_area_ft2: None,
        });
        result.environment.gas_buoyancy = GasBuoyancy::HeavierThanAir;
        result.environment.wind_velocity_mph = 0.0;
        result.environment.outside_temp_f = 70.0;
        result.environment.inlet_obstruction = 1.0;
        result.environment.wind_effectiveness = 0.25;

        let recs = recommendations(&result);
        assert_eq!(recs.len(), 7);
        assert_eq!(recs[0].severity, Severity::Critical);
        assert!(recs[6].text.contains("natural ventilation is impossible"));
    }
}
