//! Wind and stack driving-force model.

use vf_core::numeric::ensure_finite;
use vf_core::units::constants::{C4_WIND_UNITS, G_FT_PER_S2, P_ATM_PSF, R_AIR_FT_LBF_PER_LB_R};
use vf_core::units::{to_ft, to_mph, to_rankine};
use vf_results::{AirState, DrivingForces};

use crate::error::{EngineError, EngineResult};
use crate::request::{BuildingGeometry, Environment, VentConfig};

/// Density differences smaller than this are floating-point noise, not a
/// real stack driver [lb/ft³].
pub const EPSILON_DENSITY: f64 = 1e-6;

/// Ensure a computed value is finite, returning EngineError if not.
fn check_finite(value: f64, what: &'static str) -> EngineResult<()> {
    ensure_finite(value, what).map_err(|_| EngineError::InvalidArg { what })?;
    Ok(())
}

/// Air densities on both sides of the envelope from the ideal-gas
/// relation, at standard atmospheric pressure.
pub fn air_state(environment: &Environment) -> EngineResult<AirState> {
    let inside_temp_r = to_rankine(environment.inside_temp());
    let outside_temp_r = to_rankine(environment.outside_temp());

    if inside_temp_r <= 0.0 {
        return Err(EngineError::InvalidTemperature {
            which: "inside",
            rankine: inside_temp_r,
        });
    }
    if outside_temp_r <= 0.0 {
        return Err(EngineError::InvalidTemperature {
            which: "outside",
            rankine: outside_temp_r,
        });
    }

    let density_inside_lb_ft3 = P_ATM_PSF / (R_AIR_FT_LBF_PER_LB_R * inside_temp_r);
    let density_outside_lb_ft3 = P_ATM_PSF / (R_AIR_FT_LBF_PER_LB_R * outside_temp_r);
    check_finite(density_inside_lb_ft3, "inside air density")?;
    check_finite(density_outside_lb_ft3, "outside air density")?;

    Ok(AirState {
        inside_temp_r,
        outside_temp_r,
        density_inside_lb_ft3,
        density_outside_lb_ft3,
        density_difference_lb_ft3: (density_inside_lb_ft3 - density_outside_lb_ft3).abs(),
        density_average_lb_ft3: (density_inside_lb_ft3 + density_outside_lb_ft3) / 2.0,
    })
}

/// Wind-driven and buoyancy-driven flow per unit of free vent area.
pub fn driving_forces(
    environment: &Environment,
    vents: &VentConfig,
    geometry: &BuildingGeometry,
    air: &AirState,
) -> DrivingForces {
    let effective_obstruction =
        (vents.inlet_obstruction() + vents.outlet_obstruction()) / 2.0;
    let effective_wind_mph = to_mph(environment.wind_velocity()) * environment.terrain_factor();

    let wind_flow_cfm_per_ft2 = C4_WIND_UNITS
        * environment.wind_effectiveness()
        * effective_wind_mph
        * effective_obstruction;

    let stack_flow_cfm_per_ft2 = if air.density_difference_lb_ft3 > EPSILON_DENSITY {
        // 60 converts the per-second buoyancy velocity into per-minute flow
        60.0 * vents.discharge_coefficient()
            * effective_obstruction
            * (G_FT_PER_S2 * to_ft(geometry.height()) * air.density_difference_lb_ft3
                / air.density_average_lb_ft3)
                .sqrt()
    } else {
        0.0
    };

    // Wind and stack act as independent driving pressures: combine in
    // quadrature, not arithmetically.
    let total_flow_cfm_per_ft2 = wind_flow_cfm_per_ft2.hypot(stack_flow_cfm_per_ft2);

    DrivingForces {
        effective_obstruction,
        effective_wind_mph,
        wind_flow_cfm_per_ft2,
        stack_flow_cfm_per_ft2,
        total_flow_cfm_per_ft2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::units::{degf, ft, mph};
    use crate::request::{BuildingGeometry, Environment, VentConfig};

    fn geometry() -> BuildingGeometry {
        BuildingGeometry::new(ft(40.0), ft(30.0), ft(12.0)).unwrap()
    }

    fn vents() -> VentConfig {
        VentConfig::new(0.65, 0.5, 0.5).unwrap()
    }

    #[test]
    fn densities_follow_ideal_gas_relation() {
        let env = Environment::new(degf(70.0), degf(40.0), mph(0.0), 1.0, 0.35).unwrap();
        let air = air_state(&env).unwrap();

        // rho = 2116.22 / (53.353 * T_R)
        let expected_inside = 2116.22 / (53.353 * (70.0 + 459.67));
        assert!((air.density_inside_lb_ft3 - expected_inside).abs() < 1e-12);
        assert!(air.density_outside_lb_ft3 > air.density_inside_lb_ft3);
        assert!(air.density_difference_lb_ft3 > 0.0);
    }

    #[test]
    fn sub_absolute_zero_temperature_is_rejected() {
        let env = Environment::new(degf(-500.0), degf(40.0), mph(0.0), 1.0, 0.35).unwrap();
        let err = air_state(&env).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidTemperature { which: "inside", .. }
        ));
    }

    #[test]
    fn stack_flow_is_zero_at_equal_temperatures() {
        let env = Environment::new(degf(60.0), degf(60.0), mph(10.0), 1.0, 0.35).unwrap();
        let air = air_state(&env).unwrap();
        let forces = driving_forces(&env, &vents(), &geometry(), &air);

        assert_eq!(forces.stack_flow_cfm_per_ft2, 0.0);
        assert_eq!(forces.total_flow_cfm_per_ft2, forces.wind_flow_cfm_per_ft2);
    }

    #[test]
    fn wind_flow_matches_hand_calculation() {
        // F_w = 88 * Cv * (V * terrain) * C_eff
        let env = Environment::new(degf(60.0), degf(60.0), mph(10.0), 0.8, 0.35).unwrap();
        let air = air_state(&env).unwrap();
        let forces = driving_forces(&env, &vents(), &geometry(), &air);

        let expected = 88.0 * 0.35 * (10.0 * 0.8) * 0.5;
        assert!((forces.wind_flow_cfm_per_ft2 - expected).abs() < 1e-9);
    }

    #[test]
    fn stack_flow_matches_hand_calculation() {
        let env = Environment::new(degf(70.0), degf(40.0), mph(0.0), 1.0, 0.35).unwrap();
        let air = air_state(&env).unwrap();
        let forces = driving_forces(&env, &vents(), &geometry(), &air);

        let expected = 60.0
            * 0.65
            * 0.5
            * (32.2 * 12.0 * air.density_difference_lb_ft3 / air.density_average_lb_ft3).sqrt();
        assert!((forces.stack_flow_cfm_per_ft2 - expected).abs() < 1e-9);
        assert_eq!(forces.wind_flow_cfm_per_ft2, 0.0);
        assert_eq!(forces.total_flow_cfm_per_ft2, forces.stack_flow_cfm_per_ft2);
    }

    #[test]
    fn calm_equal_temperature_conditions_have_no_driving_force() {
        let env = Environment::new(degf(60.0), degf(60.0), mph(0.0), 1.0, 0.35).unwrap();
        let air = air_state(&env).unwrap();
        let forces = driving_forces(&env, &vents(), &geometry(), &air);
        assert_eq!(forces.total_flow_cfm_per_ft2, 0.0);
    }
}
