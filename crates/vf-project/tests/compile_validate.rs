use vf_engine::EngineError;
use vf_factors::{ComponentType, FactorSetKey, FugitiveSource};
use vf_project::schema::{CalculationDef, MethodKindDef, ModeKindDef};
use vf_project::{ValidationError, compile_request};
use vf_results::GasBuoyancy;

fn base_def() -> CalculationDef {
    CalculationDef {
        project_name: Some("Compressor Shed".to_string()),
        method: MethodKindDef::AreaMethod,
        mode: ModeKindDef::Design,
        length_ft: 40.0,
        width_ft: 30.0,
        height_ft: 12.0,
        inside_temp_f: 70.0,
        outside_temp_f: 40.0,
        wind_velocity_mph: 10.0,
        terrain_factor: 1.0,
        wind_effectiveness: 0.35,
        discharge_coefficient: 0.65,
        inlet_obstruction: 0.5,
        outlet_obstruction: 0.5,
        gas_buoyancy: GasBuoyancy::LighterThanAir,
        lfl_pct: None,
        safety_factor: None,
        fugitive_factor_set: None,
        fugitive_sources: vec![],
        existing_inlet_area_ft2: None,
        existing_outlet_area_ft2: None,
    }
}

fn fugitive_def() -> CalculationDef {
    CalculationDef {
        method: MethodKindDef::FugitiveEmissionMethod,
        lfl_pct: Some(5.0),
        safety_factor: Some(0.25),
        fugitive_factor_set: Some(FactorSetKey::AverageEpa),
        fugitive_sources: vec![FugitiveSource {
            component: ComponentType::Valves,
            quantity: 3,
        }],
        ..base_def()
    }
}

#[test]
fn valid_area_design_document_compiles() {
    let request = compile_request(&base_def()).unwrap();
    assert!(matches!(
        request.method,
        vf_engine::CalculationMethod::Area
    ));
    assert!(matches!(request.mode, vf_engine::CalculationMode::Design));
}

#[test]
fn valid_fugitive_document_compiles() {
    let request = compile_request(&fugitive_def()).unwrap();
    match request.method {
        vf_engine::CalculationMethod::FugitiveEmission {
            factor_set,
            sources,
            lfl_pct,
            safety_factor,
        } => {
            assert_eq!(factor_set, FactorSetKey::AverageEpa);
            assert_eq!(sources.len(), 1);
            assert_eq!(lfl_pct, 5.0);
            assert_eq!(safety_factor, 0.25);
        }
        vf_engine::CalculationMethod::Area => panic!("expected fugitive method"),
    }
}

#[test]
fn repeated_source_entries_accumulate() {
    let mut def = fugitive_def();
    def.fugitive_sources = vec![
        FugitiveSource {
            component: ComponentType::Valves,
            quantity: 2,
        },
        FugitiveSource {
            component: ComponentType::Valves,
            quantity: 3,
        },
    ];

    let request = compile_request(&def).unwrap();
    match request.method {
        vf_engine::CalculationMethod::FugitiveEmission { sources, .. } => {
            assert_eq!(sources.len(), 1);
            assert_eq!(sources.sources()[0].quantity, 5);
        }
        vf_engine::CalculationMethod::Area => panic!("expected fugitive method"),
    }
}

#[test]
fn missing_lfl_is_reported() {
    let mut def = fugitive_def();
    def.lfl_pct = None;
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingDilutionParameters { .. }
    ));
}

#[test]
fn nan_safety_factor_counts_as_missing() {
    let mut def = fugitive_def();
    def.safety_factor = Some(f64::NAN);
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingDilutionParameters { .. }
    ));
}

#[test]
fn missing_factor_set_is_reported() {
    let mut def = fugitive_def();
    def.fugitive_factor_set = None;
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(err, ValidationError::MissingFactorSet));
}

#[test]
fn verification_without_areas_is_reported() {
    let mut def = base_def();
    def.mode = ModeKindDef::Verification;
    def.existing_inlet_area_ft2 = Some(20.0);
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(err, ValidationError::MissingExistingVentAreas));
}

#[test]
fn non_finite_dimension_is_reported() {
    let mut def = base_def();
    def.length_ft = f64::INFINITY;
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue {
            field: "length_ft",
            ..
        }
    ));
}

#[test]
fn engine_invariants_pass_through() {
    let mut def = base_def();
    def.inlet_obstruction = 0.0;
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Engine(EngineError::InvalidObstructionFactor { which: "inlet", .. })
    ));

    let mut def = base_def();
    def.height_ft = -3.0;
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Engine(EngineError::InvalidArg { .. })
    ));
}

#[test]
fn zero_quantity_source_is_reported() {
    let mut def = fugitive_def();
    def.fugitive_sources = vec![FugitiveSource {
        component: ComponentType::Flanges,
        quantity: 0,
    }];
    let err = compile_request(&def).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Factor(vf_factors::FactorError::InvalidQuantity { .. })
    ));
}
