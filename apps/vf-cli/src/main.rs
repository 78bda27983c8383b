use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vf_project::{
    ProjectResult, SavedCalculation, compile_request, load_json, load_request, save_json,
};
use vf_results::{Adequacy, CalculationResult, Outcome, RateBasis, Severity};

#[derive(Parser)]
#[command(name = "vf-cli")]
#[command(about = "Ventflow CLI - Natural ventilation calculator for flammable-gas enclosures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a calculation request file
    Validate {
        /// Path to the request file (YAML or JSON)
        request_path: PathBuf,
    },
    /// Run a calculation and print the results
    Run {
        /// Path to the request file (YAML or JSON)
        request_path: PathBuf,
        /// Write the completed calculation to a JSON document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a previously saved calculation
    Show {
        /// Path to a saved calculation JSON document
        saved_path: PathBuf,
    },
    /// List fugitive-emission factor sets
    Factors {
        /// Filter by set name or component label
        query: Option<String>,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { request_path } => cmd_validate(&request_path),
        Commands::Run {
            request_path,
            output,
        } => cmd_run(&request_path, output.as_deref()),
        Commands::Show { saved_path } => cmd_show(&saved_path),
        Commands::Factors { query } => cmd_factors(query.as_deref()),
    }
}

fn cmd_validate(request_path: &Path) -> ProjectResult<()> {
    println!("Validating request: {}", request_path.display());
    let def = load_request(request_path)?;
    if let Some(name) = &def.project_name {
        println!("  Project: {name}");
    }
    println!("✓ Request is valid");
    Ok(())
}

fn cmd_run(request_path: &Path, output: Option<&Path>) -> ProjectResult<()> {
    let def = load_request(request_path)?;
    let request = compile_request(&def)?;
    tracing::debug!(path = %request_path.display(), "compiled calculation request");

    let result = vf_engine::compute(&request).map_err(vf_project::ValidationError::from)?;
    print_result(&result);

    if let Some(output) = output {
        let document = SavedCalculation::new(def, result);
        save_json(output, &document)?;
        println!();
        println!("Saved calculation to {}", output.display());
    }
    Ok(())
}

fn cmd_show(saved_path: &Path) -> ProjectResult<()> {
    let document = load_json(saved_path)?;
    if let Some(name) = &document.request.project_name {
        println!("Project: {name}");
    }
    print_result(&document.result);
    Ok(())
}

fn cmd_factors(query: Option<&str>) -> ProjectResult<()> {
    let sets = vf_factors::filter_emission_factor_catalog(query.unwrap_or(""));
    if sets.is_empty() {
        println!("No factor sets match the query");
        return Ok(());
    }

    for set in sets {
        println!("{} - {}", set.key, set.display_name);
        for factor in set.factors {
            println!(
                "  {:<22} {:.5} CFM/unit",
                factor.component.label(),
                factor.rate_cfm
            );
        }
    }
    Ok(())
}

fn print_result(result: &CalculationResult) {
    println!("Calculation complete");
    println!();

    match &result.outcome {
        Outcome::Verification {
            actual_rate_cfm,
            flow_difference_cfm,
            status,
            limiting_free_area_ft2,
            ..
        } => {
            println!(
                "  Required ventilation rate: {:.2} CFM",
                result.requirement.required_rate_cfm
            );
            println!("  Actual ventilation rate:   {actual_rate_cfm:.2} CFM");
            println!("  Limiting free area:        {limiting_free_area_ft2:.2} ft²");
            match status {
                Adequacy::Adequate => {
                    println!("  Status: ADEQUATE (surplus of {flow_difference_cfm:.2} CFM)");
                }
                Adequacy::Inadequate => {
                    println!(
                        "  Status: INADEQUATE (deficit of {:.2} CFM)",
                        flow_difference_cfm.abs()
                    );
                }
            }
        }
        Outcome::Design {
            required_free_area_ft2,
            gross_inlet_area_ft2,
            gross_outlet_area_ft2,
        } => {
            println!(
                "  Required ventilation rate: {:.2} CFM",
                result.requirement.required_rate_cfm
            );
            match (
                required_free_area_ft2,
                gross_inlet_area_ft2,
                gross_outlet_area_ft2,
            ) {
                (Some(free), Some(inlet), Some(outlet)) => {
                    println!("  Required free area:        {free:.2} ft²");
                    println!("  Required gross inlet:      {inlet:.2} ft²");
                    println!("  Required gross outlet:     {outlet:.2} ft²");
                }
                _ => {
                    println!(
                        "  No natural ventilation is possible under these conditions; \
                         no finite vent area meets the requirement"
                    );
                }
            }
        }
    }

    println!();
    println!("Analysis & recommendations:");
    for recommendation in &result.recommendations {
        let marker = match recommendation.severity {
            Severity::Critical => "!",
            Severity::Advisory => "-",
        };
        println!("  {marker} {}", recommendation.text);
    }

    println!();
    println!("Details:");
    println!(
        "  Building: {:.1} x {:.1} x {:.1} ft (volume {:.0} ft³, floor {:.0} ft²)",
        result.geometry.length_ft,
        result.geometry.width_ft,
        result.geometry.height_ft,
        result.geometry.volume_ft3,
        result.geometry.floor_area_ft2
    );
    println!(
        "  Air density inside/outside: {:.4} / {:.4} lb/ft³ (Δ {:.5})",
        result.air.density_inside_lb_ft3,
        result.air.density_outside_lb_ft3,
        result.air.density_difference_lb_ft3
    );
    println!(
        "  Flow per unit area: wind {:.2}, stack {:.2}, total {:.2} CFM/ft²",
        result.forces.wind_flow_cfm_per_ft2,
        result.forces.stack_flow_cfm_per_ft2,
        result.forces.total_flow_cfm_per_ft2
    );
    if let RateBasis::AreaMethod {
        air_change_rate_cfm,
        floor_area_rate_cfm,
    } = result.requirement.basis
    {
        println!(
            "  Rate candidates: air change {air_change_rate_cfm:.2} CFM, \
             floor area {floor_area_rate_cfm:.2} CFM"
        );
    }
    if let Some(emissions) = &result.emissions {
        println!(
            "  Fugitive leak rate: {:.5} CFM from {} source type(s) ({})",
            emissions.leak_rate_cfm,
            emissions.sources.len(),
            emissions.factor_set
        );
    }
}
