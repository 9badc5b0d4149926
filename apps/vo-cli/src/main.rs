use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use vo_app::{AppError, AppResult, load_route_defs, load_vessel_defs, sample_route_def, sample_vessel_def};
use vo_cii::{cii_rating, compliance_forecast};
use vo_cost::{
    CarbonPrice, CostContributor, InventoryCarrying, MaintenanceSavings, MarketImpact,
    MarketRateImpact,
};
use vo_emissions::{FuelType, detailed_emissions};
use vo_optimizer::{economic_profile, generate_speed_profile, optimize_speed};
use vo_vessel::{RouteSpec, VesselSpec};
use vo_weather::synthetic_weather;

#[derive(Parser)]
#[command(name = "vo-cli")]
#[command(about = "voyopt CLI - vessel speed optimization and carbon intensity tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DataKind {
    Vessel,
    Route,
}

#[derive(clap::Args)]
struct VoyageArgs {
    /// Vessel data file (csv/json/yaml); first record is used. Built-in
    /// sample vessel when omitted
    #[arg(long)]
    vessel_file: Option<PathBuf>,
    /// Route data file; its distance overrides --distance
    #[arg(long)]
    route_file: Option<PathBuf>,
    /// Route distance in nautical miles (sample route distance when omitted)
    #[arg(long)]
    distance: Option<f64>,
    /// Fuel price in USD per ton
    #[arg(long, default_value_t = 600.0)]
    fuel_price: f64,
    /// Vessel operating cost in USD per day
    #[arg(long, default_value_t = 25_000.0)]
    day_rate: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a vessel or route data file
    Validate {
        /// Kind of records the file holds
        kind: DataKind,
        /// Path to the data file
        path: PathBuf,
    },
    /// Find the cost-optimal speed for a voyage
    Optimize {
        #[command(flatten)]
        voyage: VoyageArgs,
        /// Lower speed bound in knots
        #[arg(long, default_value_t = 12.0)]
        min_speed: f64,
        /// Upper speed bound in knots
        #[arg(long, default_value_t = 24.0)]
        max_speed: f64,
        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the sampled speed-cost-emissions profile as CSV
    Profile {
        #[command(flatten)]
        voyage: VoyageArgs,
        /// Lower speed bound in knots
        #[arg(long, default_value_t = 12.0)]
        min_speed: f64,
        /// Upper speed bound in knots
        #[arg(long, default_value_t = 24.0)]
        max_speed: f64,
        /// Sampling step in knots
        #[arg(long, default_value_t = 0.5)]
        step: f64,
        /// Output CSV file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Detailed per-fuel-type emissions for a quantity of fuel
    Emissions {
        /// Fuel burned, tons
        #[arg(long)]
        fuel_tons: f64,
        /// Fuel grade (VLSFO, MGO, LSFO, HFO); unknown grades fall back to
        /// VLSFO
        #[arg(long, default_value = "VLSFO")]
        fuel_type: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// CII rating for a year of operation
    Cii {
        /// Vessel data file; built-in sample vessel when omitted
        #[arg(long)]
        vessel_file: Option<PathBuf>,
        /// Distance sailed per year, nautical miles
        #[arg(long)]
        annual_distance: f64,
        /// Fuel burned per year, tons
        #[arg(long)]
        annual_fuel: f64,
        /// Cargo capacity utilization (0-1]
        #[arg(long, default_value_t = 0.7)]
        utilization: f64,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Project the CII effect of changing operating speed
    Forecast {
        /// Vessel data file; built-in sample vessel when omitted
        #[arg(long)]
        vessel_file: Option<PathBuf>,
        /// Current operating speed, knots
        #[arg(long)]
        current_speed: f64,
        /// Proposed operating speed, knots
        #[arg(long)]
        proposed_speed: f64,
        /// Distance sailed per year, nautical miles
        #[arg(long)]
        annual_distance: f64,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cost-benefit analysis with extended economic terms
    CostBenefit {
        #[command(flatten)]
        voyage: VoyageArgs,
        /// Lower speed bound in knots
        #[arg(long, default_value_t = 12.0)]
        min_speed: f64,
        /// Upper speed bound in knots
        #[arg(long, default_value_t = 24.0)]
        max_speed: f64,
        /// Sampling step in knots
        #[arg(long, default_value_t = 0.5)]
        step: f64,
        /// Total cargo value, USD
        #[arg(long, default_value_t = 50_000_000.0)]
        cargo_value: f64,
        /// Annual inventory carrying cost, percent of cargo value
        #[arg(long, default_value_t = 8.0)]
        inventory_pct: f64,
        /// Carbon price, USD per ton CO2
        #[arg(long, default_value_t = 25.0)]
        carbon_price: f64,
        /// Maintenance saving from slow steaming, percent of day rate
        #[arg(long, default_value_t = 5.0)]
        maintenance_pct: f64,
        /// Market rate impact of slower service (none, low, medium, high)
        #[arg(long, default_value = "none")]
        market_impact: String,
        /// Emit the optimal row as JSON
        #[arg(long)]
        json: bool,
    },
    /// Synthetic weather and its voyage impact along a route
    Weather {
        /// Route data file; built-in sample route when omitted
        #[arg(long)]
        route_file: Option<PathBuf>,
        /// Days of hourly conditions to generate
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// RNG seed for reproducible fields
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Emit the impact summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { kind, path } => cmd_validate(kind, &path),
        Commands::Optimize {
            voyage,
            min_speed,
            max_speed,
            json,
        } => cmd_optimize(&voyage, min_speed, max_speed, json),
        Commands::Profile {
            voyage,
            min_speed,
            max_speed,
            step,
            output,
        } => cmd_profile(&voyage, min_speed, max_speed, step, output.as_deref()),
        Commands::Emissions {
            fuel_tons,
            fuel_type,
            json,
        } => cmd_emissions(fuel_tons, &fuel_type, json),
        Commands::Cii {
            vessel_file,
            annual_distance,
            annual_fuel,
            utilization,
            json,
        } => cmd_cii(
            vessel_file.as_deref(),
            annual_distance,
            annual_fuel,
            utilization,
            json,
        ),
        Commands::Forecast {
            vessel_file,
            current_speed,
            proposed_speed,
            annual_distance,
            json,
        } => cmd_forecast(
            vessel_file.as_deref(),
            current_speed,
            proposed_speed,
            annual_distance,
            json,
        ),
        Commands::CostBenefit {
            voyage,
            min_speed,
            max_speed,
            step,
            cargo_value,
            inventory_pct,
            carbon_price,
            maintenance_pct,
            market_impact,
            json,
        } => cmd_cost_benefit(
            &voyage,
            min_speed,
            max_speed,
            step,
            cargo_value,
            inventory_pct,
            carbon_price,
            maintenance_pct,
            &market_impact,
            json,
        ),
        Commands::Weather {
            route_file,
            days,
            seed,
            json,
        } => cmd_weather(route_file.as_deref(), days, seed, json),
    }
}

fn load_vessel(vessel_file: Option<&Path>) -> AppResult<VesselSpec> {
    let def = match vessel_file {
        Some(path) => load_vessel_defs(path)?
            .into_iter()
            .next()
            .expect("import rejects empty record lists"),
        None => sample_vessel_def(),
    };
    Ok(VesselSpec::from_def(def)?)
}

fn load_route(route_file: Option<&Path>) -> AppResult<RouteSpec> {
    let def = match route_file {
        Some(path) => load_route_defs(path)?
            .into_iter()
            .next()
            .expect("import rejects empty record lists"),
        None => sample_route_def(),
    };
    Ok(RouteSpec::from_def(def)?)
}

fn resolve_distance(voyage: &VoyageArgs) -> AppResult<f64> {
    if voyage.route_file.is_some() {
        Ok(load_route(voyage.route_file.as_deref())?.distance_nm())
    } else if let Some(distance) = voyage.distance {
        Ok(distance)
    } else {
        Ok(load_route(None)?.distance_nm())
    }
}

fn print_json<T: Serialize>(value: &T) {
    let rendered =
        serde_json::to_string_pretty(value).expect("result records serialize to JSON");
    println!("{rendered}");
}

fn cmd_validate(kind: DataKind, path: &Path) -> AppResult<()> {
    println!("Validating data file: {}", path.display());
    match kind {
        DataKind::Vessel => {
            let defs = load_vessel_defs(path)?;
            let count = defs.len();
            for def in defs {
                let vessel = VesselSpec::from_def(def)?;
                println!(
                    "  {} - {} ({} kn design, {} t/day)",
                    vessel.name(),
                    vessel.vessel_type(),
                    vessel.design_speed_kn(),
                    vessel.design_consumption_tpd()
                );
            }
            println!("✓ {count} vessel record(s) valid");
        }
        DataKind::Route => {
            let defs = load_route_defs(path)?;
            let count = defs.len();
            for def in defs {
                let route = RouteSpec::from_def(def)?;
                println!(
                    "  {} - {} nm, {} waypoints",
                    route.name(),
                    route.distance_nm(),
                    route.waypoint_count()
                );
            }
            println!("✓ {count} route record(s) valid");
        }
    }
    Ok(())
}

fn cmd_optimize(voyage: &VoyageArgs, min_speed: f64, max_speed: f64, json: bool) -> AppResult<()> {
    let vessel = load_vessel(voyage.vessel_file.as_deref())?;
    let distance = resolve_distance(voyage)?;

    let result = optimize_speed(
        &vessel,
        distance,
        voyage.fuel_price,
        voyage.day_rate,
        min_speed,
        max_speed,
        None,
    )?;

    if json {
        print_json(&result);
        return Ok(());
    }

    println!(
        "Optimal speed for {} over {distance} nm: {:.2} kn",
        vessel.name(),
        result.optimal.speed_kn
    );
    println!("  Transit time: {:.2} days", result.optimal.transit_time_days);
    println!("  Total fuel:   {:.1} t", result.optimal.total_fuel_tons);
    println!("  Fuel cost:    {:.0} USD", result.optimal.fuel_cost_usd);
    println!("  Time cost:    {:.0} USD", result.optimal.time_cost_usd);
    println!("  Total cost:   {:.0} USD", result.optimal.total_cost_usd);
    println!("  CO2:          {:.1} t", result.optimal.co2_tons);
    println!(
        "Versus design speed {:.1} kn:",
        vessel.design_speed_kn()
    );
    println!("  Fuel savings: {:.1} t", result.fuel_savings_tons);
    println!("  Cost savings: {:.0} USD", result.cost_savings_usd);
    println!("  CO2 avoided:  {:.1} t", result.co2_reduction_tons);
    if vessel.in_optimal_range(result.optimal.speed_kn)? {
        println!("  Engine load is inside the optimal band");
    } else {
        println!(
            "  Engine load is outside the optimal band ({:.1}-{:.1} kn)",
            vessel.optimal_speed_min_kn(),
            vessel.optimal_speed_max_kn()
        );
    }
    Ok(())
}

fn cmd_profile(
    voyage: &VoyageArgs,
    min_speed: f64,
    max_speed: f64,
    step: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let vessel = load_vessel(voyage.vessel_file.as_deref())?;
    let distance = resolve_distance(voyage)?;

    let profile = generate_speed_profile(
        &vessel,
        distance,
        voyage.fuel_price,
        voyage.day_rate,
        (min_speed, max_speed),
        step,
    )?;

    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?),
        None => Box::new(io::stdout()),
    };

    let write_err = |source: io::Error| AppError::FileWrite {
        path: output.unwrap_or(Path::new("stdout")).to_path_buf(),
        source,
    };

    writeln!(
        out,
        "speed_kn,transit_time_days,daily_fuel_tons,total_fuel_tons,fuel_cost_usd,time_cost_usd,total_cost_usd,co2_tons,sox_tons,nox_tons"
    )
    .map_err(write_err)?;
    for p in &profile {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            p.speed_kn,
            p.transit_time_days,
            p.daily_fuel_tons,
            p.total_fuel_tons,
            p.fuel_cost_usd,
            p.time_cost_usd,
            p.total_cost_usd,
            p.co2_tons,
            p.sox_tons,
            p.nox_tons
        )
        .map_err(write_err)?;
    }

    if let Some(path) = output {
        println!("✓ Wrote {} profile rows to {}", profile.len(), path.display());
    }
    Ok(())
}

fn cmd_emissions(fuel_tons: f64, fuel_type: &str, json: bool) -> AppResult<()> {
    let fuel_type = FuelType::parse_or_default(fuel_type);
    let emissions = detailed_emissions(fuel_tons, fuel_type)?;

    if json {
        print_json(&emissions);
        return Ok(());
    }

    println!("Emissions for {fuel_tons} t of {fuel_type}:");
    println!("  CO2: {:.2} t", emissions.co2_tons);
    println!("  SOx: {:.3} t", emissions.sox_tons);
    println!("  NOx: {:.3} t", emissions.nox_tons);
    println!("  PM:  {:.3} t", emissions.pm_tons);
    Ok(())
}

fn cmd_cii(
    vessel_file: Option<&Path>,
    annual_distance: f64,
    annual_fuel: f64,
    utilization: f64,
    json: bool,
) -> AppResult<()> {
    let vessel = load_vessel(vessel_file)?;
    let report = cii_rating(&vessel, annual_distance, annual_fuel, utilization)?;

    if json {
        print_json(&report);
        return Ok(());
    }

    println!("CII rating for {}: {}", vessel.name(), report.rating);
    println!("  CO2:            {:.0} t/year", report.co2_tons_per_year);
    println!(
        "  Transport work: {:.3e} ton-nm/year",
        report.transport_work_ton_nm
    );
    println!("  Attained AER:   {:.3} g/ton-nm", report.aer_g_per_ton_nm);
    println!("  Reference AER:  {:.1} g/ton-nm", report.reference_aer);
    println!("  CII ratio:      {:.3}", report.cii_ratio);
    Ok(())
}

fn cmd_forecast(
    vessel_file: Option<&Path>,
    current_speed: f64,
    proposed_speed: f64,
    annual_distance: f64,
    json: bool,
) -> AppResult<()> {
    let vessel = load_vessel(vessel_file)?;
    let forecast = compliance_forecast(&vessel, current_speed, proposed_speed, annual_distance)?;

    if json {
        print_json(&forecast);
        return Ok(());
    }

    println!(
        "Compliance forecast for {} over {annual_distance} nm/year:",
        vessel.name()
    );
    for (label, scenario) in [
        ("Current ", &forecast.current),
        ("Proposed", &forecast.proposed),
    ] {
        println!(
            "  {label} {:>5.1} kn: {:.0} t fuel, CII ratio {:.3}, rating {}",
            scenario.speed_kn,
            scenario.annual_fuel_tons,
            scenario.cii.cii_ratio,
            scenario.cii.rating
        );
    }
    println!(
        "  Savings: {:.0} t fuel ({:.1} %), {:.0} t CO2",
        forecast.savings.fuel_savings_tons,
        forecast.savings.percentage_reduction,
        forecast.savings.emission_savings_tons
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_cost_benefit(
    voyage: &VoyageArgs,
    min_speed: f64,
    max_speed: f64,
    step: f64,
    cargo_value: f64,
    inventory_pct: f64,
    carbon_price: f64,
    maintenance_pct: f64,
    market_impact: &str,
    json: bool,
) -> AppResult<()> {
    let vessel = load_vessel(voyage.vessel_file.as_deref())?;
    let distance = resolve_distance(voyage)?;
    let level = MarketImpact::parse_or_default(market_impact);

    let contributors: Vec<Box<dyn CostContributor>> = vec![
        Box::new(InventoryCarrying::new(cargo_value, inventory_pct)?),
        Box::new(CarbonPrice::new(carbon_price)?),
        Box::new(MaintenanceSavings::new(voyage.day_rate, maintenance_pct)?),
        Box::new(MarketRateImpact::new(cargo_value, level)?),
    ];

    let analysis = economic_profile(
        &vessel,
        distance,
        voyage.fuel_price,
        voyage.day_rate,
        (min_speed, max_speed),
        step,
        &contributors,
    )?;

    if json {
        print_json(&analysis.optimal);
        return Ok(());
    }

    let optimal = &analysis.optimal;
    println!(
        "Economically optimal speed: {:.2} kn (market impact: {level})",
        optimal.point.speed_kn
    );
    println!("  Base voyage cost: {:.0} USD", optimal.point.total_cost_usd);
    for entry in &optimal.contributions {
        println!("  {:<20} {:>12.0} USD", entry.name, entry.usd);
    }
    println!(
        "  Total economic cost: {:.0} USD",
        optimal.total_economic_cost_usd
    );
    Ok(())
}

fn cmd_weather(route_file: Option<&Path>, days: u32, seed: u64, json: bool) -> AppResult<()> {
    let route = load_route(route_file)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let field = synthetic_weather(&route, Utc::now(), days, &mut rng)?;
    let average = field.average_conditions();
    let impact = field.voyage_impact();

    if json {
        print_json(&impact);
        return Ok(());
    }

    println!(
        "Synthetic weather for {} ({} days, seed {seed}):",
        route.name(),
        days
    );
    if let (Some(wind), Some(current), Some(wave)) = (
        average.wind_speed_kn,
        average.current_speed_kn,
        average.wave_height_m,
    ) {
        println!("  Avg wind:    {wind:.1} kn");
        println!("  Avg current: {current:.1} kn");
        println!("  Avg waves:   {wave:.1} m");
    }
    println!("  Speed reduction: {:.1} %", impact.speed_reduction_pct);
    println!("  Fuel increase:   {:.1} %", impact.fuel_increase_pct);
    println!("  High-risk areas: {}", impact.high_risk_areas.len());
    Ok(())
}
