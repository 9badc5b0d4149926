//! Sample data through the full stack: session, optimizer, CII, weather.

use chrono::TimeZone;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vo_app::{Session, sample_route_def, sample_vessel_def};
use vo_cii::{CiiRating, cii_rating, compliance_forecast};
use vo_emissions::{FuelType, detailed_emissions};
use vo_optimizer::{generate_speed_profile, optimize_speed};
use vo_weather::synthetic_weather;

#[test]
fn sample_voyage_end_to_end() {
    let mut session = Session::new();
    session.load_vessel(sample_vessel_def()).unwrap();
    session.load_route(sample_route_def()).unwrap();

    let vessel = session.vessel().unwrap();
    let route = session.route().unwrap();

    let result = optimize_speed(vessel, route.distance_nm(), 600.0, 25_000.0, 12.0, 24.0, None)
        .unwrap();
    assert!(result.optimal.speed_kn < vessel.design_speed_kn());
    assert!(result.cost_savings_usd > 0.0);

    let profile =
        generate_speed_profile(vessel, route.distance_nm(), 600.0, 25_000.0, (12.0, 24.0), 0.5)
            .unwrap();
    for sample in &profile {
        assert!(result.optimal.total_cost_usd <= sample.total_cost_usd + 1e-6);
    }

    let emissions = detailed_emissions(result.optimal.total_fuel_tons, FuelType::Vlsfo).unwrap();
    assert!(emissions.co2_tons > 0.0);

    let forecast = compliance_forecast(vessel, 20.0, result.optimal.speed_kn, 100_000.0).unwrap();
    assert!(forecast.savings.fuel_savings_tons > 0.0);
    assert!(forecast.proposed.cii.cii_ratio < forecast.current.cii.cii_ratio);

    let rating = cii_rating(vessel, 100_000.0, forecast.proposed.annual_fuel_tons, 0.7).unwrap();
    assert_eq!(rating.rating, forecast.proposed.cii.rating);
}

#[test]
fn sample_route_weather_impact_is_bounded() {
    let mut session = Session::new();
    session.load_route(sample_route_def()).unwrap();
    let route = session.route().unwrap();

    let start = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);
    let field = synthetic_weather(route, start, 7, &mut rng).unwrap();

    assert_eq!(field.winds.len(), 4 * 7 * 24);
    let impact = field.voyage_impact();
    assert!(impact.speed_reduction_pct >= 0.0);
    assert!(impact.speed_reduction_pct <= 30.0);
    assert!((impact.fuel_increase_pct - impact.speed_reduction_pct * 1.5).abs() < 1e-9);
}

#[test]
fn sample_vessel_cii_with_design_operation() {
    let mut session = Session::new();
    session.load_vessel(sample_vessel_def()).unwrap();
    let vessel = session.vessel().unwrap();

    // A year of sailing at design speed covers far more than 100k nm of
    // transport work; the resulting AER lands in the worst band for the
    // container reference line.
    let annual_distance = 100_000.0;
    let annual_days = annual_distance / (20.0 * 24.0);
    let annual_fuel = 180.0 * annual_days;
    let report = cii_rating(vessel, annual_distance, annual_fuel, 0.7).unwrap();
    assert!(report.cii_ratio > 1.10);
    assert_eq!(report.rating, CiiRating::E);
}
