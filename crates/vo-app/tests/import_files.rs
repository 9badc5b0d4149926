//! File import round-trips through every supported format.

use std::fs;
use std::path::PathBuf;
use vo_app::{AppError, load_route_defs, load_vessel_defs};
use vo_vessel::{RouteSpec, VesselSpec};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("voyopt-import-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn json_vessel_file() {
    let path = scratch_file(
        "vessels.json",
        r#"{
            "vessels": [{
                "name": "JSON Vessel",
                "type": "Bulk Carrier",
                "design_speed_kn": 14.0,
                "max_speed_kn": 16.0,
                "design_consumption_tpd": 45.0,
                "deadweight_tons": 82000.0
            }]
        }"#,
    );
    let defs = load_vessel_defs(&path).unwrap();
    assert_eq!(defs.len(), 1);
    let vessel = VesselSpec::from_def(defs.into_iter().next().unwrap()).unwrap();
    assert_eq!(vessel.name(), "JSON Vessel");
    assert_eq!(vessel.design_speed_kn(), 14.0);
    fs::remove_file(path).unwrap();
}

#[test]
fn yaml_vessel_file() {
    let path = scratch_file(
        "vessels.yaml",
        "vessels:\n  - name: YAML Vessel\n    design_speed_kn: 19.0\n    max_speed_kn: 23.0\n",
    );
    let defs = load_vessel_defs(&path).unwrap();
    let vessel = VesselSpec::from_def(defs.into_iter().next().unwrap()).unwrap();
    assert_eq!(vessel.name(), "YAML Vessel");
    assert_eq!(vessel.design_speed_kn(), 19.0);
    // unspecified fields still get the documented defaults
    assert_eq!(vessel.design_consumption_tpd(), 180.0);
    fs::remove_file(path).unwrap();
}

#[test]
fn csv_vessel_file() {
    let path = scratch_file(
        "vessels.csv",
        "name,type,design_speed_kn,max_speed_kn,design_consumption_tpd\n\
         CSV One,Oil Tanker,15.0,17.0,60.0\n\
         CSV Two,Container Ship,21.0,25.0,190.0\n",
    );
    let defs = load_vessel_defs(&path).unwrap();
    assert_eq!(defs.len(), 2);
    let second = VesselSpec::from_def(defs[1].clone()).unwrap();
    assert_eq!(second.name(), "CSV Two");
    assert_eq!(second.design_consumption_tpd(), 190.0);
    fs::remove_file(path).unwrap();
}

#[test]
fn json_route_file() {
    let path = scratch_file(
        "routes.json",
        r#"{
            "routes": [{
                "name": "Test Route",
                "distance_nm": 3500.0,
                "waypoints": [
                    {"name": "A", "lat": 1.0, "lon": 103.0},
                    {"name": "B", "lat": 22.0, "lon": 114.0}
                ]
            }]
        }"#,
    );
    let defs = load_route_defs(&path).unwrap();
    let route = RouteSpec::from_def(defs.into_iter().next().unwrap()).unwrap();
    assert_eq!(route.name(), "Test Route");
    assert_eq!(route.waypoint_count(), 2);
    fs::remove_file(path).unwrap();
}

#[test]
fn spreadsheet_is_rejected_with_filename() {
    let path = scratch_file("vessels.xlsx", "not a real spreadsheet");
    let err = load_vessel_defs(&path).unwrap_err();
    match &err {
        AppError::UnsupportedFormat { path: p, extension } => {
            assert_eq!(extension, "xlsx");
            assert!(p.to_string_lossy().contains("vessels.xlsx"));
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
    assert!(format!("{err}").contains("vessels.xlsx"));
    fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("voyopt-definitely-missing.json");
    assert!(matches!(
        load_vessel_defs(&path),
        Err(AppError::FileRead { .. })
    ));
}

#[test]
fn empty_record_list_is_rejected() {
    let path = scratch_file("empty.json", r#"{"vessels": []}"#);
    assert!(matches!(
        load_vessel_defs(&path),
        Err(AppError::Empty { .. })
    ));
    fs::remove_file(path).unwrap();
}
