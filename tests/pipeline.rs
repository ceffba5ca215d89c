use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use wall_detector::input::WallLines;
use wall_detector::{save_walls_json, Wall, WallDetector, WallParams};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wall_detector_pipeline_{name}.json"))
}

#[test]
fn session_from_lines_to_export() {
    let input = Cursor::new(
        "0 0 300 0\n\
         0 0 0 50\n\
         5 5 5 5\n\
         1 2 3\n\
         0 0 100 100\n\
         10 10 10 400\n\
         q\n",
    );

    let mut detector = WallDetector::new(WallParams::default());
    let mut format_rejections = 0;
    for item in WallLines::new(input) {
        match item {
            Ok([x1, y1, x2, y2]) => {
                // Degenerate segments are rejected by the detector itself.
                let _ = detector.add_wall(x1, y1, x2, y2);
            }
            Err(_) => format_rejections += 1,
        }
    }

    assert_eq!(format_rejections, 1, "only the three-integer line is malformed");
    assert_eq!(detector.len(), 4, "degenerate segment must not be stored");

    let valid = detector.valid_walls();
    assert_eq!(
        valid.len(),
        2,
        "expected the long horizontal and the long vertical wall, got {valid:?}"
    );
    assert_eq!((valid[0].x2, valid[0].y2), (300, 0));
    assert_eq!((valid[1].x2, valid[1].y2), (10, 400));

    let path = temp_path("session");
    let count = save_walls_json(&path, &valid).unwrap();
    assert_eq!(count, 2);

    let parsed: Vec<Wall> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, valid);
    fs::remove_file(&path).ok();
}

#[test]
fn scenario_walls_match_expected_classification() {
    let mut detector = WallDetector::default();

    let wall = detector.add_wall(0, 0, 300, 0).unwrap();
    assert_eq!(wall.length, 300.0);
    assert_eq!(wall.angle, 0.0);

    let wall = detector.add_wall(0, 0, 0, 50).unwrap();
    assert_eq!(wall.length, 50.0);
    assert!((wall.angle - 90.0).abs() < 1e-9);

    assert!(detector.add_wall(5, 5, 5, 5).is_err());

    let wall = detector.add_wall(0, 0, 100, 100).unwrap();
    assert!((wall.length - 141.42).abs() < 0.01);
    assert!((wall.angle - 45.0).abs() < 1e-9);

    let valid = detector.valid_walls();
    assert_eq!(valid.len(), 1);
    assert_eq!((valid[0].x2, valid[0].y2), (300, 0));
}

#[test]
fn empty_session_exports_empty_array() {
    let detector = WallDetector::default();
    let path = temp_path("empty");
    let count = save_walls_json(&path, &detector.valid_walls()).unwrap();
    assert_eq!(count, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[\n]\n");
    fs::remove_file(&path).ok();
}

#[test]
fn threshold_boundary_just_above_minimum_passes() {
    // 100.0 exactly is excluded (strict filter); anything longer passes.
    let mut detector = WallDetector::new(WallParams {
        min_length: 100.0,
        angle_tolerance_deg: 10.0,
    });
    detector.add_wall(0, 0, 100, 0).unwrap();
    detector.add_wall(0, 0, 100, 1).unwrap(); // length ≈ 100.005, angle ≈ 0.57°
    let valid = detector.valid_walls();
    assert_eq!(valid.len(), 1);
    assert!(valid[0].length > 100.0);
}
