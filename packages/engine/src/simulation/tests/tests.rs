use num_bigint::BigInt;

use super::*;

const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

fn example_storm() -> StormCore {
    let mut storm = StormCore::from_input(EXAMPLE, Settings::default()).unwrap();
    storm.set_test_area(TestArea::square(7, 27));
    storm
}

#[test]
fn storm_runs_both_computations() {
    let storm = example_storm();
    assert_eq!(storm.particle_count(), 5);
    assert_eq!(storm.crossing_count().unwrap(), 2);
    assert_eq!(storm.reconstruct_rock().unwrap().position_sum(), BigInt::from(47));
}

#[test]
fn parallel_switch_keeps_count() {
    let mut storm = example_storm();
    storm.set_parallel(false);
    assert!(!storm.settings().parallel);
    assert_eq!(storm.crossing_count().unwrap(), 2);
    storm.set_parallel(true);
    assert_eq!(storm.crossing_count().unwrap(), 2);
}

#[test]
fn default_area_excludes_small_example() {
    let storm = StormCore::from_input(EXAMPLE, Settings::default()).unwrap();
    assert_eq!(storm.settings().test_area, TestArea::square(DEFAULT_TEST_AREA_MIN, DEFAULT_TEST_AREA_MAX));
    assert_eq!(storm.crossing_count().unwrap(), 0);
}

#[test]
fn empty_test_area_is_an_error() {
    let mut storm = example_storm();
    storm.set_test_area(TestArea { min_x: 10, max_x: 0, min_y: 0, max_y: 10 });
    assert!(storm.crossing_count().is_err());
}

#[test]
fn settings_json_fills_missing_fields() {
    let settings = Settings::from_json(r#"{"testArea": {"minX": 7, "maxX": 27, "minY": 7, "maxY": 27}}"#).unwrap();
    assert_eq!(settings.test_area, TestArea::square(7, 27));
    assert_eq!(settings.parallel, Settings::default().parallel);

    let settings = Settings::from_json(r#"{"parallel": false}"#).unwrap();
    assert_eq!(settings.test_area, TestArea::default());
    assert!(!settings.parallel);

    assert!(matches!(Settings::from_json("{\"testArea\": 3}"), Err(SettingsError::Json(_))));
}

#[test]
fn particles_json_round_trips_through_input() {
    let storm = example_storm();
    let json = storm.particles_json().unwrap();
    let reloaded = StormCore::from_input(&json, Settings::default()).unwrap();
    assert_eq!(reloaded.particles(), storm.particles());
}
