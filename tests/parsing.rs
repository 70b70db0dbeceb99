use std::fs;
use std::path::PathBuf;

use hero_stats::api::{parse_hero_catalog, parse_player_heroes, FetchError};
use hero_stats::build_metadata_index;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_player_heroes_fixture() {
    let raw = read_fixture("player_heroes.json");
    let records = parse_player_heroes(&raw).expect("fixture should parse");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].hero_id, 14);
    assert_eq!(records[0].games, 120);
    assert_eq!(records[0].win, 66);
    assert_eq!(records[0].last_played, 1_697_040_000);
    assert_eq!(records[0].against_win, 51);
    assert_eq!(records[1].games, 0);
}

#[test]
fn parses_hero_catalog_fixture() {
    let raw = read_fixture("heroes.json");
    let catalog = parse_hero_catalog(&raw).expect("fixture should parse");
    assert_eq!(catalog.len(), 3);

    let index = build_metadata_index(&catalog);
    assert_eq!(index[&14].name, "Pudge");
    assert_eq!(index[&14].icon, "hero-14");
    assert_eq!(index[&86].name, "Rubick");
}

#[test]
fn missing_counters_default_to_zero() {
    let records = parse_player_heroes(r#"[{"hero_id": 5, "games": 3, "win": 1}]"#)
        .expect("partial record should parse");
    assert_eq!(records[0].with_games, 0);
    assert_eq!(records[0].against_win, 0);
    assert_eq!(records[0].last_played, 0);
}

#[test]
fn non_array_body_is_parse_error() {
    let err = parse_player_heroes(r#"{"error": "rate limited"}"#).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}
