use std::fs;

use smarty_rs::{DataDir, Error};

const BUNDLED: [&str; 6] = [
    "atom_index_odds",
    "atom_OR_bases",
    "atom_OR_decorators",
    "atom_AND_decorators",
    "bond_OR_bases",
    "bond_AND_decorators",
];

#[test]
fn every_bundled_table_parses() {
    let dir = DataDir::bundled();
    for name in BUNDLED {
        let path = format!("odds_files/{name}.smarts");
        let odds = dir.parse_odds_file(&path, false).unwrap();
        assert!(!odds.is_empty(), "{path} is empty");
        if let Some(o) = &odds.odds {
            assert_eq!(o.len(), odds.len(), "{path} odds are misaligned");
        }
        let total: f64 = odds.probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "{path} sums to {total}");
    }
}

#[test]
fn bond_or_bases_has_no_odds() {
    let odds = DataDir::bundled()
        .parse_odds_file("odds_files/bond_OR_bases.smarts", false)
        .unwrap();
    assert_eq!(odds.decorators, ["-", "=", "#", ":", "~"]);
    assert_eq!(odds.odds, None);
}

#[test]
fn path_relative_to_working_directory() {
    let odds = DataDir::bundled()
        .parse_odds_file("testfiles/commented.smarts", false)
        .unwrap();
    assert_eq!(odds.decorators, ["#6", "#7", ""]);
    assert_eq!(odds.odds, Some(vec![4.0, 2.0, 2.0]));
}

#[test]
fn malformed_line_reports_location() {
    let err = DataDir::bundled()
        .parse_odds_file("testfiles/bad_line.smarts", false)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    assert_eq!(
        err.to_string(),
        "entry (#7 1 extra) on line 2 of odds file \
         'testfiles/bad_line.smarts' is invalid"
    );
}

#[test]
fn custom_root_ahead_of_bundled() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("odds_files")).unwrap();
    fs::write(
        tmp.path().join("odds_files/bond_OR_bases.smarts"),
        "- 3\n= 1\n",
    )
    .unwrap();

    let dir = DataDir::new(tmp.path()).with_root(DataDir::bundled().roots()[0].clone());
    let odds = dir
        .parse_odds_file("odds_files/bond_OR_bases.smarts", true)
        .unwrap();
    assert_eq!(odds.odds, Some(vec![3.0, 1.0]));

    // falls through to the bundled root
    let odds = dir
        .parse_odds_file("odds_files/atom_index_odds.smarts", false)
        .unwrap();
    assert_eq!(odds.len(), 5);
}

#[test]
fn not_found_lists_searched_roots() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::new(tmp.path());
    let err = dir.parse_odds_file("odds_files/missing.smarts", false).unwrap_err();
    let msg = err.to_string();
    assert!(err.is_not_found());
    assert!(msg.contains("odds_files/missing.smarts"), "{msg}");
    assert!(msg.contains(&tmp.path().display().to_string()), "{msg}");
}

#[test]
fn json_output_keeps_absent_odds() {
    let odds = DataDir::bundled()
        .parse_odds_file("odds_files/bond_OR_bases.smarts", false)
        .unwrap();
    let json = serde_json::to_value(&odds).unwrap();
    assert!(json["odds"].is_null());
    assert_eq!(json["decorators"][0], "-");
}
