//! End-to-end checks of the rendered worksheet report

use approx::assert_relative_eq;
use radiometry::parts::{run_all, run_part};
use radiometry::report::Line;
use radiometry::{OutputFormat, Report};
use tempfile::tempdir;

const EXPECTED_REPORT: &str = include_str!("data/expected_report.txt");

#[test]
fn test_full_report_text() {
    let report = run_all().unwrap();
    assert_eq!(report.render_text(), EXPECTED_REPORT);
}

#[test]
fn test_report_is_deterministic() {
    let first = run_all().unwrap().render_text();
    let second = run_all().unwrap().render_text();
    assert_eq!(first, second);
}

#[test]
fn test_single_part_matches_full_report_block() {
    for number in 1..=9u8 {
        let section = run_part(number).unwrap();
        let block = section.render_text();
        assert!(
            EXPECTED_REPORT.contains(&block),
            "part {number} block not found in full report:\n{block}"
        );
    }
}

#[test]
fn test_part_layout() {
    let report = run_all().unwrap();

    // Part 4 opens with a blank row, part 8 separates its groups with three
    let blanks = |part: u8| {
        report
            .section(part)
            .unwrap()
            .lines
            .iter()
            .filter(|line| matches!(line, Line::Blank))
            .count()
    };
    assert_eq!(blanks(4), 1);
    assert_eq!(blanks(8), 3);
    assert!(matches!(report.section(4).unwrap().lines[0], Line::Blank));

    let counts: Vec<usize> = report
        .sections
        .iter()
        .map(|s| s.quantities().count())
        .collect();
    assert_eq!(counts, vec![2, 5, 2, 2, 1, 5, 2, 9, 2]);
}

#[test]
fn test_json_report() {
    let report = run_all().unwrap();
    let json = report.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 9);

    let part2 = &sections[1];
    assert_eq!(part2["part"], 2);
    assert_eq!(part2["lines"][0]["label"], "Radiant flux (Φ)");
    let flux = part2["lines"][0]["value"].as_f64().unwrap();
    assert_relative_eq!(flux, 1.68, epsilon = 1e-12);
    assert_eq!(part2["lines"][0]["unit"], "W");
}

#[test]
fn test_point_source_power_balance() {
    // Parts 2 and 3 describe the same 1.68 W bulb
    let report = run_all().unwrap();
    let part2 = report.section(2).unwrap();
    let part3 = report.section(3).unwrap();

    let flux = part2.get("Radiant flux (Φ)").unwrap().value;
    let intensity = part2.get("Radiant intensity (I)").unwrap().value;
    let irradiance = part3.get("Irradiance at 1 m").unwrap().value;

    let four_pi = 4.0 * std::f64::consts::PI;
    assert_relative_eq!(intensity * four_pi, flux, max_relative = 1e-12);
    let sphere = four_pi * 1.0_f64.powi(2);
    assert_relative_eq!(irradiance * sphere, flux, max_relative = 1e-12);
}

#[test]
fn test_saved_report_matches_stdout_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("worksheet.txt");

    let report = Report::new(vec![run_part(5).unwrap(), run_part(9).unwrap()]);
    report.save(&path, OutputFormat::Text).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "Part 5:\nNew intensity at 0.65 m: 11.60 lux\n\
         Part 9:\nIrradiance (full sky): 3141.59 W/m²\nIrradiance (cone, 30°): 785.40 W/m²\n"
    );
}
