use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Runs pinmap with `--no-open --output <tmp>/map.html` and returns the page.
fn render_via_cli(args: &[&str], stdin: &str) -> String {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("map.html");

    cmd()
        .args(args)
        .arg("--output")
        .arg(output.path())
        .arg("--no-open")
        .write_stdin(stdin)
        .assert()
        .success();

    std::fs::read_to_string(output.path()).unwrap()
}

#[test]
fn single_tab_record_with_title() {
    let page = render_via_cli(&["--title", "Trip"], "10\t20\tHome");

    assert!(page.contains("<title>Trip</title>"));
    assert!(page.contains(r#"L.marker([10, 20], {}).bindPopup("Home").addTo(map);"#));
}

#[test]
fn default_title_is_world_map() {
    let page = render_via_cli(&[], "1\t2\tx\n");

    assert!(page.contains("<title>World Map</title>"));
}

#[test]
fn comma_decimals_with_comma_separator_are_dropped() {
    let page = render_via_cli(&["--separator", "comma"], "10,5,20,3,Home\n");

    assert!(!page.contains("L.marker("));
}

#[test]
fn comma_separated_records() {
    let page = render_via_cli(
        &["-s", "comma"],
        "48.8566,2.3522,Paris\n51.5074,-0.1278,London\n",
    );

    let paris = page
        .find(r#"L.marker([48.8566, 2.3522], {}).bindPopup("Paris")"#)
        .unwrap();
    let london = page
        .find(r#"L.marker([51.5074, -0.1278], {}).bindPopup("London")"#)
        .unwrap();
    assert!(paris < london);
}

#[test]
fn short_lines_are_skipped_without_error() {
    let page = render_via_cli(&[], "10\t20\tHome\n30\t40\n50\t60\tWork\n");

    assert_eq!(page.matches("L.marker(").count(), 2);
    assert!(page.contains(r#"L.marker([10, 20], {}).bindPopup("Home")"#));
    assert!(page.contains(r#"L.marker([50, 60], {}).bindPopup("Work")"#));
}

#[test]
fn unparsable_coordinates_become_zero() {
    let page = render_via_cli(&[], "north\t2,5\tSomewhere\n");

    assert!(page.contains(r#"L.marker([0, 2.5], {}).bindPopup("Somewhere")"#));
}

#[test]
fn label_with_quotes_and_brackets_is_escaped() {
    let page = render_via_cli(&[], "1\t2\tO'Brien's <spot>\n");

    assert!(!page.contains("<spot>"));
    assert!(page.contains(r#".bindPopup("O&#39;Brien&#39;s &lt;spot&gt;")"#));
}

#[test]
fn reads_records_from_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("points.tsv");
    input.write_str("-33,8688\t151,2093\tSydney\n").unwrap();
    let output = temp.child("map.html");

    cmd()
        .arg("--file")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .arg("--no-open")
        .assert()
        .success()
        .stdout(predicate::str::contains("map.html"));

    output.assert(predicate::str::contains(
        r#"L.marker([-33.8688, 151.2093], {}).bindPopup("Sydney")"#,
    ));
}

#[test]
fn default_output_is_a_kept_temp_file() {
    let temp = assert_fs::TempDir::new().unwrap();

    let assert = cmd()
        .arg("--no-open")
        .env("TMPDIR", temp.path())
        .env("TMP", temp.path())
        .env("TEMP", temp.path())
        .write_stdin("10\t20\tHome\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let path = PathBuf::from(stdout.trim_end());
    let name = path.file_name().unwrap().to_string_lossy().into_owned();

    assert!(name.starts_with("map-"));
    assert!(name.ends_with(".html"));
    assert!(path.starts_with(temp.path()));

    let page = std::fs::read_to_string(&path).unwrap();
    assert!(page.contains(r#"bindPopup("Home")"#));
}

#[test]
fn non_finite_coordinates_do_not_hide_later_markers() {
    let page = render_via_cli(&[], "nan\t1\tA\n2\tinf\tB\n3\t4\tC\n");

    assert!(!page.contains("NaN"));
    assert!(page.contains(r#"L.marker([0, 1], {}).bindPopup("A")"#));
    assert!(page.contains(r#"L.marker([2, 0], {}).bindPopup("B")"#));
    assert!(page.contains(r#"L.marker([3, 4], {}).bindPopup("C")"#));
}
