use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rbs, setup_data_dir};
use std::path::Path;

fn data_dir(dir: &Path) -> String {
    dir.to_string_lossy().to_string()
}

#[test]
fn test_interactive_month_session() {
    let dir = setup_data_dir("cli_month");

    rbs()
        .env("HOME", &dir)
        .args(["--data-dir", data_dir(&dir).as_str()])
        .write_stdin("Chicago\nmonth\nMay\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Most common month: May"))
        .stdout(contains("Total travel time: 0:36:01"))
        .stdout(contains("Subscriber"))
        .stdout(contains("day_of_week"))
        .stdout(contains("This took").and(contains("seconds.")));
}

#[test]
fn test_washington_has_no_demographics() {
    let dir = setup_data_dir("cli_washington");

    rbs()
        .env("HOME", &dir)
        .args(["--data-dir", data_dir(&dir).as_str()])
        .write_stdin("washington\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Total travel time: 1:17:00"))
        .stdout(contains("No birth year information for this dataset."));
}

#[test]
fn test_closed_stdin_exits_zero() {
    let dir = setup_data_dir("cli_eof");

    rbs()
        .env("HOME", &dir)
        .args(["--data-dir", data_dir(&dir).as_str()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Enter a city name"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = setup_data_dir("cli_bad_config");
    let conf_dir = dir.join(".rbikeshare");
    std::fs::create_dir_all(&conf_dir).expect("create config dir");
    std::fs::write(conf_dir.join("rbikeshare.conf"), "page_size: 0\n").expect("write config");

    rbs()
        .env("HOME", &dir)
        .write_stdin("chicago\n")
        .assert()
        .failure()
        .stderr(contains("page_size"));
}

#[test]
fn test_config_file_page_size() {
    let dir = setup_data_dir("cli_config_page");
    let conf_dir = dir.join(".rbikeshare");
    std::fs::create_dir_all(&conf_dir).expect("create config dir");
    std::fs::write(
        conf_dir.join("rbikeshare.conf"),
        format!("data_dir: \"{}\"\npage_size: 2\ncolor: false\n", dir.display()),
    )
    .expect("write config");

    rbs()
        .env("HOME", &dir)
        .write_stdin("chicago\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to see 2 rows of trip data?"))
        .stdout(contains("2017-05-01 17:05:00"))
        .stdout(contains("2017-05-03 17:30:00").not());
}
