mod common;
use chrono::Weekday;
use rbikeshare::data;
use rbikeshare::errors::AppError;
use rbikeshare::models::{City, Column};

#[test]
fn test_load_derives_calendar_fields() {
    let table = common::chicago();
    assert_eq!(table.len(), 6);

    let first = &table.records()[0];
    assert_eq!(first.row, 0);
    assert_eq!(first.month(), 5);
    assert_eq!(first.weekday(), Weekday::Mon);
    assert_eq!(first.hour(), 8);
    assert_eq!(first.start_station.as_deref(), Some("A St"));
    assert_eq!(first.birth_year, Some(1985));
    assert!(first.end_time.is_some());

    let sat = &table.records()[4];
    assert_eq!(sat.month(), 1);
    assert_eq!(sat.weekday(), Weekday::Sat);
    assert_eq!(sat.hour(), 17);
}

#[test]
fn test_blank_optional_cells_become_none() {
    let table = common::chicago();
    let customer = &table.records()[2];
    assert_eq!(customer.user_type.as_deref(), Some("Customer"));
    assert_eq!(customer.gender, None);
    assert_eq!(customer.birth_year, None);
}

#[test]
fn test_schema_variance_is_not_an_error() {
    let table = common::washington();
    assert_eq!(table.len(), 3);
    assert!(table.has_column(Column::UserType));
    assert!(!table.has_column(Column::Gender));
    assert!(!table.has_column(Column::BirthYear));
    assert_eq!(table.records()[0].duration_secs, Some(900.5));
}

#[test]
fn test_missing_required_column_fails() {
    let csv = "Start Time,Trip Duration,Start Station\n2017-01-01 00:00:00,10,A\n";
    let err = data::load_from_reader(csv.as_bytes(), "broken.csv").unwrap_err();
    match err {
        AppError::DataSource { path, reason } => {
            assert_eq!(path, "broken.csv");
            assert!(reason.contains("End Station"), "reason was: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_bad_timestamp_fails_whole_load() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,10,A,B,Subscriber
not a date,10,A,B,Subscriber
";
    let err = data::load_from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(matches!(err, AppError::DataSource { .. }));
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_bad_duration_fails() {
    let csv = "Start Time,Trip Duration,Start Station,End Station\n2017-01-01 00:00:00,abc,A,B\n";
    let err = data::load_from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(err.to_string().contains("Trip Duration"));
}

#[test]
fn test_blank_station_and_duration_cells_load_as_none() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station
2017-01-01 00:00:00,10,A,B
2017-01-01 01:00:00,20,A,
2017-01-01 02:00:00,,,C
";
    let table = data::load_from_reader(csv.as_bytes(), "gaps.csv").expect("load");
    assert_eq!(table.len(), 3);

    let no_end = &table.records()[1];
    assert_eq!(no_end.end_station, None);
    assert_eq!(no_end.route(), None);

    let no_start = &table.records()[2];
    assert_eq!(no_start.duration_secs, None);
    assert_eq!(no_start.start_station, None);
    assert_eq!(no_start.end_station.as_deref(), Some("C"));
}

#[test]
fn test_blank_start_time_fails() {
    let csv = "Start Time,Trip Duration,Start Station,End Station\n,10,A,B\n";
    let err = data::load_from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(err.to_string().contains("Start Time"));
}

#[test]
fn test_out_of_range_birth_year_fails() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,Birth Year
2017-01-01 00:00:00,10,A,B,1e12
";
    let err = data::load_from_reader(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(err.to_string().contains("Birth Year"), "error was: {err}");
}

#[test]
fn test_float_birth_year_is_accepted() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,Birth Year
2017-01-01 00:00:00,10,A,B,1989.0
";
    let table = data::load_from_reader(csv.as_bytes(), "years.csv").expect("load");
    assert_eq!(table.records()[0].birth_year, Some(1989));
}

#[test]
fn test_alternate_timestamp_formats() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station
2017-02-03T04:05:06,10,A,B
02/03/2017 04:05,10,A,B
2017-02-03 04:05:06.250,10,A,B
";
    let table = data::load_from_reader(csv.as_bytes(), "formats.csv").expect("load");
    assert_eq!(table.len(), 3);
    for trip in table.records() {
        assert_eq!(trip.month(), 2);
        assert_eq!(trip.hour(), 4);
        assert_eq!(trip.weekday(), Weekday::Fri);
    }
    // no User Type column: loads fine, the user report will be skipped
    assert!(!table.has_column(Column::UserType));
}

#[test]
fn test_load_missing_file_is_data_source_error() {
    let dir = common::setup_data_dir("loader_missing_file");
    let err = data::load(City::NewYork, &dir).unwrap_err();
    match err {
        AppError::DataSource { path, .. } => assert!(path.ends_with("new_york_city.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_from_data_dir() {
    let dir = common::setup_data_dir("loader_from_dir");
    let table = data::load(City::Washington, &dir).expect("load washington");
    assert_eq!(table.len(), 3);
}
