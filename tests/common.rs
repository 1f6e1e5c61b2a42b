#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbikeshare::config::Config;
use rbikeshare::data;
use rbikeshare::models::TripTable;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-05-01 08:10:00,2017-05-01 08:20:00,600,A St,B St,Subscriber,Male,1985.0
1,2017-05-01 17:05:00,2017-05-01 17:10:00,300,B St,C St,Subscriber,Female,1990.0
2,2017-05-03 17:30:00,2017-05-03 17:50:00,1200,A St,B St,Customer,,
3,2017-06-02 09:00:00,2017-06-02 09:07:30,450,C St,A St,Subscriber,Male,1985.0
4,2017-01-07 17:45:00,2017-01-08 17:45:00,86400,A St,C St,Subscriber,Male,1970.0
5,2017-05-06 12:00:00,2017-05-06 12:01:01,61,D St,B St,Customer,Female,2001.0
";

/// No Gender / Birth Year columns, like the real Washington export.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-14 07:15:00,2017-03-14 07:30:00,900.5,X Ave,Y Ave,Subscriber
1,2017-03-15 07:40:00,2017-03-15 07:42:00,120,Y Ave,X Ave,Customer
2,2017-04-18 07:05:00,2017-04-18 08:05:00,3600,X Ave,Y Ave,Subscriber
";

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbikeshare")
}

/// Create a fresh data directory with chicago.csv and washington.csv.
/// new_york_city.csv is intentionally absent.
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("rbikeshare_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_string_lossy().to_string(),
        color: false,
        ..Config::default()
    }
}

pub fn chicago() -> TripTable {
    data::load_from_reader(CHICAGO_CSV.as_bytes(), "chicago.csv").expect("parse chicago fixture")
}

pub fn washington() -> TripTable {
    data::load_from_reader(WASHINGTON_CSV.as_bytes(), "washington.csv")
        .expect("parse washington fixture")
}
