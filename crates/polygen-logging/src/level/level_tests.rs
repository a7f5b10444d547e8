#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn LogLevel___ordering___trace_is_most_verbose() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test]
fn LogLevel___default___is_info() {
    assert_eq!(LogLevel::default(), LogLevel::Info);
}

#[test_case("trace", LogLevel::Trace)]
#[test_case("DEBUG", LogLevel::Debug)]
#[test_case(" info ", LogLevel::Info)]
#[test_case("warning", LogLevel::Warn)]
#[test_case("error", LogLevel::Error)]
#[test_case("off", LogLevel::Off)]
fn LogLevel___from_str___accepts_names(input: &str, expected: LogLevel) {
    assert_eq!(input.parse::<LogLevel>().unwrap(), expected);
}

#[test]
fn LogLevel___from_str___rejects_unknown_name() {
    let err = "loud".parse::<LogLevel>().unwrap_err();

    assert_eq!(err, ParseLevelError("loud".into()));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn LogLevel___display___round_trips_through_from_str() {
    for level in LogLevel::ALL {
        assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
    }
}

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn LogLevel___to_filter___maps_to_tracing(level: LogLevel, expected: LevelFilter) {
    assert_eq!(level.to_filter(), expected);
}
