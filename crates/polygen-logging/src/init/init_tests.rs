#![allow(non_snake_case)]

use super::*;

// The global subscriber can be installed once per process, so both outcomes
// are checked in one test.
#[test]
fn init_logging___second_call___reports_already_initialized() {
    let first = init_logging(LogLevel::Warn);
    let second = init_logging(LogLevel::Debug);

    if first.is_ok() {
        assert!(ReloadHandle::global().is_initialized());
        assert_eq!(ReloadHandle::global().current_level(), LogLevel::Warn);
        ReloadHandle::global().reload_level(LogLevel::Error).unwrap();
        assert_eq!(ReloadHandle::global().current_level(), LogLevel::Error);
    }
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
}
