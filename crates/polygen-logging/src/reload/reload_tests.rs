#![allow(non_snake_case)]

use super::*;
use tracing_subscriber::prelude::*;

#[test]
fn ReloadHandle___new___is_not_initialized() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_initialized());
    assert_eq!(handle.current_level(), LogLevel::Info);
}

#[test]
fn ReloadHandle___reload_before_init___fails() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert!(matches!(result, Err(LoggingError::NotInitialized)));
}

#[test]
fn ReloadHandle___reload_after_set___updates_level() {
    let (layer, filter_handle) = reload::Layer::new(LevelFilter::INFO);
    let subscriber = tracing_subscriber::registry().with(layer);
    let handle = ReloadHandle::new();
    handle.set_handle(filter_handle, LogLevel::Info);

    tracing::subscriber::with_default(subscriber, || {
        handle.reload_level(LogLevel::Warn).unwrap();
    });

    assert!(handle.is_initialized());
    assert_eq!(handle.current_level(), LogLevel::Warn);
}

#[test]
fn ReloadHandle___global___returns_same_instance() {
    let a = ReloadHandle::global() as *const ReloadHandle;
    let b = ReloadHandle::global() as *const ReloadHandle;

    assert_eq!(a, b);
}
