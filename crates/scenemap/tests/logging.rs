//! Tests for logging functionality

use scenemap::core::logging::{init_logging, LogFormat};
use scenemap::prelude::*;
use std::str::FromStr;
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call can install the global subscriber; none may panic
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("off"), Some("pretty"));
    let _ = init_logging(None, Some("json"));
}

#[test]
fn test_extraction_with_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let reader = MemoryReader::new().with_file("/game/p.gd", "var Health = 1\nfunc Attack():");
    let parser = SceneParser::new(reader, "/game");
    let scene = "[ext_resource path=\"res://p.gd\" type=\"Script\" id=1]\n[ext_resource path=\"res://missing.gd\" type=\"Script\" id=2]";

    let extraction = parser.parse("Player", scene);
    assert_eq!(extraction.record.member_count(), 2);
    assert_eq!(extraction.unreadable_scripts, 1);
}
