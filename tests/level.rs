//! Tests for level ordering and parsing.

use barelog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("trace".parse::<Level>().is_err());
    assert!("err".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_colors() {
    let escapes: Vec<_> = Level::all().iter().map(|l| l.color().ansi()).collect();
    assert_eq!(escapes, ["\x1b[36m", "\x1b[32m", "\x1b[33m", "\x1b[31m"]);
}
