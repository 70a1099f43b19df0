//! Catalog lookup and unrotated outlines.

use insta::assert_snapshot;
use plotmark::defaults::{EMPTY_PATH, SYMBOL_COUNT};
use plotmark::{Symbol, UnknownSymbolError, generate, symbol_names};

#[test]
fn catalog_order_is_stable() {
    let names: Vec<_> = symbol_names().collect();
    assert_eq!(names.len(), SYMBOL_COUNT);
    assert_snapshot!(names[..13].join(" "), @"circle square diamond cross x triangle-up triangle-down triangle-left triangle-right triangle-ne triangle-se triangle-sw triangle-nw");
    assert_snapshot!(names[45..].join(" "), @"arrow-up arrow-down arrow-left arrow-right arrow-bar-up arrow-bar-down arrow-bar-left arrow-bar-right arrow arrow-wide");
}

#[test]
fn missing_angle_is_the_empty_marker() {
    for (code, name) in symbol_names().enumerate() {
        assert_eq!(generate(name, 12.0, None, None).unwrap(), EMPTY_PATH);
        assert_eq!(generate(code as u32, 12.0, None, Some(4.0)).unwrap(), EMPTY_PATH);
    }
}

#[test]
fn name_and_code_generate_the_same_path() {
    for (code, name) in symbol_names().enumerate() {
        assert_eq!(
            generate(name, 7.5, Some(21.0), Some(0.5)).unwrap(),
            generate(code as u32, 7.5, Some(21.0), Some(0.5)).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn every_outline_parses_back() {
    for name in symbol_names() {
        let text = generate(name, 10.0, Some(0.0), None).unwrap();
        let path: plotmark::Path = text.parse().unwrap();
        assert!(!path.is_empty(), "{name}");
        assert_eq!(path.to_string(), text, "{name} does not reserialize");
    }
}

#[test]
fn circle_at_rest() {
    assert_snapshot!(generate("circle", 10.0, Some(0.0), None).unwrap(), @"M10,0A10,10 0 1,1 0,-10A10,10 0 0,1 10,0Z");
}

#[test]
fn square_at_rest() {
    assert_snapshot!(generate(1u32, 5.0, Some(0.0), None).unwrap(), @"M5,5H-5V-5H5Z");
}

#[test]
fn arrows_at_rest() {
    assert_snapshot!(generate("arrow-right", 10.0, Some(0.0), None).unwrap(), @"M0,0L-20,-10V10Z");
    assert_snapshot!(generate("arrow-bar-up", 10.0, Some(0.0), None).unwrap(), @"M-10,0H10M0,0L-10,20H10Z");
    assert_snapshot!(generate("arrow-wide", 10.0, Some(0.0), None).unwrap(), @"M0,0L-14.14,14.14A20,20 0 0,1 14.14,14.14Z");
}

#[test]
fn flags_and_backoff() {
    let hash: Symbol = "hash".parse().unwrap();
    assert!(hash.flags().need_line() && hash.flags().no_fill() && !hash.flags().no_dot());

    let bowtie: Symbol = "bowtie".parse().unwrap();
    assert!(bowtie.flags().no_dot() && !bowtie.flags().need_line());

    assert_eq!(Symbol::from_code(49).unwrap().backoff(), Some(1.0));
    assert_eq!(Symbol::from_code(46).unwrap().backoff(), None);
    assert_eq!(Symbol::from_code(54).unwrap().descriptor().name, "arrow-wide");
}

#[test]
fn unknown_symbols_are_errors() {
    let err = generate("circle-open", 10.0, Some(0.0), None).unwrap_err();
    assert_snapshot!(err.ident, @"circle-open");
    assert!(err.help.is_some());

    let err = generate(100u32, 10.0, Some(0.0), None).unwrap_err();
    assert_snapshot!(err.help.unwrap_or_default(), @"codes 100+ and 200+ are open/dot variants; pass the base code 0");

    let err: UnknownSymbolError = generate(55u32, 10.0, None, None).unwrap_err();
    assert_snapshot!(err.to_string(), @"unknown marker symbol: 55");
    assert_snapshot!(err.help.unwrap_or_default(), @"symbol codes run from 0 to 54");
}
