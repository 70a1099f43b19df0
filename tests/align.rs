//! Orientation of generated and hand-written paths.

use glam::DVec2;
use insta::assert_snapshot;
use plotmark::{AlignOptions, Aligner, CacheStats, ParseError, Path, generate, transform};

#[test]
fn square_turns_a_quarter() {
    assert_snapshot!(transform("M5,5H-5V-5H5Z", Some(90.0), None).unwrap(), @"M-5,5L-5,-5L5,-5L5,5Z");
}

#[test]
fn square_turns_an_eighth() {
    assert_snapshot!(transform("M5,5H-5V-5H5Z", Some(45.0), None).unwrap(), @"M0,7.07L-7.07,0L0,-7.07L7.07,0Z");
}

#[test]
fn diamond_with_standoff() {
    assert_snapshot!(
        generate("diamond", 10.0, Some(45.0), Some(2.0)).unwrap(),
        @"M7.78,10.61L-10.61,10.61L-10.61,-7.78L7.78,-7.78Z"
    );
}

#[test]
fn triangle_flipped_and_pushed_out() {
    assert_snapshot!(
        generate("triangle-up", 10.0, Some(180.0), Some(3.0)).unwrap(),
        @"M11.55,-8L-11.55,-8L0,7Z"
    );
}

#[test]
fn arrowhead_tip_moves_with_standoff() {
    // The tip sits on the anchor until the standoff pushes it away
    assert_snapshot!(generate("arrow-up", 10.0, Some(90.0), Some(5.0)).unwrap(), @"M-5,0L-25,-10L-25,10Z");
    assert_snapshot!(
        generate("arrow", 10.0, Some(45.0), Some(10.0)).unwrap(),
        @"M-7.07,7.07L-24.89,16.15L-16.15,24.89Z"
    );
}

#[test]
fn circle_arcs_keep_radii_and_gain_rotation() {
    assert_snapshot!(
        generate("circle", 10.0, Some(30.0), Some(4.0)).unwrap(),
        @"M6.66,8.46A10,10,30,1,1,3,-5.2A10,10,30,0,1,6.66,8.46Z"
    );
}

#[test]
fn star_square_turned_back() {
    assert_snapshot!(
        generate("star-square", 10.0, Some(-90.0), None).unwrap(),
        @"M-11,11A20,20,-90,0,1,11,11A20,20,-90,0,1,11,-11A20,20,-90,0,1,-11,-11A20,20,-90,0,1,-11,11Z"
    );
}

#[test]
fn hexagram_relative_moves_are_rotated() {
    assert_snapshot!(
        generate("hexagram", 10.0, Some(90.0), None).unwrap(),
        @"M0,-7.6l6.6,-3.8l0,7.6l6.6,3.8l-6.6,3.8l0,7.6l-6.6,-3.8l-6.6,3.8l0,-7.6l-6.6,-3.8l6.6,-3.8l0,-7.6Z"
    );
}

#[test]
fn hash_strokes_stay_open() {
    assert_snapshot!(
        generate("hash", 10.0, Some(30.0), None).unwrap(),
        @"M-0.67,11.16L9.33,-6.16M0.67,-11.16L-9.33,6.16M6.16,9.33L-11.16,-0.67M-6.16,-9.33L11.16,0.67"
    );
}

#[test]
fn leading_relative_move_is_pushed_out() {
    assert_snapshot!(transform("m1,1l1,0", Some(90.0), Some(2.0)).unwrap(), @"m-3,1l0,1");
    assert_snapshot!(transform("m0,5", None, Some(3.0)).unwrap(), @"m0,8");
}

#[test]
fn relative_arc_turns_with_the_shape() {
    assert_snapshot!(
        transform("M10,0a10,10 0 0,1 -10,-10", Some(90.0), None).unwrap(),
        @"M0,10a10,10,90,0,1,10,-10"
    );
}

#[test]
fn rotated_output_has_no_axis_commands() {
    let mut aligner = Aligner::new();
    for name in plotmark::symbol_names() {
        let out = aligner.generate(name, 10.0, Some(33.0), Some(1.0)).unwrap();
        let path: Path = out.parse().unwrap();
        assert!(
            !path.iter().any(|c| c.is_axis_aligned()),
            "{name} kept an axis command: {out}"
        );
    }
}

#[test]
fn full_turns_are_identity() {
    let mut aligner = Aligner::new();
    for name in plotmark::symbol_names() {
        let base = aligner.generate(name, 8.0, Some(0.0), None).unwrap();
        for angle in [360.0, -360.0, 720.0, -720.0] {
            assert_eq!(aligner.generate(name, 8.0, Some(angle), None).unwrap(), base, "{name} at {angle}");
        }
    }
    assert_eq!(aligner.cache_stats(), CacheStats::default());
}

#[test]
fn turning_is_periodic() {
    let mut aligner = Aligner::uncached();
    for name in ["square", "star", "arrow-wide", "y-left"] {
        let once = aligner.generate(name, 10.0, Some(37.0), Some(2.0)).unwrap();
        let again = aligner.generate(name, 10.0, Some(37.0 + 360.0), Some(2.0)).unwrap();
        // Periodic up to the arc axis rotation, which is carried unreduced
        let operands = |s: &str| {
            let path: Path = s.parse().unwrap();
            path.iter().map(|c| c.endpoint(DVec2::ZERO)).collect::<Vec<_>>()
        };
        assert_eq!(operands(&once), operands(&again), "{name}");
    }
}

#[test]
fn repeated_generation_is_served_from_cache() {
    let mut aligner = Aligner::new();
    for _ in 0..5 {
        aligner.generate("star", 6.0, Some(12.0), Some(1.0)).unwrap();
    }
    assert_eq!(aligner.cache_stats(), CacheStats { hits: 4, misses: 1 });

    aligner.clear_cache();
    aligner.generate("star", 6.0, Some(12.0), Some(1.0)).unwrap();
    assert_eq!(aligner.cache_stats(), CacheStats { hits: 0, misses: 1 });
}

#[test]
fn precision_is_configurable() {
    let mut aligner = Aligner::with_options(AlignOptions::default().with_digits(4));
    assert_snapshot!(aligner.transform("M10,0", Some(30.0), None).unwrap(), @"M8.6603,5");
}

#[test]
fn transform_reports_bad_path_text() {
    let err = transform("M0,0Q1,1 2,2", Some(10.0), None).unwrap_err();
    assert!(matches!(err, ParseError::UnknownCommand { letter: 'Q', .. }));

    let err = transform("M0,0L1", Some(10.0), None).unwrap_err();
    assert!(matches!(err, ParseError::Arity { letter: 'L', expected: 2, found: 1, .. }));
}
