//! Frame conversion and registry through the public API.

use skyselect::frame::{
    convert, galactic_to_icrs, icrs_to_galactic, resolve, CooSystem, FrameDescriptor, SkyCoord,
    FRAMES, GAL, ICRS, ICRSD,
};

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_round_trip_grid() {
    for lat in (-89..=89).step_by(7) {
        for lon in (0..360).step_by(13) {
            let start = SkyCoord::new(lon as f64, lat as f64);

            let back = galactic_to_icrs(icrs_to_galactic(start));
            let sep = start.separation_deg(back);
            assert!(sep < 1e-9, "ICRS round trip of {start:?} drifted {sep} deg");

            let back = icrs_to_galactic(galactic_to_icrs(start));
            let sep = start.separation_deg(back);
            assert!(sep < 1e-9, "GAL round trip of {start:?} drifted {sep} deg");
        }
    }
}

#[test]
fn test_results_stay_in_range() {
    for lat in (-90..=90).step_by(15) {
        for lon in (-180..540).step_by(45) {
            let c = icrs_to_galactic(SkyCoord::new(lon as f64, lat as f64));
            assert!((0.0..360.0).contains(&c.lon), "lon {} out of range", c.lon);
            assert!((-90.0..=90.0).contains(&c.lat), "lat {} out of range", c.lat);
        }
    }
}

#[test]
fn test_galactic_pole_is_fixed_point() {
    // North galactic pole in ICRS
    let ngp = SkyCoord::new(192.85948, 27.12825);

    let gal = icrs_to_galactic(ngp);
    assert_eq!(gal.lon, 0.0);
    assert!((gal.lat - 90.0).abs() < 1e-5);

    let again = icrs_to_galactic(galactic_to_icrs(SkyCoord::new(0.0, 90.0)));
    assert_eq!(again.lon, 0.0);
    assert!((again.lat - 90.0).abs() < 1e-9);
}

#[test]
fn test_convert_picks_direction() {
    let c = SkyCoord::new(83.63, 22.01);
    assert_eq!(convert(c, CooSystem::Icrs, CooSystem::Gal), icrs_to_galactic(c));
    assert_eq!(convert(c, CooSystem::Gal, CooSystem::Icrs), galactic_to_icrs(c));
    assert_eq!(convert(c, CooSystem::Gal, CooSystem::Gal), c);
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_resolve_table() {
    let cases: [(&str, Option<&FrameDescriptor>); 8] = [
        ("ICRS", Some(&ICRS)),
        ("j2000", Some(&ICRS)),
        ("ICRSd", Some(&ICRSD)),
        (" J2000D ", Some(&ICRSD)),
        ("galactic", Some(&GAL)),
        ("GAL", Some(&GAL)),
        ("fk5", None),
        ("", None),
    ];

    for (name, expected) in cases {
        assert_eq!(resolve(name, None), expected, "resolving {name:?}");
    }
}

#[test]
fn test_resolve_returns_static_descriptors() {
    let frame = resolve("icrs", None).unwrap();
    assert!(std::ptr::eq(frame, &ICRS));
    assert_eq!(frame.system, CooSystem::Icrs);
    assert_eq!(frame.to_string(), "ICRS");
}

#[test]
fn test_every_frame_resolves_to_itself() {
    for frame in FRAMES {
        assert_eq!(resolve(frame.label, None), Some(frame));
        let parsed: &FrameDescriptor = frame.label.parse().unwrap();
        assert!(std::ptr::eq(parsed, frame));
    }
}
