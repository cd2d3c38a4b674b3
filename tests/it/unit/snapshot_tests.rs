//! Snapshot tests using the insta crate.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use skyselect::frame::{SkyCoord, FRAMES};
use skyselect::input::PixelRect;
use skyselect::selection::SelectionResult;
use skyselect::settings::SelectSettings;

#[test]
fn snapshot_selection_result() {
    let selection = SelectionResult::from_rect(PixelRect { x: 50.0, y: 40.0, w: -40.0, h: -30.0 });
    insta::assert_json_snapshot!(selection, @r###"
    {
      "x": 10.0,
      "y": 10.0,
      "w": 40.0,
      "h": 30.0,
      "label": "rect"
    }
    "###);
}

#[test]
fn snapshot_frame_registry() {
    insta::assert_json_snapshot!(FRAMES, @r###"
    [
      {
        "label": "ICRS",
        "system": "ICRS",
        "explain": "International Celestial Reference System"
      },
      {
        "label": "ICRSd",
        "system": "ICRS",
        "explain": "International Celestial Reference System in decimals"
      },
      {
        "label": "GAL",
        "system": "GAL",
        "explain": "Galactic"
      }
    ]
    "###);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(SelectSettings::default(), @r###"
    {
      "color": "#00ff00",
      "line_width": 2.0,
      "default_frame": "ICRS"
    }
    "###);
}

#[test]
fn snapshot_sky_coord() {
    insta::assert_json_snapshot!(SkyCoord::new(266.5, -29.0), @r###"
    {
      "lon": 266.5,
      "lat": -29.0
    }
    "###);
}
