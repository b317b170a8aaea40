//! Integration tests for loading and saving the state record.

mod common;

use std::fs;

use satellite_sim::error::SatelliteError;
use satellite_sim::state::{PanelStatus, SatelliteState, StateStore};

#[test]
fn well_formed_record_is_loaded_verbatim() {
    let dir = common::workspace();
    fs::write(common::state_path(&dir), "East\nActive\n70\n").expect("seed");

    let sat = common::open_satellite(&dir);
    assert_eq!(sat.state().orientation.as_str(), "East");
    assert_eq!(sat.state().solar_panels, PanelStatus::Active);
    assert_eq!(sat.state().data_collected, 70);
}

#[test]
fn missing_record_yields_defaults() {
    let dir = common::workspace();
    let sat = common::open_satellite(&dir);
    assert_eq!(sat.state(), &SatelliteState::default());
}

#[test]
fn wrong_line_counts_yield_defaults() {
    for raw in ["", "West", "West\nActive", "West\nActive\n10\n20"] {
        let dir = common::workspace();
        fs::write(common::state_path(&dir), raw).expect("seed");
        let sat = common::open_satellite(&dir);
        assert_eq!(
            sat.state(),
            &SatelliteState::default(),
            "record {raw:?} should fall back to defaults"
        );
    }
}

#[test]
fn corrupted_fields_yield_defaults() {
    for raw in ["West\nActive\nmany", "West\nMaybe\n10", "West\nActive\n-5"] {
        let dir = common::workspace();
        fs::write(common::state_path(&dir), raw).expect("seed");
        let sat = common::open_satellite(&dir);
        assert_eq!(
            sat.state(),
            &SatelliteState::default(),
            "record {raw:?} should fall back to defaults"
        );
    }
}

#[test]
fn every_mutation_round_trips_through_the_file() {
    let dir = common::workspace();
    let mut sat = common::open_satellite(&dir);
    let store = StateStore::new(common::state_path(&dir));

    sat.rotate("South").expect("rotate");
    assert_eq!(store.load().ok().as_ref(), Some(sat.state()));

    sat.activate_panels().expect("activate");
    assert_eq!(store.load().ok().as_ref(), Some(sat.state()));

    sat.collect_data().expect("collect");
    assert_eq!(store.load().ok().as_ref(), Some(sat.state()));

    sat.deactivate_panels().expect("deactivate");
    assert_eq!(store.load().ok().as_ref(), Some(sat.state()));
}

#[test]
fn collecting_n_times_yields_ten_n() {
    let dir = common::workspace();
    let mut sat = common::open_satellite(&dir);
    sat.activate_panels().expect("activate");

    let n = 7;
    for _ in 0..n {
        sat.collect_data().expect("collect");
    }
    assert_eq!(sat.state().data_collected, 10 * n);
    assert_eq!(common::read(&common::state_path(&dir)), "North\nActive\n70");
}

#[test]
fn inactive_collect_leaves_persisted_count_alone() {
    let dir = common::workspace();
    fs::write(common::state_path(&dir), "North\nInactive\n30").expect("seed");

    let mut sat = common::open_satellite(&dir);
    sat.collect_data().expect("collect");

    assert_eq!(sat.state().data_collected, 30);
    assert_eq!(common::read(&common::state_path(&dir)), "North\nInactive\n30");
}

#[test]
fn rotated_orientation_survives_a_restart() {
    let dir = common::workspace();
    {
        let mut sat = common::open_satellite(&dir);
        sat.rotate("north-northwest").expect("rotate");
    }
    let sat = common::open_satellite(&dir);
    assert_eq!(sat.state().orientation.as_str(), "north-northwest");
}

#[test]
fn state_accumulates_across_sessions() {
    let dir = common::workspace();
    {
        let mut sat = common::open_satellite(&dir);
        sat.activate_panels().expect("activate");
        sat.collect_data().expect("collect");
    }
    let mut sat = common::open_satellite(&dir);
    sat.collect_data().expect("collect");
    assert_eq!(sat.state().data_collected, 20);
    // A new session starts with an empty transcript.
    assert_eq!(sat.transcript().len(), 1);
}

#[test]
fn padded_orientation_is_refused_so_reload_matches_memory() {
    let dir = common::workspace();
    let mut sat = common::open_satellite(&dir);

    for padded in [" East", "East ", "\tEast"] {
        let err = sat.rotate(padded).expect_err("padded text must be refused");
        assert!(matches!(err, SatelliteError::InvalidOrientation(_)));
    }
    assert_eq!(sat.state().orientation.as_str(), "North");

    sat.rotate("East").expect("rotate");
    let reloaded = StateStore::new(common::state_path(&dir))
        .load()
        .expect("reload");
    assert_eq!(&reloaded, sat.state());
}
