//! Key projection for every entity type.

use gridloom_foundation::Keyed;
use gridloom_model::{
    Agent, AvailableYear, LevelName, PresetSector, Region, Sector, StandardSector, Timeslice,
};

#[test]
fn region_key_is_its_name() {
    assert_eq!(Region::new("R1").key(), "R1");
}

#[test]
fn sector_key_is_the_name_of_either_variant() {
    assert_eq!(Sector::Standard(StandardSector::new("power")).key(), "power");
    assert_eq!(Sector::Preset(PresetSector::new("presets")).key(), "presets");
}

#[test]
fn level_name_key_is_the_level() {
    assert_eq!(LevelName::new("Season").key(), "Season");
}

#[test]
fn available_year_key_is_the_decimal_rendering() {
    assert_eq!(AvailableYear::new(2020).key(), "2020");
    assert_eq!(AvailableYear::new(1995).key(), "1995");
}

#[test]
fn timeslice_key_is_the_dotted_name() {
    let slice = Timeslice::new("winter.morning", 120.0);
    assert_eq!(slice.key(), "winter.morning");
    assert_eq!(slice.segments(), vec!["winter", "morning"]);
}

#[test]
fn agent_key_is_its_name() {
    assert_eq!(Agent::new("A1").key(), "A1");
}
