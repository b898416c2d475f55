//! Tests for display-zone resolution.

use chrono_tz::Tz;
use openslot_core::zones::{NamedZones, ZoneResolver, REFERENCE_ZONE};

#[test]
fn named_table_resolves_every_display_name() {
    let zones = NamedZones;
    assert_eq!(zones.resolve("Atlantic Standard Time"), Some(Tz::America__Halifax));
    assert_eq!(zones.resolve("Eastern Standard Time"), Some(Tz::America__New_York));
    assert_eq!(zones.resolve("Central Standard Time"), Some(Tz::America__Chicago));
    assert_eq!(zones.resolve("Mountain Standard Time"), Some(Tz::America__Denver));
    assert_eq!(zones.resolve("Pacific Standard Time"), Some(Tz::America__Los_Angeles));
    assert_eq!(zones.resolve("UTC"), Some(Tz::UTC));
}

#[test]
fn iana_identifiers_fall_through() {
    let zones = NamedZones;
    assert_eq!(zones.resolve("Europe/London"), Some(Tz::Europe__London));
    assert_eq!(zones.resolve("Asia/Tokyo"), Some(Tz::Asia__Tokyo));
}

#[test]
fn unknown_names_resolve_to_none() {
    let zones = NamedZones;
    assert_eq!(zones.resolve("Nowhere Standard Time"), None);
    assert_eq!(zones.resolve(""), None);
}

#[test]
fn reference_zone_is_halifax() {
    assert_eq!(REFERENCE_ZONE, Tz::America__Halifax);
}
