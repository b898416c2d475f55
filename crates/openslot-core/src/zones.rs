//! Display-zone lookup.
//!
//! Availability is computed in the reference zone and presented in whichever
//! zone the recipient reads. The named table mirrors what the presentation
//! layer offers; unknown names fall through to IANA identifiers so new zones
//! work without touching core logic.

use chrono_tz::Tz;

/// The fixed scheduling timezone all interval math is anchored to.
pub const REFERENCE_ZONE: Tz = Tz::America__Halifax;

/// Maps a display name to a timezone rule provider.
pub trait ZoneResolver {
    fn resolve(&self, name: &str) -> Option<Tz>;
}

/// The built-in display-name table, with IANA fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedZones;

impl ZoneResolver for NamedZones {
    fn resolve(&self, name: &str) -> Option<Tz> {
        match name {
            "Atlantic Standard Time" => Some(Tz::America__Halifax),
            "Eastern Standard Time" => Some(Tz::America__New_York),
            "Central Standard Time" => Some(Tz::America__Chicago),
            "Mountain Standard Time" => Some(Tz::America__Denver),
            "Pacific Standard Time" => Some(Tz::America__Los_Angeles),
            "UTC" => Some(Tz::UTC),
            other => other.parse().ok(),
        }
    }
}
