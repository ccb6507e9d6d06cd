use log::Level;

pub const LEADS_STORAGE_KEY: &str = "flameshard_leads";

pub const DEFAULT_INSTRUCTOR: &str = "The FlameShard Faculty";
pub const CERTIFICATE_FILE_PREFIX: &str = "FlameShard_Certificate";

// Enrollment window shown by the urgency banner.
pub const ENROLLMENT_CLOSES_AT: &str = "2026-12-31T23:59:59Z";
pub const COHORT_SEATS_TOTAL: u32 = 40;
pub const COHORT_SEATS_TAKEN: u32 = 31;

pub const TOAST_DURATION_MS: u32 = 4_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Mentor review buttons on the scroll page. There is no review backend, so
/// only local builds get them.
#[cfg(debug_assertions)]
pub fn review_tools_enabled() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn review_tools_enabled() -> bool {
    false
}
