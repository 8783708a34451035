use std::num::NonZeroU32;

use log::Level;

/// Share of a section that has to be on screen before it animates in.
pub const SECTION_THRESHOLD: f64 = 0.1;

/// Metrics wait until half of the number is visible before counting.
pub const METRIC_THRESHOLD: f64 = 0.5;

pub const COUNT_UP_DURATION_MS: u32 = 1200;
pub const COUNT_UP_DURATION: NonZeroU32 = match NonZeroU32::new(COUNT_UP_DURATION_MS) {
    Some(duration) => duration,
    None => panic!("count-up duration must be positive"),
};

/// Scroll distance in px after which the header turns opaque.
pub const HEADER_SCROLL_OFFSET: f64 = 20.0;

// Entrance stagger between sibling items, in ms.
pub const CARD_STAGGER_MS: u32 = 150;
pub const LIST_STAGGER_MS: u32 = 100;
pub const METRIC_STAGGER_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
