//! # tzwindow
//!
//! DST-safe UTC query windows for local calendar days.
//!
//! Some platforms hand out "local time as epoch seconds": an integer equal
//! to the true UTC timestamp plus the zone's offset. Formatting such a value
//! as UTC, or using it for range queries against UTC-stored data, silently
//! skews every result by the offset. This crate keeps the two kinds of
//! integer apart at the type level ([`TrueInstant`] vs [`ShiftedInstant`])
//! and computes calendar-day boundaries with zone-aware arithmetic so that
//! 23- and 25-hour DST days come out right.
//!
//! ```rust
//! use tzwindow::{day_range_utc, parse_zone};
//!
//! // US spring-forward day: 23 hours long.
//! let zone = parse_zone("America/New_York").unwrap();
//! let window = day_range_utc(zone, Some("2024-03-10")).unwrap();
//!
//! assert_eq!(window.start_iso, "2024-03-10 05:00:00");
//! assert_eq!(window.end_iso, "2024-03-11 03:59:59");
//! ```

pub mod error;
pub mod format;
pub mod types;
pub mod window;

pub use error::{Result, TimeWindowError};
pub use types::{
    ClockReport, DayRange, DayRangeUtc, FormatBounds, ShiftedInstant, TrueInstant, WindowReport,
    ZoneOffset,
};
pub use window::{
    day_range, day_range_utc, format_utc, format_utc_with, local_today, now_shifted, now_true,
    offset_at, parse_zone, unshift,
};
