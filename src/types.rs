//! Core types for tzwindow

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed seconds a timezone differs from UTC at a specific instant.
/// Varies across DST transitions, so it is always derived from an instant
/// and never cached per zone.
pub type ZoneOffset = i32;

/// A real point in time: seconds since the UTC epoch.
///
/// This is the only instant type that may be formatted as UTC or handed to
/// an external query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrueInstant(i64);

impl TrueInstant {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn secs(self) -> i64 {
        self.0
    }

    /// Apply a zone offset, producing the display-biased value that platform
    /// convenience clocks hand out. The result is not a point in time.
    pub fn shift(self, offset: ZoneOffset) -> ShiftedInstant {
        ShiftedInstant(self.0 + offset as i64)
    }
}

impl fmt::Display for TrueInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer that looks like an epoch timestamp but has been biased by a
/// timezone's UTC offset. Produced by platform functions that fake "local
/// time as epoch seconds"; it must be un-shifted before it can be compared
/// or formatted as UTC, and it must never be persisted.
///
/// Deliberately not interconvertible with [`TrueInstant`]: recovering the
/// real instant goes through [`crate::window::unshift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftedInstant(i64);

impl ShiftedInstant {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn secs(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ShiftedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The start and end of a calendar day in some timezone, as true UTC
/// instants (local 00:00:00 and 23:59:59).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayRange {
    pub start: TrueInstant,
    pub end: TrueInstant,
}

impl DayRange {
    pub fn contains(&self, instant: TrueInstant) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Inclusive width of the range in seconds. 86399 on a plain day,
    /// 82799 or 89999 on days containing a one-hour DST transition.
    pub fn span_secs(&self) -> i64 {
        self.end.secs() - self.start.secs()
    }
}

/// A day range with both boundaries rendered as UTC strings, ready to hand
/// to whatever query layer stores UTC timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct DayRangeUtc {
    pub start: TrueInstant,
    pub end: TrueInstant,
    pub start_iso: String,
    pub end_iso: String,
}

/// Sane-range guard for UTC formatting: instants outside `[min, max]` are
/// rejected rather than rendered, since out-of-range values here have
/// historically meant a shifted instant leaked through unconverted.
#[derive(Debug, Clone, Copy)]
pub struct FormatBounds {
    pub min: TrueInstant,
    pub max: TrueInstant,
}

impl Default for FormatBounds {
    /// Epoch zero up to 100 years past the current instant.
    fn default() -> Self {
        Self {
            min: TrueInstant::from_secs(0),
            max: TrueInstant::from_secs(Utc::now().timestamp() + 100 * 365 * 86_400),
        }
    }
}

/// A computed query window together with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct WindowReport {
    /// IANA zone identifier the window was computed for
    pub zone: String,
    /// Local calendar day the window covers
    pub date: String,
    #[serde(flatten)]
    pub window: DayRangeUtc,
    /// Inclusive width of the window in seconds
    pub span_secs: i64,
}

/// A current clock reading for a zone: the true instant, the display-biased
/// shifted value, and the offset relating them.
#[derive(Debug, Clone, Serialize)]
pub struct ClockReport {
    /// IANA zone identifier the reading was taken for
    pub zone: String,
    pub true_secs: i64,
    pub shifted_secs: i64,
    pub offset_secs: ZoneOffset,
    /// The true instant rendered as a UTC string
    pub true_iso: String,
}

/// CLI output format
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
