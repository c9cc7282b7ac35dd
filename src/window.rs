//! Conversions between true UTC instants, zone-shifted instants, and UTC
//! query boundaries for local calendar days.
//!
//! Day boundaries are computed with zone-aware calendar arithmetic: local
//! midnight and the next local midnight are each converted to UTC on their
//! own, never by adding a fixed offset to a shifted value. Days containing a
//! DST transition therefore come out 23 or 25 hours long, as they should.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TimeWindowError};
use crate::types::{DayRange, DayRangeUtc, FormatBounds, ShiftedInstant, TrueInstant, ZoneOffset};

/// Current true UTC instant.
pub fn now_true() -> TrueInstant {
    TrueInstant::from_secs(Utc::now().timestamp())
}

/// Current instant biased by the zone's offset, mimicking platform clocks
/// that return "local time as if it were epoch seconds". The result is for
/// display comparisons only; formatting it as UTC without [`unshift`] is the
/// bug this crate exists to prevent.
pub fn now_shifted(zone: Tz) -> ShiftedInstant {
    let now = now_true();
    now.shift(offset_at(now, zone))
}

/// The zone's UTC offset in effect at `instant`. The offset is a function of
/// the instant, not of the zone alone: New York answers -18000 in January
/// and -14400 in July.
pub fn offset_at(instant: TrueInstant, zone: Tz) -> ZoneOffset {
    use chrono::Offset;

    // Saturate to chrono's representable range (about +/-262,000 years) so
    // the lookup stays total even for absurd caller-supplied integers.
    let utc = DateTime::from_timestamp(instant.secs(), 0).unwrap_or(if instant.secs() < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    utc.with_timezone(&zone).offset().fix().local_minus_utc()
}

/// Recover the true instant underlying a shifted one.
///
/// The offset is computed at the shifted value itself, matching the
/// convention of the platform function that produced the shift, so the pair
/// stays a consistent inverse. Within a DST transition window the result can
/// differ from the exact instant by the transition delta; day boundaries are
/// therefore never derived this way (see [`day_range`]).
pub fn unshift(shifted: ShiftedInstant, zone: Tz) -> TrueInstant {
    let offset = offset_at(TrueInstant::from_secs(shifted.secs()), zone);
    TrueInstant::from_secs(shifted.secs() - offset as i64)
}

/// Resolve an IANA timezone identifier. A bad identifier is a configuration
/// problem; resolve once at startup and pass the typed zone around.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| TimeWindowError::UnknownZone(name.to_string()))
}

/// Render a true instant as a `YYYY-MM-DD HH:MM:SS` UTC string, guarded by
/// the default bounds (epoch zero to 100 years from now).
pub fn format_utc(instant: TrueInstant) -> Result<String> {
    format_utc_with(instant, FormatBounds::default())
}

/// Like [`format_utc`] with caller-supplied bounds.
pub fn format_utc_with(instant: TrueInstant, bounds: FormatBounds) -> Result<String> {
    if instant < bounds.min || instant > bounds.max {
        return Err(TimeWindowError::InstantOutOfRange {
            instant: instant.secs(),
            min: bounds.min.secs(),
            max: bounds.max.secs(),
        });
    }

    // Caller-supplied bounds can be wider than what chrono can represent.
    let utc = DateTime::from_timestamp(instant.secs(), 0).ok_or(
        TimeWindowError::InstantOutOfRange {
            instant: instant.secs(),
            min: bounds.min.secs(),
            max: bounds.max.secs(),
        },
    )?;
    Ok(utc.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Current calendar date in the zone.
pub fn local_today(zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&zone).date_naive()
}

/// UTC boundaries of a local calendar day: `00:00:00` through `23:59:59` in
/// `zone`. With no `date`, the current date in `zone` is used; otherwise
/// `date` must be `YYYY-MM-DD`.
pub fn day_range(zone: Tz, date: Option<&str>) -> Result<DayRange> {
    let day = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TimeWindowError::InvalidDate(s.to_string()))?,
        None => local_today(zone),
    };

    let start = first_existing_local(zone, day.into())?;
    let next = first_existing_local(zone, (day + Duration::days(1)).into())?;

    // Zones can skip a whole calendar day (Pacific/Apia dropped 2011-12-30);
    // both midnights then resolve to the same instant.
    if next.secs() <= start.secs() {
        return Err(TimeWindowError::InvalidDate(format!(
            "{day} has no valid wall-clock time in {zone}"
        )));
    }

    Ok(DayRange {
        start,
        end: TrueInstant::from_secs(next.secs() - 1),
    })
}

/// [`day_range`] plus both boundaries rendered with [`format_utc`]. The only
/// entry point callers should use to build query ranges against externally
/// stored UTC timestamps.
pub fn day_range_utc(zone: Tz, date: Option<&str>) -> Result<DayRangeUtc> {
    let range = day_range(zone, date)?;
    Ok(DayRangeUtc {
        start: range.start,
        end: range.end,
        start_iso: format_utc(range.start)?,
        end_iso: format_utc(range.end)?,
    })
}

/// First wall-clock time at or after `from` that exists in `zone`, as a true
/// instant. Usually `from` itself; when a spring-forward gap swallows it
/// (America/Santiago jumps straight from 23:59:59 to 01:00:00), the scan
/// walks forward in quarter-hour steps until the gap ends. Ambiguous
/// fall-back times resolve to their first occurrence.
fn first_existing_local(zone: Tz, from: NaiveDateTime) -> Result<TrueInstant> {
    // 48h covers even the calendar-day skips of zones like Pacific/Apia.
    for quarter in 0i64..(48 * 4) {
        let naive = from + Duration::minutes(15 * quarter);
        match zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => return Ok(TrueInstant::from_secs(dt.timestamp())),
            LocalResult::Ambiguous(first, _) => {
                return Ok(TrueInstant::from_secs(first.timestamp()))
            }
            LocalResult::None => continue,
        }
    }

    Err(TimeWindowError::InvalidDate(format!(
        "no valid local time at or after {from} in {zone}"
    )))
}
