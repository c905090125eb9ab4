//! Clock helpers shared by the specifier and range types.
//!
//! Only [`date_hours_ago`] reads the system clock. Everything else takes an
//! explicit anchor so it can be tested deterministically.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// A concrete instant. Displayed in local time unless a
/// [`FormatOptions`](crate::FormatOptions) says otherwise.
pub type Timestamp = DateTime<Utc>;

/// How far back an absolute specifier defaults to when no instant is given.
pub const DEFAULT_HOURS_AGO: i64 = 1;

/// The current instant with the local wall-clock hour moved back by `hours`.
///
/// Minutes and seconds are inherited from "now". See [`date_hours_ago_from`]
/// for how DST gaps and overlaps are handled.
pub fn date_hours_ago(hours: i64) -> Timestamp {
    date_hours_ago_from(&Local::now(), hours)
}

/// Move the wall-clock hour of `anchor` back by `hours`, in `anchor`'s own timezone.
///
/// This is hour-field arithmetic, not duration arithmetic: across a DST
/// transition the result keeps the same minute and second on the wall clock
/// even if the elapsed time is not exactly `hours` hours. An ambiguous wall
/// time resolves to its earliest instant. A wall time that does not exist
/// (spring-forward gap) falls back to plain duration subtraction.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use timerange::clock::date_hours_ago_from;
///
/// let anchor = Utc.with_ymd_and_hms(2024, 1, 15, 1, 30, 15).unwrap();
/// let earlier = date_hours_ago_from(&anchor, 2);
/// assert_eq!(earlier.hour(), 23);
/// assert_eq!(earlier.minute(), 30);
/// ```
pub fn date_hours_ago_from<Tz: TimeZone>(anchor: &DateTime<Tz>, hours: i64) -> Timestamp {
    let step = Duration::try_hours(hours).unwrap_or(Duration::MAX);
    let by_duration = || {
        anchor
            .with_timezone(&Utc)
            .checked_sub_signed(step)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    };

    let Some(wall) = anchor.naive_local().checked_sub_signed(step) else {
        return by_duration();
    };

    anchor
        .timezone()
        .from_local_datetime(&wall)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(by_duration)
}

// ── Tests ───────────────────────────────────────────────────────────────────
