//! Calendar boundaries for reporting windows.
//!
//! Every helper takes a zoned instant and returns a new instant in the same
//! time zone, so callers pick `Local`, `Utc` or a fixed offset explicitly.
//!
//! Local times that a daylight-saving transition skips resolve to the first
//! valid instant after the gap. Local times that occur twice resolve to the
//! earlier instant for window starts and the later one for window ends.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use marketplace::domain::calendar::{end_of_month, start_of_month};
//!
//! let at = Utc.with_ymd_and_hms(2024, 2, 14, 9, 30, 0).unwrap();
//! assert_eq!(start_of_month(&at), Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
//! assert_eq!(end_of_month(&at), Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap());
//! ```

use chrono::{
    DateTime, Datelike, Days, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Timelike,
};

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

const END_OF_MONTH: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

// Longest daylight-saving gap on record is a full day (Samoa, 2011).
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Which side of a window a local time bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Midnight on the first day of `at`'s month.
pub fn start_of_month<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    let first = first_day_of_month(at.date_naive());
    resolve_local(&at.timezone(), first.and_time(NaiveTime::MIN), Edge::Start)
}

/// 23:59:59 on the last day of `at`'s month, with no sub-second part.
pub fn end_of_month<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    let last = last_day_of_month(at.date_naive());
    resolve_local(&at.timezone(), last.and_time(END_OF_MONTH), Edge::End)
}

/// Midnight on `at`'s day.
pub fn start_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    resolve_local(
        &at.timezone(),
        at.date_naive().and_time(NaiveTime::MIN),
        Edge::Start,
    )
}

/// 23:59:59.999 on `at`'s day.
pub fn end_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    resolve_local(
        &at.timezone(),
        at.date_naive().and_time(END_OF_DAY),
        Edge::End,
    )
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime, edge: Edge) -> DateTime<Tz> {
    resolve_with(local, edge, |candidate| tz.from_local_datetime(&candidate))
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}

/// Map `local` to an instant using `probe`, stepping over gaps a minute at a
/// time until a valid local time appears.
fn resolve_with<T>(
    local: NaiveDateTime,
    edge: Edge,
    probe: impl Fn(NaiveDateTime) -> LocalResult<T>,
) -> Option<T> {
    match probe(local) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, latest) => Some(match edge {
            Edge::Start => earliest,
            Edge::End => latest,
        }),
        LocalResult::None => {
            let minute = local.with_second(0)?.with_nanosecond(0)?;
            (1..=MAX_GAP_MINUTES)
                .map(|step| minute + TimeDelta::minutes(step))
                .find_map(|candidate| probe(candidate).earliest())
        }
    }
}
