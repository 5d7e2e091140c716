//! Conversion between the feed API timestamp format and the stored format.
//!
//! The feed API reports capture times as `YYYY-MM-DDTHH:MM:SSZ` (UTC, second
//! precision). Log rows store them as `YYYY-MM-DD HH:MM:SS UTC`.

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{ParseError, ParseResult};

/// Timestamp format used by the feed API.
const ORIGIN_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Timestamp format used in log rows.
const STORED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Convert a feed API timestamp to the stored format.
///
/// Parsing is strict: anything other than `YYYY-MM-DDTHH:MM:SSZ` is an
/// error. All times are UTC; no offset handling is performed.
///
/// # Examples
///
/// ```
/// use fieldlog_types::timestamp::to_stored;
///
/// assert_eq!(
///     to_stored("2024-03-05T10:15:30Z").unwrap(),
///     "2024-03-05 10:15:30 UTC"
/// );
/// assert!(to_stored("2024-03-05 10:15:30").is_err());
/// ```
pub fn to_stored(origin: &str) -> ParseResult<String> {
    let parsed = PrimitiveDateTime::parse(origin, ORIGIN_FORMAT).map_err(|source| {
        ParseError::InvalidTimestamp {
            value: origin.to_string(),
            source,
        }
    })?;

    Ok(parsed.format(STORED_FORMAT)?)
}
