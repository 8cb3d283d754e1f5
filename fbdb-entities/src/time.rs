use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    error::{ComponentRange, Format, InvalidFormatDescription, Parse},
    format_description::{self, well_known::Rfc3339, OwnedFormatItem},
    macros::format_description as fd,
    OffsetDateTime,
};

pub use time::UtcOffset;

/// A point in time (UTC) with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn try_from_seconds(seconds: i64) -> Result<Self, ComponentRange> {
        OffsetDateTime::from_unix_timestamp(seconds).map(Self)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Formats only the parts selected by the given format,
    /// shifted to the offset of the format.
    pub fn format_date(&self, date_format: &DateFormat) -> String {
        let local = self.0.to_offset(date_format.offset);
        // DateFormat is checked on construction, the fallback
        // is only reached for exotic descriptions.
        local
            .format(&date_format.items)
            .unwrap_or_else(|_| local.date().to_string())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Short, date-only format, e.g. `3/7/18`.
pub const DEFAULT_DATE_FORMAT: &str = "[month padding:none]/[day padding:none]/[year repr:last_two]";

/// A parsed and verified format description for rendering dates
/// together with the UTC offset of the rendered dates.
#[derive(Debug, Clone)]
pub struct DateFormat {
    items: OwnedFormatItem,
    offset: UtcOffset,
}

#[derive(Debug, Error)]
pub enum DateFormatParseError {
    #[error(transparent)]
    Description(#[from] InvalidFormatDescription),
    #[error("The date format is not applicable: {0}")]
    NotApplicable(#[from] Format),
}

impl DateFormat {
    pub fn parse(description: &str) -> Result<Self, DateFormatParseError> {
        let items = format_description::parse_owned::<2>(description)?;
        // Reject descriptions that cannot be applied to a timestamp
        OffsetDateTime::UNIX_EPOCH.format(&items)?;
        Ok(Self {
            items,
            offset: UtcOffset::UTC,
        })
    }

    #[must_use]
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub const fn utc_offset(&self) -> UtcOffset {
        self.offset
    }
}

/// Parses offsets like `+01:00` or `-05:30`.
pub fn parse_utc_offset(s: &str) -> Result<UtcOffset, Parse> {
    UtcOffset::parse(s.trim(), fd!("[offset_hour sign:mandatory]:[offset_minute]"))
}

impl Default for DateFormat {
    fn default() -> Self {
        let items = fd!("[month padding:none]/[day padding:none]/[year repr:last_two]");
        Self {
            items: OwnedFormatItem::from(items),
            offset: UtcOffset::UTC,
        }
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
