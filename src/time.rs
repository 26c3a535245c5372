//! A timestamp that travels through JSON as RFC 822 text with a numeric zone.
//!
//! The wire form is a JSON string in the layout [`LAYOUT`], for example
//! `"01 May 20 13:01 +0000"`. Seconds are not part of the layout, so values
//! round-trip at minute granularity.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use json_recipes::time::{self, Rfc822zTime};
//!
//! # fn main() -> json_recipes::Result<()> {
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let ordered = Rfc822zTime::new(utc.with_ymd_and_hms(2020, 5, 1, 13, 1, 0).unwrap());
//!
//! let encoded = time::encode(&ordered);
//! assert_eq!(encoded, r#""01 May 20 13:01 +0000""#);
//! assert_eq!(time::decode(encoded.as_bytes())?, ordered);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use chrono::{
    DateTime, Datelike, FixedOffset, Month, NaiveDate, NaiveTime, TimeZone, Timelike, Utc,
};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Debug, Display};

/// Reference layout of the textual form: day, month abbreviation, two-digit
/// year, 24-hour time and numeric offset.
pub const LAYOUT: &str = "02 Jan 06 15:04 -0700";

const FORMAT: &str = "%d %b %y %H:%M %z";

const MONTHS: [&[u8]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov",
    b"Dec",
];

/// A point in time with a fixed UTC offset, or the unset zero value.
///
/// The unset value is the `Default` and is what JSON `null` decodes to.
/// Equality compares instants, so `13:01 +0000` equals `15:01 +0200`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rfc822zTime(Option<DateTime<FixedOffset>>);

impl Rfc822zTime {
    /// Wraps a set point in time.
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Rfc822zTime(Some(time))
    }

    /// The current time in UTC, truncated to the minute so that it survives
    /// a trip through the textual form unchanged.
    pub fn now() -> Self {
        let now = Utc::now().fixed_offset();
        Rfc822zTime(now.with_second(0).and_then(|t| t.with_nanosecond(0)))
    }

    /// The point in time, or `None` when unset.
    pub fn get(&self) -> Option<&DateTime<FixedOffset>> {
        self.0.as_ref()
    }

    /// Whether this is the zero value that `null` decodes to.
    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Calendar month in the timestamp's own offset.
    pub fn month(&self) -> Option<Month> {
        let month = self.0?.month();
        Month::try_from(month as u8).ok()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Rfc822zTime {
    fn from(time: DateTime<Tz>) -> Self {
        Rfc822zTime(Some(time.fixed_offset()))
    }
}

impl Display for Rfc822zTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(time) => Display::fmt(&time.format(FORMAT), f),
            None => f.write_str("null"),
        }
    }
}

impl Debug for Rfc822zTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(time) => write!(f, "Rfc822zTime({})", time.format(FORMAT)),
            None => f.write_str("Rfc822zTime(unset)"),
        }
    }
}

/// Encode a timestamp as a JSON token: a string in [`LAYOUT`], or `null` for
/// the unset value.
pub fn encode(time: &Rfc822zTime) -> String {
    match &time.0 {
        Some(time) => format!("\"{}\"", time.format(FORMAT)),
        None => "null".to_owned(),
    }
}

/// Decode a single JSON token into a timestamp.
///
/// `null` gives the unset value. A string must follow [`LAYOUT`] exactly or
/// the result is a format mismatch naming the text. Any other JSON value is a
/// type mismatch.
///
/// ```
/// use json_recipes::time;
///
/// assert!(time::decode(b"null").unwrap().is_unset());
/// assert!(time::decode(b"123").unwrap_err().is_type_mismatch());
/// assert!(time::decode(br#""2020-05-01T13:01:00Z""#).unwrap_err().is_format_mismatch());
/// ```
pub fn decode(token: &[u8]) -> Result<Rfc822zTime> {
    match serde_json::from_slice::<Value>(token).map_err(Error::json)? {
        Value::Null => Ok(Rfc822zTime::default()),
        Value::String(text) => parse(&text).map(Rfc822zTime::new),
        other => Err(Error::type_mismatch(describe(&other))),
    }
}

/// Parse text in [`LAYOUT`], without surrounding quotes.
pub fn parse(text: &str) -> Result<DateTime<FixedOffset>> {
    let b = text.as_bytes();
    let mismatch = |reason| Error::format_mismatch(text, reason);

    if b.len() != LAYOUT.len() {
        return Err(mismatch("wrong length"));
    }
    if b[2] != b' ' || b[6] != b' ' || b[9] != b' ' || b[12] != b':' || b[15] != b' ' {
        return Err(mismatch("missing delimiter"));
    }

    let day = two_digits(&b[0..2]).ok_or_else(|| mismatch("bad day"))?;
    let month = MONTHS
        .iter()
        .position(|name| *name == &b[3..6])
        .ok_or_else(|| mismatch("bad month"))?;
    let year = two_digits(&b[7..9]).ok_or_else(|| mismatch("bad year"))?;
    let hour = two_digits(&b[10..12]).ok_or_else(|| mismatch("bad hour"))?;
    let minute = two_digits(&b[13..15]).ok_or_else(|| mismatch("bad minute"))?;
    let sign = match b[16] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(mismatch("bad offset sign")),
    };
    let offset_hours = two_digits(&b[17..19]).ok_or_else(|| mismatch("bad offset"))?;
    let offset_minutes = two_digits(&b[19..21]).ok_or_else(|| mismatch("bad offset"))?;

    // Two-digit years pivot at 69, same as strptime.
    let year = if year >= 69 { 1900 + year } else { 2000 + year };

    let date = NaiveDate::from_ymd_opt(year as i32, month as u32 + 1, day)
        .ok_or_else(|| mismatch("day out of range"))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| mismatch("time out of range"))?;
    if offset_hours > 23 || offset_minutes > 59 {
        return Err(mismatch("offset out of range"));
    }
    // A zero offset is always written `+0000`.
    if sign < 0 && offset_hours == 0 && offset_minutes == 0 {
        return Err(mismatch("negative zero offset"));
    }
    let offset = FixedOffset::east_opt(sign * (offset_hours * 3600 + offset_minutes * 60) as i32)
        .ok_or_else(|| mismatch("offset out of range"))?;

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| mismatch("time out of range"))
}

fn two_digits(b: &[u8]) -> Option<u32> {
    match *b {
        [hi @ b'0'..=b'9', lo @ b'0'..=b'9'] => {
            Some(u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
        }
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean `{}`", b),
        Value::Number(n) => format!("number `{}`", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_owned(),
        Value::Object(_) => "object".to_owned(),
    }
}

impl Serialize for Rfc822zTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(time) => serializer.collect_str(&time.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Rfc822zTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TimeVisitor)
    }
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
    type Value = Rfc822zTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a timestamp string like {:?} or null", LAYOUT)
    }

    fn visit_none<E>(self) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Ok(Rfc822zTime::default())
    }

    fn visit_unit<E>(self) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Ok(Rfc822zTime::default())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Rfc822zTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Wrong JSON types are reported by the visit_* methods below.
        deserializer.deserialize_any(TimeVisitor)
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Err(E::custom(Error::type_mismatch(format!("boolean `{}`", v))))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Err(E::custom(Error::type_mismatch(format!("number `{}`", v))))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Err(E::custom(Error::type_mismatch(format!("number `{}`", v))))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        Err(E::custom(Error::type_mismatch(format!("number `{}`", v))))
    }

    fn visit_seq<A>(self, _seq: A) -> std::result::Result<Rfc822zTime, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::custom(Error::type_mismatch("array".to_owned())))
    }

    fn visit_map<A>(self, _map: A) -> std::result::Result<Rfc822zTime, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Err(de::Error::custom(Error::type_mismatch("object".to_owned())))
    }

    fn visit_str<E>(self, text: &str) -> std::result::Result<Rfc822zTime, E>
    where
        E: de::Error,
    {
        parse(text).map(Rfc822zTime::new).map_err(E::custom)
    }
}
