//! Default value-to-string conversion.
//!
//! Numbers follow the field's [`NumberFormatting`]; date-time values follow
//! its [`DateFormatting`]; structured values render their title or name.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tess_core::enums::{CellValueType, NumberFormattingType, TimeFormatting};
use tess_core::field::{DateFormatting, FieldDescriptor, NumberFormatting};
use tess_core::value::{CellValue, number_token};

use crate::collaborators::CellFormatter;

/// Separator between the items of a multi-valued cell.
pub const ITEM_SEPARATOR: &str = ", ";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl CellFormatter for DefaultFormatter {
    fn cell_value_to_string(&self, field: &FieldDescriptor, value: Option<&CellValue>) -> String {
        value.map_or_else(String::new, |value| self.item_to_string(field, value))
    }

    fn item_to_string(&self, field: &FieldDescriptor, item: &CellValue) -> String {
        match item {
            CellValue::List(items) => items
                .iter()
                .map(|item| self.item_to_string(field, item))
                .collect::<Vec<_>>()
                .join(ITEM_SEPARATOR),
            CellValue::Text(text) if field.cell_value_type == CellValueType::DateTime => {
                let default_formatting = DateFormatting::default();
                let formatting = field.date_formatting().unwrap_or(&default_formatting);
                format_date(text, formatting)
            }
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => format_number(*n, field.number_formatting()),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Link(link) => link.title.clone().unwrap_or_default(),
            CellValue::Attachment(attachment) => attachment.name.clone(),
        }
    }
}

/// Render a number per formatting options; plain when there are none.
#[must_use]
pub fn format_number(n: f64, formatting: Option<&NumberFormatting>) -> String {
    let Some(formatting) = formatting else {
        return number_token(n);
    };
    let precision = usize::from(formatting.precision);
    match formatting.kind {
        NumberFormattingType::Decimal => format!("{n:.precision$}"),
        NumberFormattingType::Percent => format!("{:.precision$}%", n * 100.0),
        NumberFormattingType::Currency => {
            let symbol = formatting
                .symbol
                .as_deref()
                .unwrap_or(DEFAULT_CURRENCY_SYMBOL);
            if n < 0.0 {
                format!("-{symbol}{:.precision$}", n.abs())
            } else {
                format!("{symbol}{n:.precision$}")
            }
        }
    }
}

/// Render an ISO-8601 timestamp per date formatting options.
///
/// Values that do not parse are returned unchanged.
#[must_use]
pub fn format_date(raw: &str, formatting: &DateFormatting) -> String {
    let Some(instant) = parse_instant(raw) else {
        return raw.to_string();
    };
    let local = instant.with_timezone(&resolve_offset(&formatting.time_zone, &instant));

    let mut pattern = date_pattern_to_strftime(&formatting.date);
    match formatting.time {
        TimeFormatting::Hour24 => pattern.push_str(" %H:%M"),
        TimeFormatting::Hour12 => pattern.push_str(" %I:%M %p"),
        TimeFormatting::None => {}
    }
    local.format(&pattern).to_string()
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Offset of `time_zone` at `instant`.
///
/// Accepts `utc` (any case), `Z`, `GMT`, a `±HH:MM` offset or an IANA zone
/// name such as `Asia/Singapore`. Anything else is treated as UTC.
#[must_use]
pub fn resolve_offset(time_zone: &str, instant: &DateTime<Utc>) -> FixedOffset {
    let utc = Utc.fix();
    let zone = time_zone.trim();
    if zone.is_empty()
        || zone.eq_ignore_ascii_case("utc")
        || zone.eq_ignore_ascii_case("gmt")
        || zone.eq_ignore_ascii_case("etc/utc")
        || zone == "Z"
    {
        return utc;
    }

    if let Some(offset) = parse_fixed_offset(zone) {
        return offset;
    }

    if let Ok(tz) = zone.parse::<Tz>() {
        return tz.offset_from_utc_datetime(&instant.naive_utc()).fix();
    }

    tracing::debug!(time_zone = zone, "unknown time zone, formatting in UTC");
    utc
}

fn parse_fixed_offset(zone: &str) -> Option<FixedOffset> {
    let (sign, rest) = match zone.as_bytes().first()? {
        b'+' => (1, &zone[1..]),
        b'-' => (-1, &zone[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Translate `YYYY`/`MM`/`M`/`DD`/`D` date tokens into strftime.
#[must_use]
pub fn date_pattern_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        let (token, len) = if rest.starts_with("YYYY") {
            ("%Y", 4)
        } else if rest.starts_with("YY") {
            ("%y", 2)
        } else if rest.starts_with("MM") {
            ("%m", 2)
        } else if rest.starts_with('M') {
            ("%-m", 1)
        } else if rest.starts_with("DD") {
            ("%d", 2)
        } else if rest.starts_with('D') {
            ("%-d", 1)
        } else if c == '%' {
            ("%%", 1)
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };
        out.push_str(token);
        rest = &rest[len..];
    }
    out
}
