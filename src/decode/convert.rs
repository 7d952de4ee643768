//! Cell conversion
//!
//! Converts one raw cell into the declared type of its field.

use crate::error::{Error, Result};
use crate::shape::FieldMeta;
use crate::types::{CellValue, FieldKind, IntWidth};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Convert a raw cell to the field's declared type
pub fn convert_cell(raw: &str, meta: &FieldMeta) -> Result<CellValue> {
    let fail = |message: String| Error::conversion(meta.name(), raw, meta.kind(), message);

    match meta.kind() {
        FieldKind::Bool => parse_bool(raw)
            .map(CellValue::Bool)
            .ok_or_else(|| fail("not a boolean literal".to_string())),
        FieldKind::Unsigned(width) => parse_unsigned(raw, width)
            .map(CellValue::Unsigned)
            .map_err(fail),
        FieldKind::Signed(width) => parse_signed(raw, width)
            .map(CellValue::Signed)
            .map_err(fail),
        FieldKind::Float32 => {
            let value = raw.parse::<f32>().map_err(|e| fail(e.to_string()))?;
            check_float_range(raw, value.is_finite()).map_err(fail)?;
            Ok(CellValue::Float32(value))
        }
        FieldKind::Float64 => {
            let value = raw.parse::<f64>().map_err(|e| fail(e.to_string()))?;
            check_float_range(raw, value.is_finite()).map_err(fail)?;
            Ok(CellValue::Float64(value))
        }
        FieldKind::String => Ok(CellValue::String(raw.to_string())),
        FieldKind::DateTime => {
            let format = meta
                .tags()
                .date_pattern()
                .ok_or_else(|| Error::metadata(meta.name(), "date-time field has no date format"))?;
            parse_date_time(raw, format)
                .map(CellValue::DateTime)
                .map_err(|e| fail(format!("does not match '{format}': {e}")))
        }
    }
}

/// Boolean literals
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Overflow to infinity is an error; spelled-out `inf` and `nan` are not
fn check_float_range(raw: &str, finite: bool) -> std::result::Result<(), String> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let literal = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word));

    if finite || literal {
        Ok(())
    } else {
        Err("value out of range".to_string())
    }
}

/// Base-10 digits only, no sign
fn parse_unsigned(raw: &str, width: IntWidth) -> std::result::Result<u64, String> {
    if raw.starts_with(['+', '-']) {
        return Err("sign not allowed for unsigned value".to_string());
    }

    let value: u64 = raw.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if value > width.unsigned_max() {
        return Err(format!("value out of range for {} bits", width.bits()));
    }

    Ok(value)
}

fn parse_signed(raw: &str, width: IntWidth) -> std::result::Result<i64, String> {
    let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;

    let (min, max) = width.signed_range();
    if value < min || value > max {
        return Err(format!("value out of range for {} bits", width.bits()));
    }

    Ok(value)
}

/// Parse against a strftime pattern: with offset (normalised to UTC), then
/// naive date-time, then date at midnight.
pub(crate) fn parse_date_time(
    raw: &str,
    format: &str,
) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_str(raw, format) {
        return Ok(dt.naive_utc());
    }

    match NaiveDateTime::parse_from_str(raw, format) {
        Ok(dt) => Ok(dt),
        Err(err) => NaiveDate::parse_from_str(raw, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or(err),
    }
}
