//! Build [`Bar`]s from loosely-typed records handed over by data collaborators.

use crate::indicators::error::IndicatorError;
use crate::models::Bar;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

/// Columns every bar record must carry
pub const REQUIRED_FIELDS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];

pub fn parse_f64(field: &str, value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IndicatorError::InvalidNumericFormat(field.to_string()))
}

/// Volumes may arrive as `"1200"` or `"1200.0"`; anything negative is rejected.
pub fn parse_volume(value: &str) -> Result<u64, IndicatorError> {
    let trimmed = value.trim();
    if let Ok(v) = trimmed.parse::<u64>() {
        return Ok(v);
    }
    let v = parse_f64("volume", trimmed)?;
    if v < 0.0 {
        return Err(IndicatorError::InvalidNumericFormat("volume".to_string()));
    }
    Ok(v.round() as u64)
}

/// Accepts `YYYY-MM-DD`, `YYYYMMDD` and `YYYY/MM/DD`, optionally followed by a
/// time part which is ignored.
pub fn parse_date(value: &str) -> Result<NaiveDate, IndicatorError> {
    let day = value
        .trim()
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or_default();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
        .ok_or_else(|| IndicatorError::InvalidNumericFormat("date".to_string()))
}

fn required<'a>(data: &'a HashMap<String, String>, field: &str) -> Result<&'a str, IndicatorError> {
    data.get(field)
        .map(String::as_str)
        .ok_or_else(|| IndicatorError::MissingField(field.to_string()))
}

pub fn parse_bar_from_map(data: &HashMap<String, String>) -> Result<Bar, IndicatorError> {
    for field in REQUIRED_FIELDS {
        required(data, field)?;
    }

    Ok(Bar {
        date: parse_date(required(data, "date")?)?,
        open: parse_f64("open", required(data, "open")?)?,
        high: parse_f64("high", required(data, "high")?)?,
        low: parse_f64("low", required(data, "low")?)?,
        close: parse_f64("close", required(data, "close")?)?,
        volume: parse_volume(required(data, "volume")?)?,
    })
}

pub fn parse_bars_from_maps(records: &[HashMap<String, String>]) -> Result<Vec<Bar>, IndicatorError> {
    records.iter().map(parse_bar_from_map).collect()
}

fn json_field<'a>(record: &'a Value, field: &str) -> Result<&'a Value, IndicatorError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(IndicatorError::MissingField(field.to_string())),
        Some(value) => Ok(value),
    }
}

fn json_f64(record: &Value, field: &str) -> Result<f64, IndicatorError> {
    match json_field(record, field)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| IndicatorError::InvalidNumericFormat(field.to_string())),
        Value::String(s) => parse_f64(field, s),
        _ => Err(IndicatorError::InvalidNumericFormat(field.to_string())),
    }
}

fn json_volume(record: &Value) -> Result<u64, IndicatorError> {
    match json_field(record, "volume")? {
        Value::Number(n) => match n.as_u64() {
            Some(v) => Ok(v),
            None => parse_volume(&n.to_string()),
        },
        Value::String(s) => parse_volume(s),
        _ => Err(IndicatorError::InvalidNumericFormat("volume".to_string())),
    }
}

/// Parse one JSON object with date/open/high/low/close/volume keys.
/// Numeric fields may be JSON numbers or numeric strings.
pub fn parse_bar_from_json(record: &Value) -> Result<Bar, IndicatorError> {
    for field in REQUIRED_FIELDS {
        json_field(record, field)?;
    }

    let date = match json_field(record, "date")? {
        Value::String(s) => parse_date(s)?,
        Value::Number(n) => parse_date(&n.to_string())?,
        _ => return Err(IndicatorError::InvalidNumericFormat("date".to_string())),
    };

    Ok(Bar {
        date,
        open: json_f64(record, "open")?,
        high: json_f64(record, "high")?,
        low: json_f64(record, "low")?,
        close: json_f64(record, "close")?,
        volume: json_volume(record)?,
    })
}

/// Parse a JSON array of bar objects.
pub fn parse_bars_from_json(rows: &Value) -> Result<Vec<Bar>, IndicatorError> {
    let rows = rows
        .as_array()
        .ok_or_else(|| IndicatorError::InvalidNumericFormat("rows".to_string()))?;
    rows.iter().map(parse_bar_from_json).collect()
}
