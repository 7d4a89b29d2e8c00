//! Utilidades de coerción
//!
//! Conversión permisiva de los valores que llegan en el body: los números
//! pueden venir como número JSON o como string, las fechas pueden venir vacías.
//! Nunca se rechaza un request por un número malformado: se degrada a `0` o a
//! "ausente" según el campo.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Formatos naive aceptados para timestamps (se interpretan como UTC)
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Convertir un valor JSON en número, o `None` si no es numérico.
///
/// Los strings se leen como `parseFloat`: se ignoran los espacios iniciales y
/// se toma el prefijo decimal más largo (`"12abc"` -> 12).
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Igual que [`parse_number`] pero con `0` como valor por defecto.
///
/// Se aplica a todos los campos monetarios y a litros/precio por litro.
pub fn parse_number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(parse_number).unwrap_or(0.0)
}

/// Versión para campos opcionales (odómetros, peso de carga)
pub fn parse_optional_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(parse_number)
}

fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // "5." es válido, "." solo no
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponente sólo si trae al menos un dígito
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Parsear un timestamp: RFC 3339 o formatos naive en UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parsear una fecha `YYYY-MM-DD` o tomar la parte fecha de un timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(value).map(|dt| dt.date_naive()))
}

/// `value || default` para campos de texto con valor por defecto
pub fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Deserializer para ids que pueden llegar como número o como string
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

/// Deserializer de timestamps opcionales, `""` cuenta como ausente
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s))),
    }
}

/// Deserializer de fechas opcionales, `""` cuenta como ausente
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {}", s))),
    }
}
