use std::sync::OnceLock;
use std::time::Duration;

use regex::{Captures, Regex};

use crate::{CaptureError, Result};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 60.0 * SECS_PER_MINUTE;
const SECS_PER_DAY: f64 = 24.0 * SECS_PER_HOUR;
const SECS_PER_WEEK: f64 = 7.0 * SECS_PER_DAY;
// 与 moment 的近似保持一致
const SECS_PER_MONTH: f64 = 30.0 * SECS_PER_DAY;
const SECS_PER_YEAR: f64 = 365.0 * SECS_PER_DAY;

/// 解析采集时长
///
/// 支持的格式：
/// - ISO-8601: `PT3S`, `PT1H30M`, `P1DT2H`, `PT0.5S`
/// - 时钟格式: `1:30` (时:分), `00:00:10`, `00:00:01.500`
pub fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CaptureError::InvalidDuration("empty duration".to_string()));
    }

    let secs = if input.starts_with(['P', 'p']) {
        parse_iso8601(input)?
    } else {
        parse_clock(input)?
    };

    Duration::try_from_secs_f64(secs)
        .map_err(|e| CaptureError::InvalidDuration(format!("{}: {}", input, e)))
}

fn parse_iso8601(input: &str) -> Result<f64> {
    static ISO_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ISO_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^P(?:(\d+(?:[.,]\d+)?)Y)?(?:(\d+(?:[.,]\d+)?)M)?(?:(\d+(?:[.,]\d+)?)W)?(?:(\d+(?:[.,]\d+)?)D)?(?:T(?:(\d+(?:[.,]\d+)?)H)?(?:(\d+(?:[.,]\d+)?)M)?(?:(\d+(?:[.,]\d+)?)S)?)?$",
        )
        .unwrap()
    });

    let caps = re.captures(input).ok_or_else(|| invalid(input))?;

    // "P" 或 "PT" 本身不是合法时长
    if (1..=7).all(|i| caps.get(i).is_none()) {
        return Err(invalid(input));
    }

    let units = [
        SECS_PER_YEAR,
        SECS_PER_MONTH,
        SECS_PER_WEEK,
        SECS_PER_DAY,
        SECS_PER_HOUR,
        SECS_PER_MINUTE,
        1.0,
    ];

    let mut total = 0.0;
    for (i, unit) in units.iter().enumerate() {
        total += component(&caps, i + 1, input)? * unit;
    }
    Ok(total)
}

fn parse_clock(input: &str) -> Result<f64> {
    static CLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = CLOCK_REGEX
        .get_or_init(|| Regex::new(r"^(\d+):([0-5]?\d)(?::([0-5]?\d(?:\.\d+)?))?$").unwrap());

    let caps = re.captures(input).ok_or_else(|| invalid(input))?;

    Ok(component(&caps, 1, input)? * SECS_PER_HOUR
        + component(&caps, 2, input)? * SECS_PER_MINUTE
        + component(&caps, 3, input)?)
}

fn component(caps: &Captures, index: usize, input: &str) -> Result<f64> {
    match caps.get(index) {
        Some(m) => m
            .as_str()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| invalid(input)),
        None => Ok(0.0),
    }
}

fn invalid(input: &str) -> CaptureError {
    CaptureError::InvalidDuration(format!("cannot parse duration: {}", input))
}
