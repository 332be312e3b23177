use std::str::FromStr;

/// Time span units, each a whole number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanUnit {
    Msec,
    Sec,
    Min,
    Hour,
    Day,
}

/// Units from largest to smallest, as used by fit formatting.
const FIT_UNITS: [SpanUnit; 5] = [
    SpanUnit::Day,
    SpanUnit::Hour,
    SpanUnit::Min,
    SpanUnit::Sec,
    SpanUnit::Msec,
];

impl SpanUnit {
    pub fn millis(&self) -> i64 {
        match self {
            SpanUnit::Msec => 1,
            SpanUnit::Sec => 1_000,
            SpanUnit::Min => 60_000,
            SpanUnit::Hour => 3_600_000,
            SpanUnit::Day => 86_400_000,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SpanUnit::Msec => "ms",
            SpanUnit::Sec => "s",
            SpanUnit::Min => "min",
            SpanUnit::Hour => "h",
            SpanUnit::Day => "d",
        }
    }
}

impl FromStr for SpanUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ms" | "msec" | "millis" => Ok(SpanUnit::Msec),
            "s" | "sec" | "secs" => Ok(SpanUnit::Sec),
            "min" | "mins" | "m" => Ok(SpanUnit::Min),
            "h" | "hour" | "hours" => Ok(SpanUnit::Hour),
            "d" | "day" | "days" => Ok(SpanUnit::Day),
            _ => Err(format!("Unknown time unit: {}", s)),
        }
    }
}

/// Converts a span in `unit` to milliseconds, saturating at the `i64` bounds.
pub fn time_span_to_millis(span: i64, unit: SpanUnit) -> i64 {
    span.saturating_mul(unit.millis())
}

/// Converts milliseconds to whole `unit`s, truncating toward zero.
pub fn millis_to_time_span(millis: i64, unit: SpanUnit) -> i64 {
    millis / unit.millis()
}

/// Formats milliseconds as `<n><unit>` components from days down.
///
/// `precision` is how many units, starting at days, are considered (capped
/// at 5); zero-valued components are skipped. Returns `None` when
/// `precision <= 0`.
///
/// # Example
/// ```
/// use convkit::millis_to_fit_time_span;
///
/// assert_eq!(millis_to_fit_time_span(90_061_001, 5).as_deref(), Some("1d1h1min1s1ms"));
/// assert_eq!(millis_to_fit_time_span(90_061_001, 2).as_deref(), Some("1d1h"));
/// ```
pub fn millis_to_fit_time_span(millis: i64, precision: i32) -> Option<String> {
    if precision <= 0 {
        return None;
    }
    let precision = precision.min(FIT_UNITS.len() as i32) as usize;
    let units = &FIT_UNITS[..precision];

    if millis == 0 {
        return Some(format!("0{}", units[precision - 1].as_str()));
    }

    let mut result = String::new();
    if millis < 0 {
        result.push('-');
    }

    // unsigned_abs keeps i64::MIN representable
    let mut remaining = millis.unsigned_abs();
    for unit in units {
        let size = unit.millis() as u64;
        if remaining >= size {
            let count = remaining / size;
            remaining -= count * size;
            result.push_str(&count.to_string());
            result.push_str(unit.as_str());
        }
    }

    Some(result)
}
