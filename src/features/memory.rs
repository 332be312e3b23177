use std::str::FromStr;

/// Binary memory units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryUnit {
    Byte,
    Kb,
    Mb,
    Gb,
}

impl MemoryUnit {
    /// Size of one unit in bytes.
    pub fn factor(&self) -> i64 {
        match self {
            MemoryUnit::Byte => 1,
            MemoryUnit::Kb => 1 << 10,
            MemoryUnit::Mb => 1 << 20,
            MemoryUnit::Gb => 1 << 30,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MemoryUnit::Byte => "B",
            MemoryUnit::Kb => "KB",
            MemoryUnit::Mb => "MB",
            MemoryUnit::Gb => "GB",
        }
    }
}

impl FromStr for MemoryUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" | "byte" | "bytes" => Ok(MemoryUnit::Byte),
            "kb" | "k" | "kib" => Ok(MemoryUnit::Kb),
            "mb" | "m" | "mib" => Ok(MemoryUnit::Mb),
            "gb" | "g" | "gib" => Ok(MemoryUnit::Gb),
            _ => Err(format!("Unknown memory unit: {}", s)),
        }
    }
}

/// Converts a size in `unit` to bytes.
///
/// Returns `None` for negative sizes or when the result overflows `i64`.
pub fn memory_size_to_bytes(size: i64, unit: MemoryUnit) -> Option<i64> {
    if size < 0 {
        return None;
    }
    size.checked_mul(unit.factor())
}

/// Converts a byte count to a (fractional) size in `unit`.
pub fn bytes_to_memory_size(bytes: i64, unit: MemoryUnit) -> Option<f64> {
    if bytes < 0 {
        return None;
    }
    Some(bytes as f64 / unit.factor() as f64)
}

/// Formats a byte count with three decimals in the largest fitting unit.
///
/// # Example
/// ```
/// use convkit::bytes_to_fit_memory_size;
///
/// assert_eq!(bytes_to_fit_memory_size(512).as_deref(), Some("512.000B"));
/// assert_eq!(bytes_to_fit_memory_size(1536).as_deref(), Some("1.500KB"));
/// ```
pub fn bytes_to_fit_memory_size(bytes: i64) -> Option<String> {
    let unit = [MemoryUnit::Gb, MemoryUnit::Mb, MemoryUnit::Kb]
        .into_iter()
        .find(|unit| bytes >= unit.factor())
        .unwrap_or(MemoryUnit::Byte);

    bytes_to_memory_size(bytes, unit).map(|size| format!("{:.3}{}", size, unit.as_str()))
}
