use crate::cli::args::SizeArgs;
use convkit::{MemoryUnit, bytes_to_fit_memory_size, memory_size_to_bytes};

pub fn handle(args: SizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.unit {
        Some(unit) => {
            let unit = MemoryUnit::from(unit);
            let bytes = memory_size_to_bytes(args.value, unit).ok_or_else(|| {
                format!(
                    "Cannot convert {}{} to bytes (negative or too large)",
                    args.value,
                    unit.as_str()
                )
            })?;
            println!("{}", bytes);
        }
        None => {
            let formatted = bytes_to_fit_memory_size(args.value)
                .ok_or_else(|| format!("Size must not be negative: {}", args.value))?;
            println!("{}", formatted);
        }
    }
    Ok(())
}
