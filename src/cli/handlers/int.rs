use crate::cli::args::{IntAction, IntArgs};
use convkit::{ByteOrder, ConvertConfig, bytes_to_hex, bytes_to_int, hex_to_bytes, int_to_bytes};

/// Widest integer the CLI will pack, in bytes.
const MAX_ENCODE_WIDTH: usize = 1024;

pub fn handle(args: IntArgs, config: &ConvertConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &config.settings;

    match args.action {
        IntAction::Encode { value, size, order } => {
            let size = size.unwrap_or_else(|| settings.int_width());
            let order = order.map(ByteOrder::from).unwrap_or_else(|| settings.byte_order());
            if size > MAX_ENCODE_WIDTH {
                return Err(format!(
                    "Width {} exceeds maximum ({} bytes)",
                    size, MAX_ENCODE_WIDTH
                )
                .into());
            }
            if size > 4 {
                tracing::warn!(size, "widths above 4 bytes repeat the value bytes");
            }

            let bytes = int_to_bytes(value, size, order);
            println!("{}", bytes_to_hex(&bytes));
        }
        IntAction::Decode {
            hex,
            offset,
            size,
            order,
        } => {
            let size = size.unwrap_or_else(|| settings.int_width());
            let order = order.map(ByteOrder::from).unwrap_or_else(|| settings.byte_order());

            let bytes = hex_to_bytes(&hex)?;
            let value = bytes_to_int(&bytes, offset, size, order)?;
            tracing::debug!(offset, size, order = order.as_str(), "decoded integer");
            println!("{}", value);
        }
    }

    Ok(())
}
