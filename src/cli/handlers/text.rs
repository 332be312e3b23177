use crate::cli::{
    args::TextArgs,
    config::{read_input, write_output},
    global::GlobalArgs,
};
use convkit::{ConvertConfig, bytes_to_string, is_supported_charset, string_to_bytes};

/// Re-encodes the input from one charset into another.
pub fn handle(
    args: TextArgs,
    global: &GlobalArgs,
    config: &ConvertConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let from = args.from.as_deref().unwrap_or_else(|| config.settings.charset());
    let to = args.to.as_deref().unwrap_or_else(|| config.settings.charset());

    for name in [from, to] {
        if !name.trim().is_empty() && !is_supported_charset(name) {
            tracing::warn!(charset = name, "unknown charset, using UTF-8");
        }
    }

    let data = read_input(args.file.as_ref(), global)?;
    let text = bytes_to_string(&data, from);
    let encoded = string_to_bytes(&text, to);
    tracing::debug!(from, to, input = data.len(), output = encoded.len(), "transcoded text");

    write_output(args.output.as_ref(), &encoded)
}
