use crate::cli::{
    args::BitsArgs,
    config::{read_input, read_input_text, write_output},
    global::GlobalArgs,
};
use convkit::{bits_to_bytes, bytes_to_bits};

pub fn handle(args: BitsArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.decode {
        let text = read_input_text(args.file.as_ref(), global)?;
        let decoded = bits_to_bytes(&text)?;
        tracing::debug!(bits = text.len(), bytes = decoded.len(), "decoded bit string");
        return write_output(args.output.as_ref(), &decoded);
    }

    let data = read_input(args.file.as_ref(), global)?;
    let encoded = bytes_to_bits(&data);
    write_output(args.output.as_ref(), format!("{}\n", encoded).as_bytes())
}
