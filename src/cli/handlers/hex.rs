use crate::cli::{
    args::HexArgs,
    config::{read_input, read_input_text, write_output},
    global::GlobalArgs,
};
use convkit::{bytes_to_hex, hex_to_bytes};

pub fn handle(args: HexArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.decode {
        let text = read_input_text(args.file.as_ref(), global)?;
        let decoded = hex_to_bytes(&text)?;
        return write_output(args.output.as_ref(), &decoded);
    }

    let data = read_input(args.file.as_ref(), global)?;
    write_output(
        args.output.as_ref(),
        format!("{}\n", bytes_to_hex(&data)).as_bytes(),
    )
}
