use crate::cli::args::BinaryArgs;
use convkit::{binary_string_to_decimal, decimal_to_binary_string};

pub fn handle(args: BinaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let value = args.value.trim();
    let converted = if args.decode {
        binary_string_to_decimal(value)?
    } else {
        decimal_to_binary_string(value)?
    };
    println!("{}", converted);
    Ok(())
}
