use crate::cli::{args::LinesArgs, config::read_input, global::GlobalArgs};
use convkit::streaming::{bytes_to_reader, read_lines};
use convkit::ConvertConfig;

pub fn handle(
    args: LinesArgs,
    global: &GlobalArgs,
    config: &ConvertConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let charset = args.charset.as_deref().unwrap_or_else(|| config.settings.charset());

    let data = read_input(args.file.as_ref(), global)?;
    let lines = read_lines(bytes_to_reader(data), charset).ok_or("Failed to read lines")?;

    if args.count {
        println!("{}", lines.len());
        return Ok(());
    }

    for (index, line) in lines.iter().enumerate() {
        if args.number {
            println!("{:>6}  {}", index + 1, line);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
