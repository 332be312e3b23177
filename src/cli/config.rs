use convkit::ConvertConfig;
use convkit::streaming::read_to_bytes;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalArgs;

/// Loads settings from the standard locations, then `--config` on top.
pub fn load_config(global: &GlobalArgs) -> Result<ConvertConfig, Box<dyn std::error::Error>> {
    let mut config = ConvertConfig::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let extra = ConvertConfig::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        config.merge(extra);
    }

    Ok(config)
}

/// Reads the whole input from a file or stdin, honoring `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let metadata = fs::metadata(file_path)?;
            let file_size = metadata.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        let file = fs::File::open(file_path)
            .map_err(|e| format!("Cannot open '{}': {}", file_path.display(), e))?;
        return read_to_bytes(file)
            .ok_or_else(|| format!("Failed to read '{}'", file_path.display()).into());
    }

    let buffer = read_to_bytes(io::stdin().lock()).ok_or("Failed to read stdin")?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Reads the input as text, for commands that parse bit or hex strings.
pub fn read_input_text(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file, global)?;
    let text = String::from_utf8(data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    Ok(text.trim().to_string())
}

/// Writes raw bytes to a file or stdout.
pub fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)
            .map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
