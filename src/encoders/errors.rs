use std::fmt;

/// Textual formats whose alphabet is validated on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Bit string, one `0`/`1` per bit, MSB first
    Bits,
    /// Hex string, two digits per byte
    Hex,
    /// Signed base-2 integer text
    Binary,
    /// Signed base-10 integer text
    Decimal,
}

impl TextFormat {
    pub fn as_str(&self) -> &str {
        match self {
            TextFormat::Bits => "bit string",
            TextFormat::Hex => "hex string",
            TextFormat::Binary => "binary integer",
            TextFormat::Decimal => "decimal integer",
        }
    }

    /// Characters accepted by the format, for hints.
    pub fn valid_chars(&self) -> &str {
        match self {
            TextFormat::Bits => "0 1",
            TextFormat::Hex => "0-9 A-F a-f",
            TextFormat::Binary => "0 1, optionally prefixed by + or -",
            TextFormat::Decimal => "0-9, optionally prefixed by + or -",
        }
    }
}

/// Errors that can occur while converting between representations.
#[derive(Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// The input contains a character outside the format's alphabet
    InvalidFormat {
        format: TextFormat,
        char: char,
        position: usize,
        input: String,
    },
    /// The input has no digits to decode
    EmptyInput { format: TextFormat },
    /// The requested decode window does not fit in the input
    OutOfRange {
        offset: usize,
        size: usize,
        len: usize,
    },
}

impl ConvertError {
    /// Create an InvalidFormat error with context.
    ///
    /// `position` is the character index in `input`.
    pub fn invalid_format(format: TextFormat, c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs, keeping the caret inside the shown text
        let display_input = if input.chars().count() > 60 {
            let shown: String = input.chars().take(60.max(position + 1)).collect();
            format!("{}...", shown)
        } else {
            input.to_string()
        };

        ConvertError::InvalidFormat {
            format,
            char: c,
            position,
            input: display_input,
        }
    }

    pub fn out_of_range(offset: usize, size: usize, len: usize) -> Self {
        ConvertError::OutOfRange { offset, size, len }
    }

    /// Renders the full report with or without ANSI colour.
    ///
    /// `Display` picks colour from `NO_COLOR` and whether stderr is a
    /// terminal; callers with their own colour switch use this instead.
    pub fn render(&self, use_color: bool) -> String {
        Report {
            error: self,
            use_color,
        }
        .to_string()
    }

    fn write_report(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        match self {
            ConvertError::InvalidFormat {
                format,
                char: c,
                position,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "invalid character {:?} at position {} in {}",
                        c,
                        position,
                        format.as_str()
                    ),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                write_hint(f, use_color, &format!("valid characters: {}", format.valid_chars()))
            }
            ConvertError::EmptyInput { format } => write_header(
                f,
                use_color,
                &format!("cannot decode empty {}", format.as_str()),
            ),
            ConvertError::OutOfRange { offset, size, len } => {
                write_header(f, use_color, "integer window out of range")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  requested {} bytes at offset {}, input has {} bytes",
                    size, offset, len
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "reduce the size or offset, or supply more bytes")
            }
        }
    }
}

struct Report<'a> {
    error: &'a ConvertError,
    use_color: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.write_report(f, self.use_color)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, should_use_color())
    }
}

impl std::error::Error for ConvertError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = ConvertError::invalid_format(TextFormat::Hex, 'G', 3, "00AG");
        let display = err.render(false);

        assert!(display.contains("invalid character 'G' at position 3 in hex string"));
        assert!(display.contains("00AG"));
        assert!(display.contains("   ^"));
        assert!(display.contains("hint: valid characters: 0-9 A-F a-f"));
    }

    #[test]
    fn test_invalid_format_truncates_long_input() {
        let input = "0".repeat(100) + "x";
        let err = ConvertError::invalid_format(TextFormat::Bits, 'x', 100, &input);

        match err {
            ConvertError::InvalidFormat { input, position, .. } => {
                assert!(input.ends_with("x..."));
                assert_eq!(position, 100);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = ConvertError::invalid_format(TextFormat::Bits, '2', 0, &"2".repeat(80));
        match err {
            ConvertError::InvalidFormat { input, .. } => {
                assert_eq!(input.chars().count(), 63);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ConvertError::out_of_range(2, 4, 3);
        let display = err.render(false);

        assert!(display.contains("integer window out of range"));
        assert!(display.contains("requested 4 bytes at offset 2, input has 3 bytes"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = ConvertError::EmptyInput {
            format: TextFormat::Binary,
        };
        assert_eq!(err.render(false), "error: cannot decode empty binary integer");
    }

    #[test]
    fn test_render_color_switch() {
        let err = ConvertError::invalid_format(TextFormat::Bits, '2', 1, "12");

        let colored = err.render(true);
        assert!(colored.starts_with("\x1b[1;31merror:\x1b[0m"));
        assert!(colored.contains("\x1b[1;36mhint:\x1b[0m"));

        let plain = err.render(false);
        assert!(!plain.contains('\x1b'));
        assert!(plain.starts_with("error: invalid character '2' at position 1"));
    }
}
