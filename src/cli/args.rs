use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for the bit-string codec
#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Decode bit text to raw bytes instead of encoding
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the hex codec
#[derive(Args, Debug)]
pub struct HexArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Decode hex text to raw bytes instead of encoding
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for fixed-width integers
#[derive(Args, Debug)]
pub struct IntArgs {
    #[command(subcommand)]
    pub action: IntAction,
}

/// Int subcommand actions
#[derive(Subcommand, Debug)]
pub enum IntAction {
    /// Pack an integer and print its bytes as hex
    Encode {
        /// Value to pack
        #[arg(allow_negative_numbers = true)]
        value: i32,

        /// Width in bytes (default from config)
        #[arg(short = 's', long)]
        size: Option<usize>,

        /// Byte order (default from config)
        #[arg(long, value_enum)]
        order: Option<ByteOrderCli>,
    },

    /// Read an integer from hex-encoded bytes
    Decode {
        /// Bytes as hex
        hex: String,

        /// Offset of the first byte to read
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Width in bytes (default from config)
        #[arg(short = 's', long)]
        size: Option<usize>,

        /// Byte order (default from config)
        #[arg(long, value_enum)]
        order: Option<ByteOrderCli>,
    },
}

/// Arguments for decimal/binary conversion
#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Decimal integer (or binary with --decode), any magnitude
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Convert binary to decimal instead
    #[arg(short = 'd', long)]
    pub decode: bool,
}

/// Arguments for charset transcoding
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Charset of the input (default from config)
    #[arg(long, value_name = "CHARSET")]
    pub from: Option<String>,

    /// Charset of the output (default from config)
    #[arg(long, value_name = "CHARSET")]
    pub to: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for line splitting
#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Charset of the input (default from config)
    #[arg(long, value_name = "CHARSET")]
    pub charset: Option<String>,

    /// Prefix each line with its number
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Print only the number of lines
    #[arg(short = 'c', long, conflicts_with = "number")]
    pub count: bool,
}

/// Arguments for memory sizes
#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Size in bytes, or in --unit when given
    #[arg(allow_negative_numbers = true)]
    pub value: i64,

    /// Convert VALUE from this unit to bytes
    #[arg(short = 'u', long, value_enum)]
    pub unit: Option<MemoryUnitCli>,
}

/// Arguments for time spans
#[derive(Args, Debug)]
pub struct SpanArgs {
    /// Span in milliseconds, or in --unit when given
    #[arg(allow_negative_numbers = true)]
    pub value: i64,

    /// Convert VALUE from this unit to milliseconds
    #[arg(short = 'u', long, value_enum, conflicts_with = "precision")]
    pub unit: Option<SpanUnitCli>,

    /// Units to show, from days down (default from config)
    #[arg(short = 'p', long)]
    pub precision: Option<i32>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a charset name resolves
    Charset {
        /// Charset label
        name: String,
    },
}

/// Byte orders (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ByteOrderCli {
    Big,
    Little,
}

impl From<ByteOrderCli> for convkit::ByteOrder {
    fn from(cli: ByteOrderCli) -> Self {
        match cli {
            ByteOrderCli::Big => convkit::ByteOrder::Big,
            ByteOrderCli::Little => convkit::ByteOrder::Little,
        }
    }
}

/// Memory units (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MemoryUnitCli {
    B,
    Kb,
    Mb,
    Gb,
}

impl From<MemoryUnitCli> for convkit::MemoryUnit {
    fn from(cli: MemoryUnitCli) -> Self {
        match cli {
            MemoryUnitCli::B => convkit::MemoryUnit::Byte,
            MemoryUnitCli::Kb => convkit::MemoryUnit::Kb,
            MemoryUnitCli::Mb => convkit::MemoryUnit::Mb,
            MemoryUnitCli::Gb => convkit::MemoryUnit::Gb,
        }
    }
}

/// Time span units (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SpanUnitCli {
    Ms,
    S,
    Min,
    H,
    D,
}

impl From<SpanUnitCli> for convkit::SpanUnit {
    fn from(cli: SpanUnitCli) -> Self {
        match cli {
            SpanUnitCli::Ms => convkit::SpanUnit::Msec,
            SpanUnitCli::S => convkit::SpanUnit::Sec,
            SpanUnitCli::Min => convkit::SpanUnit::Min,
            SpanUnitCli::H => convkit::SpanUnit::Hour,
            SpanUnitCli::D => convkit::SpanUnit::Day,
        }
    }
}
