//! args.rs
//! Command-line surface.
//!
//! Exactly one of `-c`, `-d`, `-t` is required. The frame layout is not
//! recorded in the frame, so `--with-size-header` must match on both sides.
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use lzframe_core::frame::FrameLayout;

/// LZO1X-1 frame compressor.
#[derive(Parser, Debug)]
#[command(name = "lzframe", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["compress", "decompress", "test"])
))]
pub struct Cli {
    /// Compress INPUT into a frame
    #[arg(short, long)]
    pub compress: bool,

    /// Decompress a frame back into raw bytes
    #[arg(short, long)]
    pub decompress: bool,

    /// Decompress and discard the output, reporting sizes on stderr
    #[arg(short, long)]
    pub test: bool,

    /// Prepend (or expect) the 8-byte little-endian original length
    #[arg(long)]
    pub with_size_header: bool,

    /// Write to PATH instead of standard output
    #[arg(short, long, value_name = "PATH", conflicts_with = "test")]
    pub output: Option<PathBuf>,

    /// Print run telemetry as JSON on stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log filter directive; overrides -v
    #[arg(long, env = "LZFRAME_LOG", value_name = "FILTER")]
    pub log: Option<String>,

    /// Input file, or `-` for standard input
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
    Test,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.compress {
            Mode::Compress
        } else if self.decompress {
            Mode::Decompress
        } else {
            Mode::Test
        }
    }

    pub fn layout(&self) -> FrameLayout {
        FrameLayout::from(self.with_size_header)
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
