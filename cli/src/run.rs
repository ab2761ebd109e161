//! run.rs
//! One invocation: read the input, run the pipeline, then emit the result.
//!
//! Nothing is written until the whole operation has succeeded, so a failure
//! never leaves a partial frame or partial output behind.
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use lzframe_core::frame::{FrameDecoder, FrameEncoder};
use lzframe_core::telemetry::{FrameCounters, Stage, TelemetrySnapshot, TelemetryTimer};

use crate::args::{Cli, Mode};

pub fn run(cli: &Cli) -> Result<()> {
    let mode = cli.mode();
    let layout = cli.layout();
    let mut timer = TelemetryTimer::new();

    let input = timer.time(Stage::Read, || read_input(cli))?;
    info!(bytes = input.len(), ?mode, ?layout, "input read");

    let (output, counters) = match mode {
        Mode::Compress => {
            let mut encoder = FrameEncoder::lzo()?;
            let frame = timer
                .time(Stage::Compress, || encoder.encode(&input, layout))
                .with_context(|| format!("Failed to compress {}", cli.input.display()))?;
            (frame, encoder.counters().clone())
        }
        Mode::Decompress | Mode::Test => {
            let mut decoder = FrameDecoder::lzo()?;
            let raw = timer
                .time(Stage::Decompress, || decoder.decode(&input, layout))
                .with_context(|| format!("Failed to decompress {}", cli.input.display()))?;
            (raw, decoder.counters().clone())
        }
    };

    if mode == Mode::Test {
        eprintln!("OK: decompressed {} -> {} bytes", input.len(), output.len());
    } else {
        timer.time(Stage::Write, || write_output(cli.output.as_deref(), &output))?;
    }
    timer.finish();

    if cli.stats {
        report_stats(&counters, &timer)?;
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    if cli.reads_stdin() {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("Failed to read standard input")?;
        Ok(buf)
    } else {
        fs::read(&cli.input).with_context(|| format!("Failed to read {}", cli.input.display()))
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write standard output")?;
            stdout.flush().context("Failed to flush standard output")
        }
    }
}

fn report_stats(counters: &FrameCounters, timer: &TelemetryTimer) -> Result<()> {
    let snapshot = TelemetrySnapshot::from(counters, timer);
    eprintln!("{}", snapshot.to_json().context("Failed to serialize telemetry")?);
    Ok(())
}
