// Shared fixtures for the integration suites: a scripted codec that replays
// canned statuses and records every call, and a counting wrapper around the
// real LZO1X-1 codec.
#![allow(dead_code)]

use std::collections::VecDeque;

use lzframe_core::compression::{Codec, CodecStatus, Lzo1x};

/// Status returned once a script runs dry.
pub const SCRIPT_EXHAUSTED: i32 = -99;

#[derive(Default)]
pub struct ScriptedCodec {
    pub compress_script: VecDeque<CodecStatus>,
    pub decompress_script: VecDeque<CodecStatus>,
    pub compress_capacities: Vec<usize>,
    pub decompress_capacities: Vec<usize>,
}

impl ScriptedCodec {
    pub fn compressing(script: impl IntoIterator<Item = CodecStatus>) -> Self {
        Self { compress_script: script.into_iter().collect(), ..Default::default() }
    }

    pub fn decompressing(script: impl IntoIterator<Item = CodecStatus>) -> Self {
        Self { decompress_script: script.into_iter().collect(), ..Default::default() }
    }

    pub fn compress_calls(&self) -> usize {
        self.compress_capacities.len()
    }

    pub fn decompress_calls(&self) -> usize {
        self.decompress_capacities.len()
    }
}

impl Codec for ScriptedCodec {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn compress(&mut self, _input: &[u8], output: &mut [u8]) -> CodecStatus {
        self.compress_capacities.push(output.len());
        self.compress_script.pop_front().unwrap_or(CodecStatus::OtherFailure(SCRIPT_EXHAUSTED))
    }

    fn decompress(&mut self, _input: &[u8], output: &mut [u8]) -> CodecStatus {
        self.decompress_capacities.push(output.len());
        let status = self
            .decompress_script
            .pop_front()
            .unwrap_or(CodecStatus::OtherFailure(SCRIPT_EXHAUSTED));
        // Mark the reported prefix so truncation can be checked.
        if let CodecStatus::Ok(n) = status {
            let cap = output.len();
            output[..n.min(cap)].fill(0xAB);
        }
        status
    }
}

/// Real LZO1X-1 codec with call counters.
pub struct CountingLzo {
    inner: Lzo1x,
    pub compress_calls: usize,
    pub decompress_calls: usize,
}

impl CountingLzo {
    pub fn new() -> Self {
        Self { inner: Lzo1x::new().unwrap(), compress_calls: 0, decompress_calls: 0 }
    }
}

impl Codec for CountingLzo {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        self.compress_calls += 1;
        self.inner.compress(input, output)
    }

    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        self.decompress_calls += 1;
        self.inner.decompress(input, output)
    }
}

/// Byte patterns exercised by the fixed-case suites.
pub fn sample_cases() -> Vec<(&'static str, Vec<u8>)> {
    let mut mixed = Vec::new();
    mixed.extend_from_slice(b"Text section with repeating patterns.\n");
    mixed.extend(std::iter::repeat([0xAAu8, 0xBB]).take(50).flatten());
    mixed.extend_from_slice(b"\nMore text here with different content.\n");
    mixed.extend(std::iter::repeat(0u8).take(100));
    mixed.extend_from_slice(b"\nFinal text section.\n");

    vec![
        ("empty", Vec::new()),
        ("really-short", b"Short stack!".to_vec()),
        ("short", b"Hello, World! This is a small test string.".to_vec()),
        ("short-repeated", b"ABCD".repeat(100)),
        ("long-repeated", b"The quick brown fox jumps over the lazy dog. ".repeat(200)),
        ("zeros", vec![0u8; 1000]),
        ("lorem-ipsum", LOREM.to_vec()),
        ("binary", (0..=255u8).collect()),
        ("mixed", mixed),
    ]
}

pub const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris \
nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
pariatur. Excepteur sint occaecat cupidatat non proident, sunt in \
culpa qui officia deserunt mollit anim id est laborum.";

/// Deterministic pseudo-random bytes (xorshift), effectively incompressible.
pub fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}
