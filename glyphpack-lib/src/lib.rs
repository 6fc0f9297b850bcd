//! Converts textual bitmap descriptions (lines of ASCII '0'/'1', 8
//! characters per byte, `//` comment lines ignored) into binary glyph data
//! for embedding in firmware.
//!
//! Two formats exist: `raw` is the packed bytes as-is, `rle` feeds them
//! through the run-length codec in [`rle`].

mod bitmap;
mod error;
mod rle;
mod source;
mod stats;

use std::str::FromStr;

pub use self::{bitmap::*, error::*, rle::*, source::*, stats::*};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Raw,
    Rle,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Raw => "bin",
            Self::Rle => "rle",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "rle" => Ok(Self::Rle),
            _ => Err(format!("unknown format {s:?} (expected `raw` or `rle`)")),
        }
    }
}

#[derive(Debug)]
pub struct Output {
    pub bytes: Vec<u8>,
    pub stats: Stats,
}

pub fn convert(text: &str, format: Format) -> Result<Output, Error> {
    let mut stats = Stats::default();
    let mut packed = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if is_comment(line) {
            stats.comment_lines += 1;
            continue;
        }

        stats.data_lines += 1;
        pack_line(line, idx + 1, &mut packed)?;
    }

    stats.bytes_in = packed.len();

    let bytes = match format {
        Format::Raw => packed,

        Format::Rle => {
            let mut out = Vec::new();
            let mut encoder = RleEncoder::new(&mut out);

            for &byte in &packed {
                encoder.push(byte)?;
            }

            stats.chunks = encoder.finish()?;
            out
        }
    };

    stats.bytes_out = bytes.len();

    Ok(Output { bytes, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLYPH: &str = "\
// glyph 0x41
00000000
00111100
01000010
01000010
01111110
01000010
01000010
00000000
";

    #[test]
    fn raw_output_is_the_packed_bytes() {
        let output = convert(GLYPH, Format::Raw).unwrap();

        assert_eq!(output.bytes, [0x00, 0x3c, 0x42, 0x42, 0x7e, 0x42, 0x42, 0x00]);
        assert_eq!(output.stats.data_lines, 8);
        assert_eq!(output.stats.comment_lines, 1);
        assert_eq!(output.stats.bytes_in, 8);
        assert_eq!(output.stats.bytes_out, 8);
    }

    #[test]
    fn rle_output_round_trips_to_the_raw_bytes() {
        let raw = convert(GLYPH, Format::Raw).unwrap();
        let rle = convert(GLYPH, Format::Rle).unwrap();

        assert_eq!(decode(&rle.bytes).unwrap(), raw.bytes);
        assert_eq!(rle.stats.bytes_in, 8);
        assert_eq!(rle.stats.bytes_out, rle.bytes.len());
        assert!(!rle.stats.chunks.is_empty());
    }

    #[test]
    fn blank_runs_compress() {
        let text = "00000000\n".repeat(64);
        let output = convert(&text, Format::Rle).unwrap();

        assert_eq!(output.bytes, [0x40, 0x00]);
        assert_eq!(output.stats.chunks[&ChunkKind::Repeat], 1);
    }

    #[test]
    fn multiple_bytes_per_line() {
        let output = convert("0000000111111111", Format::Raw).unwrap();

        assert_eq!(output.bytes, [0x01, 0xff]);
        assert_eq!(output.stats.data_lines, 1);
    }

    #[test]
    fn errors_carry_the_source_line_number() {
        let text = "00000000\n// fine\n000x0000\n";

        match convert(text, Format::Raw) {
            Err(Error::InvalidBitLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected InvalidBitLine, got {other:?}"),
        }
    }

    #[test]
    fn empty_text_converts_to_nothing() {
        for format in [Format::Raw, Format::Rle] {
            let output = convert("", format).unwrap();

            assert_eq!(output.bytes, []);
            assert_eq!(output.stats.data_lines, 0);
        }
    }

    #[test]
    fn format_parses_from_str() {
        assert_eq!("raw".parse::<Format>().unwrap(), Format::Raw);
        assert_eq!("rle".parse::<Format>().unwrap(), Format::Rle);
        assert!("gzip".parse::<Format>().is_err());
    }
}
