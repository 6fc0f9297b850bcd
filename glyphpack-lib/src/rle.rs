use crate::{ChunkKind, Error};
use log::trace;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Chunk payloads are framed with a single count byte.
const MAX_CHUNK: usize = 255;

/// Streaming run-length encoder.
///
/// Output is a concatenation of self-terminating chunks:
///
/// | Bytes                          | Meaning                           |
/// |--------------------------------|-----------------------------------|
/// | `0x00`, count, count literals  | Direct chunk, explicit count      |
/// | `0x01`, 1 literal              | Direct chunk, implicit count 1    |
/// | N in 2..=255, 1 literal        | Repeat chunk, literal repeated N  |
///
/// There is no stream header or terminator; the consumer reads until the
/// input is exhausted.
pub struct RleEncoder<W> {
    writer: W,
    pending: Option<u8>,
    run: usize,
    direct: Vec<u8>,
    chunks: BTreeMap<ChunkKind, usize>,
}

impl<W: Write> RleEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: None,
            run: 0,
            direct: Vec::new(),
            chunks: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, value: u8) -> io::Result<()> {
        self.step(Some(value))
    }

    /// Flushes the held-back state and the sink, then returns how many
    /// chunks of each kind were emitted.
    ///
    /// Two steps are required: the first closes an open run and moves a
    /// lingering pending byte into the direct buffer, the second flushes
    /// the direct buffer itself.
    pub fn finish(mut self) -> io::Result<BTreeMap<ChunkKind, usize>> {
        self.step(None)?;
        self.step(None)?;
        self.writer.flush()?;
        Ok(self.chunks)
    }

    fn step(&mut self, value: Option<u8>) -> io::Result<()> {
        trace!(
            "step value={:?} pending={:?} run={} direct={}",
            value,
            self.pending,
            self.run,
            self.direct.len()
        );

        if self.direct.len() >= MAX_CHUNK || (!self.direct.is_empty() && value == self.pending) {
            self.flush_direct()?;
        }

        if let Some(prev) = self.pending {
            if self.run > 0 && value != Some(prev) {
                self.flush_run(prev)?;
                self.pending = None;
            }
        }

        if value == self.pending {
            // A second matching byte confirms (or extends) a run; the
            // matched byte stays held back until the run closes.
            self.run += 1;
        } else {
            if let Some(prev) = self.pending {
                self.direct.push(prev);
            }
            self.pending = value;
        }

        Ok(())
    }

    fn flush_direct(&mut self) -> io::Result<()> {
        while !self.direct.is_empty() {
            if self.direct.len() == 1 {
                self.writer.write_all(&[0x01, self.direct[0]])?;
                self.direct.clear();
            } else {
                let len = self.direct.len().min(MAX_CHUNK);
                self.writer.write_all(&[0x00, len as u8])?;
                self.writer.write_all(&self.direct[..len])?;
                self.direct.drain(..len);
            }

            *self.chunks.entry(ChunkKind::Direct).or_default() += 1;
        }

        Ok(())
    }

    fn flush_run(&mut self, value: u8) -> io::Result<()> {
        // The run's last byte is still held back as `pending`.
        self.run += 1;

        while self.run > 0 {
            let len = self.run.min(MAX_CHUNK);
            self.writer.write_all(&[len as u8, value])?;
            self.run -= len;

            // A leftover of exactly 1 frames identically to a single-byte
            // direct chunk (`0x01` + literal), so count it as one.
            let kind = if len == 1 {
                ChunkKind::Direct
            } else {
                ChunkKind::Repeat
            };

            *self.chunks.entry(kind).or_default() += 1;
        }

        Ok(())
    }
}

/// Reconstructs the byte sequence that an [`RleEncoder`] consumed.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let lead = data[pos];
        pos += 1;

        match lead {
            0x00 => {
                let count = *data.get(pos).ok_or(Error::MalformedStream)? as usize;
                pos += 1;

                let literals = data
                    .get(pos..pos + count)
                    .ok_or(Error::MalformedStream)?;

                out.extend_from_slice(literals);
                pos += count;
            }

            0x01 => {
                let literal = *data.get(pos).ok_or(Error::MalformedStream)?;
                pos += 1;

                out.push(literal);
            }

            repeats => {
                let literal = *data.get(pos).ok_or(Error::MalformedStream)?;
                pos += 1;

                out.extend(std::iter::repeat(literal).take(repeats as usize));
            }
        }
    }

    Ok(out)
}
