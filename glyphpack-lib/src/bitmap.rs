use crate::{BitLineError, Error};

/// Packs one bitmap line into `out`, MSB first, 8 characters per byte.
///
/// The line must already be trimmed and must not be a comment. An empty
/// line is valid and contributes nothing.
pub fn pack_line(line: &str, number: usize, out: &mut Vec<u8>) -> Result<(), Error> {
    if line.len() % 8 != 0 {
        return Err(Error::InvalidBitLine {
            line: number,
            kind: BitLineError::BadLength { len: line.len() },
        });
    }

    let mut value = 0u8;

    for (idx, ch) in line.chars().enumerate() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            found => {
                return Err(Error::InvalidBitLine {
                    line: number,
                    kind: BitLineError::BadChar {
                        column: idx + 1,
                        found,
                    },
                });
            }
        };

        value = (value << 1) | bit;

        if idx % 8 == 7 {
            out.push(value);
            value = 0;
        }
    }

    Ok(())
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with("//")
}
