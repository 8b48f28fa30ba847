use crate::serde::{Error, Result};
use std::io::{self, ErrorKind, Read, Write};

/// Reads one byte. On failure, the error reports `r_len`, the count of bytes
/// the caller had consumed before this read.
pub fn read_byte(r: &mut impl Read, r_len: usize) -> Result<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf).map_err(|e| Error::io(r_len, e))?;
    Ok(buf[0])
}

pub fn write_byte(w: &mut impl Write, byte: u8, w_len: usize) -> Result<()> {
    w.write_all(&[byte]).map_err(|e| Error::io(w_len, e))
}

/// Discards exactly `n` bytes without seeking.
///
/// Returns the count discarded. On failure, including EOF before `n` bytes,
/// the error's `len` is the count that was discarded before the failure.
pub fn skip_exact(r: &mut impl Read, n: usize) -> Result<usize> {
    let mut buf = [0u8; 512];
    let mut skipped = 0;
    while skipped < n {
        let want = buf.len().min(n - skipped);
        match r.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(Error::io(
                    skipped,
                    io::Error::new(
                        ErrorKind::UnexpectedEof,
                        format!("Skipped {skipped} of {n} bytes"),
                    ),
                ))
            }
            Ok(delta) => skipped += delta,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::io(skipped, e)),
        }
    }
    Ok(skipped)
}
