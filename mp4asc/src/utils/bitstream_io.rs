//! Bitstream I/O utilities for configuration parsing.
//!
//! Sequential, MSB-first bit reading over an immutable byte buffer with
//! bounds checks performed by the reader itself rather than by callers.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, UnsignedInteger};

use crate::utils::errors::ParseError;

/// Largest field width a single `get_n` call may read.
pub const MAX_READ_BITS: u32 = 32;

#[derive(Debug)]
pub struct BitstreamIoReader<R: io::Read> {
    bs: BitReader<R, BigEndian>,
    len: u64,
    pos: u64,
}

pub type BsIoSliceReader<'a> = BitstreamIoReader<io::Cursor<&'a [u8]>>;

impl<R> BitstreamIoReader<R>
where
    R: io::Read,
{
    pub fn new(read: R, len_bytes: u64) -> Self {
        Self {
            bs: BitReader::new(read),
            len: len_bytes << 3,
            pos: 0,
        }
    }

    /// Reads a single bit.
    #[inline(always)]
    pub fn get(&mut self) -> Result<bool, ParseError> {
        self.ensure(1)?;

        let bit = self.bs.read_bit().map_err(|e| self.eof(1, e))?;
        self.pos += 1;

        Ok(bit)
    }

    /// Reads `n` bits, first bit read landing in the most significant position.
    #[inline(always)]
    pub fn get_n<I: UnsignedInteger>(&mut self, n: u32) -> Result<I, ParseError> {
        debug_assert!(n <= MAX_READ_BITS, "get_n({n}) exceeds {MAX_READ_BITS} bits");
        self.ensure(n)?;

        let value = self.bs.read_unsigned_var(n).map_err(|e| self.eof(n, e))?;
        self.pos += n as u64;

        Ok(value)
    }

    #[inline(always)]
    pub fn skip_n(&mut self, n: u32) -> Result<(), ParseError> {
        self.ensure(n)?;

        self.bs.skip(n).map_err(|e| self.eof(n, e))?;
        self.pos += n as u64;

        Ok(())
    }

    #[inline(always)]
    pub fn available(&self) -> u64 {
        self.len - self.pos
    }

    #[inline(always)]
    pub fn position(&self) -> u64 {
        self.pos
    }

    #[inline(always)]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn ensure(&self, n: u32) -> Result<(), ParseError> {
        if n as u64 > self.available() {
            return Err(ParseError::TruncatedInput {
                needed: n,
                position: self.pos,
                available: self.available(),
            });
        }

        Ok(())
    }

    // Only reachable if the underlying reader is shorter than `len` claims.
    #[cold]
    fn eof(&self, n: u32, err: io::Error) -> ParseError {
        log::trace!("read of {n} bits at {} failed: {err}", self.pos);

        ParseError::TruncatedInput {
            needed: n,
            position: self.pos,
            available: 0,
        }
    }
}

impl<'a> BsIoSliceReader<'a> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        let len = buf.len() as u64;
        let read = io::Cursor::new(buf);

        Self::new(read, len)
    }
}

impl Default for BsIoSliceReader<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_msb_first_across_byte_boundaries() -> Result<(), ParseError> {
        let mut reader = BsIoSliceReader::from_slice(&[0b1010_1100, 0b0101_0011]);

        assert!(reader.get()?);
        assert_eq!(reader.get_n::<u8>(3)?, 0b010);
        assert_eq!(reader.get_n::<u16>(8)?, 0b1100_0101);
        assert_eq!(reader.position(), 12);
        assert_eq!(reader.available(), 4);
        assert_eq!(reader.get_n::<u8>(4)?, 0b0011);
        assert_eq!(reader.available(), 0);

        Ok(())
    }

    #[test]
    fn reads_full_32_bit_words() -> Result<(), ParseError> {
        let mut reader = BsIoSliceReader::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x80]);

        assert_eq!(reader.get_n::<u32>(32)?, 0xDEAD_BEEF);
        assert!(reader.get()?);

        Ok(())
    }

    #[test]
    fn overread_is_reported_without_advancing() {
        let mut reader = BsIoSliceReader::from_slice(&[0xFF]);
        reader.skip_n(5).unwrap();

        let err = reader.get_n::<u8>(4).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TruncatedInput {
                needed: 4,
                position: 5,
                available: 3
            }
        ));
        assert_eq!(reader.position(), 5);
        assert_eq!(reader.get_n::<u8>(3).unwrap(), 0b111);
    }

    #[test]
    fn empty_reader_rejects_everything() {
        let mut reader = BsIoSliceReader::default();

        assert!(reader.is_empty());
        assert!(reader.get().is_err());
        assert!(reader.skip_n(1).is_err());
        assert_eq!(reader.available(), 0);
    }
}
