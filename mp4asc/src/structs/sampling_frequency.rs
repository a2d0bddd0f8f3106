//! Sampling frequency signalling.
//!
//! A 4-bit `samplingFrequencyIndex` selects one of thirteen standard rates.
//! Index 0xF is followed by an explicit 24-bit frequency; 0xD and 0xE are
//! reserved.

use log::trace;

use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::{FormatViolation, ParseError};

pub const SAMPLING_FREQUENCY_TABLE: [u32; 13] = [
    96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000, 7350,
];

pub const MAX_SAMPLING_FREQUENCY_INDEX: u8 = 12;

/// Index value meaning "explicit 24-bit frequency follows".
pub const ESCAPE_INDEX: u8 = 0xF;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingFrequency {
    pub index: u8,
    pub frequency: u32,
}

impl SamplingFrequency {
    pub fn read(reader: &mut BsIoSliceReader) -> Result<Self, ParseError> {
        let index: u8 = reader.get_n(4)?;

        let frequency = match index {
            ESCAPE_INDEX => reader.get_n(24)?,
            0..=MAX_SAMPLING_FREQUENCY_INDEX => SAMPLING_FREQUENCY_TABLE[index as usize],
            _ => return Err(FormatViolation::ReservedSamplingFrequencyIndex(index).into()),
        };

        trace!("samplingFrequencyIndex = {index:#X}, frequency = {frequency}");

        Ok(Self { index, frequency })
    }

    pub fn is_explicit(&self) -> bool {
        self.index == ESCAPE_INDEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indices() -> Result<(), ParseError> {
        let expected = [
            96000, 88200, 64000, 48000, 44100, 32000, 24000, 22050, 16000, 12000, 11025, 8000,
            7350,
        ];

        for (index, &frequency) in expected.iter().enumerate() {
            let buf = [(index as u8) << 4];
            let mut reader = BsIoSliceReader::from_slice(&buf);
            let sf = SamplingFrequency::read(&mut reader)?;

            assert_eq!(sf.index, index as u8);
            assert_eq!(sf.frequency, frequency);
            assert!(!sf.is_explicit());
            assert_eq!(reader.position(), 4);
        }

        Ok(())
    }

    #[test]
    fn escape_reads_explicit_frequency() -> Result<(), ParseError> {
        // 1111 | 0x00AC45 (44101)
        let mut reader = BsIoSliceReader::from_slice(&[0xF0, 0x0A, 0xC4, 0x50]);
        let sf = SamplingFrequency::read(&mut reader)?;

        assert_eq!(sf.index, ESCAPE_INDEX);
        assert_eq!(sf.frequency, 44101);
        assert!(sf.is_explicit());
        assert_eq!(reader.position(), 28);

        let mut reader = BsIoSliceReader::from_slice(&[0xFF, 0xFF, 0xFF, 0xF0]);
        assert_eq!(SamplingFrequency::read(&mut reader)?.frequency, 0xFF_FFFF);

        Ok(())
    }

    #[test]
    fn reserved_indices_are_invalid() {
        for index in [0xDu8, 0xE] {
            let buf = [index << 4, 0, 0, 0];
            let mut reader = BsIoSliceReader::from_slice(&buf);

            assert_eq!(
                SamplingFrequency::read(&mut reader),
                Err(ParseError::InvalidFormat(
                    FormatViolation::ReservedSamplingFrequencyIndex(index)
                ))
            );
        }
    }

    #[test]
    fn escape_without_frequency_is_truncated() {
        let mut reader = BsIoSliceReader::from_slice(&[0xF0, 0x00]);

        assert!(SamplingFrequency::read(&mut reader).unwrap_err().is_truncated());
    }
}
