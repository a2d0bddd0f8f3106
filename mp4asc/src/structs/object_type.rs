//! MPEG-4 audio object types.
//!
//! `audioObjectType` is a 5-bit field; the value 31 escapes to a further
//! 6-bit field offset by 32, giving object types 32 and above.

use log::trace;

use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::ParseError;

pub const AAC_MAIN: u8 = 1;
pub const AAC_LC: u8 = 2;
pub const AAC_SSR: u8 = 3;
pub const AAC_LTP: u8 = 4;
/// Spectral Band Replication.
pub const SBR: u8 = 5;
pub const AAC_SCALABLE: u8 = 6;
pub const TWINVQ: u8 = 7;
pub const CELP: u8 = 8;
pub const HVXC: u8 = 9;
pub const TTSI: u8 = 12;
pub const MAIN_SYNTHETIC: u8 = 13;
pub const WAVETABLE_SYNTHESIS: u8 = 14;
pub const GENERAL_MIDI: u8 = 15;
pub const ALGORITHMIC_SYNTHESIS: u8 = 16;
pub const ER_AAC_LC: u8 = 17;
pub const ER_AAC_LTP: u8 = 19;
pub const ER_AAC_SCALABLE: u8 = 20;
pub const ER_TWINVQ: u8 = 21;
/// Error resilient Bit Sliced Arithmetic Coding.
pub const ER_BSAC: u8 = 22;
pub const ER_AAC_LD: u8 = 23;
pub const ER_CELP: u8 = 24;
pub const ER_HVXC: u8 = 25;
pub const ER_HILN: u8 = 26;
pub const ER_PARAMETRIC: u8 = 27;
pub const SSC: u8 = 28;
/// Parametric Stereo.
pub const PS: u8 = 29;
pub const MPEG_SURROUND: u8 = 30;
pub const LAYER_1: u8 = 32;
pub const LAYER_2: u8 = 33;
pub const LAYER_3: u8 = 34;
pub const DST: u8 = 35;
pub const ALS: u8 = 36;
pub const SLS: u8 = 37;
pub const SLS_NON_CORE: u8 = 38;
pub const ER_AAC_ELD: u8 = 39;
pub const SMR_SIMPLE: u8 = 40;
pub const SMR_MAIN: u8 = 41;

/// 5-bit value announcing the 6-bit extended form.
pub const ESCAPE: u8 = 31;

pub fn read_object_type(reader: &mut BsIoSliceReader) -> Result<u8, ParseError> {
    let mut object_type: u8 = reader.get_n(5)?;

    if object_type == ESCAPE {
        object_type = 32 + reader.get_n::<u8>(6)?;
    }

    trace!("audioObjectType = {object_type}");

    Ok(object_type)
}

/// Human-readable name for diagnostics, `None` for unassigned values.
pub fn object_type_name(object_type: u8) -> Option<&'static str> {
    let name = match object_type {
        AAC_MAIN => "AAC Main",
        AAC_LC => "AAC LC",
        AAC_SSR => "AAC SSR",
        AAC_LTP => "AAC LTP",
        SBR => "SBR",
        AAC_SCALABLE => "AAC Scalable",
        TWINVQ => "TwinVQ",
        CELP => "CELP",
        HVXC => "HVXC",
        TTSI => "TTSI",
        MAIN_SYNTHETIC => "Main Synthetic",
        WAVETABLE_SYNTHESIS => "Wavetable Synthesis",
        GENERAL_MIDI => "General MIDI",
        ALGORITHMIC_SYNTHESIS => "Algorithmic Synthesis",
        ER_AAC_LC => "ER AAC LC",
        ER_AAC_LTP => "ER AAC LTP",
        ER_AAC_SCALABLE => "ER AAC Scalable",
        ER_TWINVQ => "ER TwinVQ",
        ER_BSAC => "ER BSAC",
        ER_AAC_LD => "ER AAC LD",
        ER_CELP => "ER CELP",
        ER_HVXC => "ER HVXC",
        ER_HILN => "ER HILN",
        ER_PARAMETRIC => "ER Parametric",
        SSC => "SSC",
        PS => "PS",
        MPEG_SURROUND => "MPEG Surround",
        LAYER_1 => "MPEG Layer 1",
        LAYER_2 => "MPEG Layer 2",
        LAYER_3 => "MPEG Layer 3",
        DST => "DST",
        ALS => "ALS",
        SLS => "SLS",
        SLS_NON_CORE => "SLS Non-Core",
        ER_AAC_ELD => "ER AAC ELD",
        SMR_SIMPLE => "SMR Simple",
        SMR_MAIN => "SMR Main",
        _ => return None,
    };

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_read_five_bits_only() -> Result<(), ParseError> {
        for value in 0u8..31 {
            let buf = [value << 3];
            let mut reader = BsIoSliceReader::from_slice(&buf);

            assert_eq!(read_object_type(&mut reader)?, value);
            assert_eq!(reader.position(), 5);
        }

        Ok(())
    }

    #[test]
    fn escape_adds_six_bit_extension() -> Result<(), ParseError> {
        // 11111 000010 -> 32 + 2
        let mut reader = BsIoSliceReader::from_slice(&[0b1111_1000, 0b0100_0000]);

        assert_eq!(read_object_type(&mut reader)?, LAYER_3);
        assert_eq!(reader.position(), 11);

        // 11111 111111 -> 32 + 63
        let mut reader = BsIoSliceReader::from_slice(&[0xFF, 0xE0]);
        assert_eq!(read_object_type(&mut reader)?, 95);

        Ok(())
    }

    #[test]
    fn escape_without_extension_bits_is_truncated() {
        let mut reader = BsIoSliceReader::from_slice(&[0b1111_1000]);

        let err = read_object_type(&mut reader).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn fewer_than_five_bits_is_truncated() {
        let mut reader = BsIoSliceReader::from_slice(&[0x10]);
        reader.skip_n(4).unwrap();

        assert!(read_object_type(&mut reader).unwrap_err().is_truncated());
    }

    #[test]
    fn names() {
        assert_eq!(object_type_name(AAC_LC), Some("AAC LC"));
        assert_eq!(object_type_name(ER_AAC_ELD), Some("ER AAC ELD"));
        assert_eq!(object_type_name(0), None);
        assert_eq!(object_type_name(ESCAPE), None);
    }
}
