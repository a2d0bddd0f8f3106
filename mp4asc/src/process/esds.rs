//! `ES_Descriptor` wrapping of decoder specific info.
//!
//! Some decoders take the AAC configuration as a complete MPEG-4 elementary
//! stream descriptor rather than the bare `AudioSpecificConfig`:
//!
//! ```text
//! ES_Descriptor            03 len  ES_ID(2) flags(1)
//!   DecoderConfigDescriptor  04 len  objectTypeIndication streamType bufferSizeDB(3)
//!                                  maxBitrate(4) avgBitrate(4)
//!     DecoderSpecificInfo      05 len  <extradata>
//!   SLConfigDescriptor       06 01 02
//! ```
//!
//! All lengths use the single-byte form.

use crate::utils::errors::EsdsError;

pub const ES_DESCRIPTOR_TAG: u8 = 0x03;
pub const DECODER_CONFIG_DESCRIPTOR_TAG: u8 = 0x04;
pub const DECODER_SPECIFIC_INFO_TAG: u8 = 0x05;
pub const SL_CONFIG_DESCRIPTOR_TAG: u8 = 0x06;

/// objectTypeIndication for MPEG-4 Audio.
pub const OBJECT_TYPE_INDICATION_MPEG4_AUDIO: u8 = 0x40;
/// streamType 5 (audio), upStream 0, reserved 1.
pub const STREAM_TYPE_AUDIO: u8 = 0x05 << 2 | 1;

pub const BUFFER_SIZE_DB: u32 = 0x00_1800;
pub const MAX_BITRATE: u32 = 0x0008_0000;
pub const AVG_BITRATE: u32 = 0x0004_0000;

/// SLConfigDescriptor predefined = 2 (MP4 file).
pub const SL_CONFIG_PREDEFINED_MP4: u8 = 0x02;

/// Bytes added around the extradata.
pub const ES_DESCRIPTOR_OVERHEAD: usize = 25;

/// Largest extradata whose ES_Descriptor length still fits in one byte.
pub const MAX_EXTRADATA_LEN: usize = u8::MAX as usize + 2 - ES_DESCRIPTOR_OVERHEAD;

pub fn build_es_descriptor(extradata: &[u8]) -> Result<Vec<u8>, EsdsError> {
    if extradata.len() > MAX_EXTRADATA_LEN {
        return Err(EsdsError::ExtradataTooLong {
            len: extradata.len(),
            max: MAX_EXTRADATA_LEN,
        });
    }

    let size = extradata.len() + ES_DESCRIPTOR_OVERHEAD;
    let mut out = Vec::with_capacity(size);

    out.push(ES_DESCRIPTOR_TAG);
    out.push((size - 2) as u8);
    out.extend_from_slice(&[0, 0]); // ES_ID
    out.push(0); // flags

    out.push(DECODER_CONFIG_DESCRIPTOR_TAG);
    out.push((size - 10) as u8);
    out.push(OBJECT_TYPE_INDICATION_MPEG4_AUDIO);
    out.push(STREAM_TYPE_AUDIO);
    out.extend_from_slice(&BUFFER_SIZE_DB.to_be_bytes()[1..]);
    out.extend_from_slice(&MAX_BITRATE.to_be_bytes());
    out.extend_from_slice(&AVG_BITRATE.to_be_bytes());

    out.push(DECODER_SPECIFIC_INFO_TAG);
    out.push(extradata.len() as u8);
    out.extend_from_slice(extradata);

    out.extend_from_slice(&[SL_CONFIG_DESCRIPTOR_TAG, 0x01, SL_CONFIG_PREDEFINED_MP4]);

    debug_assert_eq!(out.len(), size);

    Ok(out)
}
