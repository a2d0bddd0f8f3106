//! MPEG-4 `AudioSpecificConfig` parsing.
//!
//! ## Coverage
//!
//! The parser decodes the common header (object type, sampling frequency,
//! channel configuration), the explicit HE-AAC signalling where the header
//! object type is SBR or PS, `GASpecificConfig()` for AAC Main and AAC LC,
//! and the backward-compatible sync extension that carries implicit SBR/PS
//! signalling after the core configuration.
//!
//! Productions the parser does not model (`program_config_element()`, the
//! `extensionFlag3` payload) end the walk with [`Unsupported`]. When that
//! happens after the core header has been decoded, the configuration decoded
//! so far is returned as a success.

use log::{debug, trace};

use crate::structs::channel::ChannelConfiguration;
use crate::structs::object_type::{
    AAC_LC, AAC_MAIN, AAC_SCALABLE, ER_AAC_LC, ER_AAC_LD, ER_AAC_SCALABLE, ER_BSAC, PS, SBR,
    read_object_type,
};
use crate::structs::sampling_frequency::SamplingFrequency;
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::errors::{ParseError, Unsupported};

/// 11-bit `syncExtensionType` introducing SBR signalling.
pub const SYNC_EXTENSION_SBR: u16 = 0x2B7;

/// 11-bit `syncExtensionType` introducing PS signalling.
pub const SYNC_EXTENSION_PS: u16 = 0x548;

/// Minimum number of remaining bits for a sync extension to be attempted.
pub const SYNC_EXTENSION_MIN_BITS: u64 = 16;

const PS_SYNC_MIN_BITS: u64 = 12;

/// SBR/PS extension parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SbrPsExtension {
    pub sbr_present: bool,
    pub ps_present: bool,
    pub object_type: u8,
    pub sampling_frequency_index: u8,
    pub sampling_frequency: u32,
}

impl SbrPsExtension {
    fn set_sampling_frequency(&mut self, sf: SamplingFrequency) {
        self.sampling_frequency_index = sf.index;
        self.sampling_frequency = sf.frequency;
    }
}

/// Decoded audio decoder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioConfig {
    /// Core coder object type. For explicitly signalled HE-AAC this is the
    /// underlying object type, not SBR/PS.
    pub object_type: u8,
    pub sampling_frequency_index: u8,
    pub sampling_frequency: u32,
    pub channel_configuration: ChannelConfiguration,
    pub channel_count: u32,
    pub frame_length_flag: bool,
    pub depends_on_core_coder: bool,
    pub core_coder_delay: u16,
    pub extension: SbrPsExtension,
}

/// Parses an `AudioSpecificConfig` from container extradata.
pub fn parse_audio_config(data: &[u8]) -> Result<AudioConfig, ParseError> {
    AudioConfig::parse(data)
}

impl AudioConfig {
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut config = Self::default();
        config.parse_into(data)?;

        Ok(config)
    }

    /// Resets `self` and parses `data` into it.
    ///
    /// On error, the fields decoded before the failure are left in place.
    pub fn parse_into(&mut self, data: &[u8]) -> Result<(), ParseError> {
        *self = Self::default();

        let mut reader = BsIoSliceReader::from_slice(data);

        self.object_type = read_object_type(&mut reader)?;

        let sf = SamplingFrequency::read(&mut reader)?;
        self.sampling_frequency_index = sf.index;
        self.sampling_frequency = sf.frequency;

        self.channel_configuration = ChannelConfiguration::from_raw(reader.get_n(4)?);
        self.channel_count = self.channel_configuration.channel_count();

        trace!(
            "channelConfiguration = {}, channel_count = {}",
            self.channel_configuration.raw(),
            self.channel_count
        );

        if matches!(self.object_type, SBR | PS) {
            self.read_explicit_extension(&mut reader)?;
        }

        match self.object_type {
            AAC_MAIN | AAC_LC => {
                let mut result = self.read_ga_specific_info(&mut reader);

                if result.is_ok()
                    && self.extension.object_type != SBR
                    && reader.available() >= SYNC_EXTENSION_MIN_BITS
                {
                    result = self.read_sync_extension(&mut reader);
                }

                match result {
                    Err(ParseError::NotSupported(what)) => {
                        debug!(
                            "AudioSpecificConfig tail not decoded at bit {}: {what}",
                            reader.position()
                        );
                    }
                    other => other?,
                }
            }
            object_type => return Err(Unsupported::ObjectType(object_type).into()),
        }

        Ok(())
    }

    /// Hierarchical HE-AAC signalling: the header object type is SBR or PS
    /// and the core object type follows the extension sampling frequency.
    fn read_explicit_extension(&mut self, reader: &mut BsIoSliceReader) -> Result<(), ParseError> {
        self.extension.object_type = SBR;
        self.extension.sbr_present = true;
        self.extension.ps_present = self.object_type == PS;

        self.extension
            .set_sampling_frequency(SamplingFrequency::read(reader)?);

        self.object_type = read_object_type(reader)?;

        if self.object_type == ER_BSAC {
            // extensionChannelConfiguration
            reader.skip_n(4)?;
        }

        trace!(
            "explicit extension: sbr = {}, ps = {}, core object type = {}",
            self.extension.sbr_present, self.extension.ps_present, self.object_type
        );

        Ok(())
    }

    /// `GASpecificConfig()`.
    pub(crate) fn read_ga_specific_info(
        &mut self,
        reader: &mut BsIoSliceReader,
    ) -> Result<(), ParseError> {
        self.frame_length_flag = reader.get()?;
        self.depends_on_core_coder = reader.get()?;

        self.core_coder_delay = if self.depends_on_core_coder {
            reader.get_n(14)?
        } else {
            0
        };

        let extension_flag = reader.get()?;

        trace!(
            "GASpecificConfig: frameLengthFlag = {}, dependsOnCoreCoder = {}, coreCoderDelay = {}, extensionFlag = {}",
            self.frame_length_flag, self.depends_on_core_coder, self.core_coder_delay, extension_flag
        );

        if self.channel_configuration == ChannelConfiguration::None {
            return Err(Unsupported::ProgramConfigElement.into());
        }

        if matches!(self.object_type, AAC_SCALABLE | ER_AAC_SCALABLE) {
            // layerNr
            reader.skip_n(3)?;
        }

        if extension_flag {
            if self.object_type == ER_BSAC {
                // numOfSubFrame, layer_length
                reader.skip_n(16)?;
            }

            if matches!(self.object_type, ER_AAC_LC | ER_AAC_SCALABLE | ER_AAC_LD) {
                // section, scalefactor and spectral data resilience flags
                reader.skip_n(3)?;
            }

            if reader.get()? {
                return Err(Unsupported::ExtensionFlag3.into());
            }
        }

        Ok(())
    }

    /// Backward-compatible SBR/PS signalling appended after the core config.
    ///
    /// An unrecognised `syncExtensionType` leaves the extension untouched.
    pub(crate) fn read_sync_extension(
        &mut self,
        reader: &mut BsIoSliceReader,
    ) -> Result<(), ParseError> {
        if reader.available() < SYNC_EXTENSION_MIN_BITS {
            return Err(ParseError::TruncatedInput {
                needed: SYNC_EXTENSION_MIN_BITS as u32,
                position: reader.position(),
                available: reader.available(),
            });
        }

        let sync_extension_type: u16 = reader.get_n(11)?;

        if sync_extension_type != SYNC_EXTENSION_SBR {
            trace!("syncExtensionType {sync_extension_type:#05X} not recognised");
            return Ok(());
        }

        self.extension.object_type = read_object_type(reader)?;

        match self.extension.object_type {
            SBR => {
                self.extension.sbr_present = reader.get()?;

                if self.extension.sbr_present {
                    self.extension
                        .set_sampling_frequency(SamplingFrequency::read(reader)?);

                    if reader.available() >= PS_SYNC_MIN_BITS {
                        let sync_extension_type: u16 = reader.get_n(11)?;

                        if sync_extension_type == SYNC_EXTENSION_PS {
                            self.extension.ps_present = reader.get()?;
                        }
                    }
                }
            }
            ER_BSAC => {
                self.extension.sbr_present = reader.get()?;

                if self.extension.sbr_present {
                    self.extension
                        .set_sampling_frequency(SamplingFrequency::read(reader)?);
                }

                // extensionChannelConfiguration
                reader.skip_n(4)?;
            }
            _ => {}
        }

        trace!(
            "sync extension: object type = {}, sbr = {}, ps = {}",
            self.extension.object_type, self.extension.sbr_present, self.extension.ps_present
        );

        Ok(())
    }

    /// Output sampling frequency once SBR is applied.
    pub fn output_sampling_frequency(&self) -> u32 {
        if self.extension.sbr_present && self.extension.sampling_frequency != 0 {
            self.extension.sampling_frequency
        } else {
            self.sampling_frequency
        }
    }
}
