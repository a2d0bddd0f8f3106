//! Decoder mode selection from AAC extradata.
//!
//! Decoders that handle plain AAC, HE-AAC and HE-AAC v2 as distinct input
//! formats need to know which one a stream uses before the first packet is
//! decoded. The SBR/PS flags of the [`AudioConfig`] decide it; when the
//! configuration cannot be parsed the generic AAC format is used.

use std::fmt::Display;

use log::{info, warn};

use crate::structs::audio_config::AudioConfig;
use crate::utils::errors::ParseError;

/// Output frames requested per conversion for AAC.
pub const AAC_PACKETS_PER_CONVERSION: u32 = 1024;

/// Extradata of this size or smaller only carries the core header.
pub const MIN_PARSED_EXTRADATA_LEN: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AacProfile {
    #[default]
    Aac,
    /// AAC + SBR.
    HeAac,
    /// AAC + SBR + PS.
    HeAacV2,
}

impl Display for AacProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AacProfile::Aac => write!(f, "AAC"),
            AacProfile::HeAac => write!(f, "HE-AAC"),
            AacProfile::HeAacV2 => write!(f, "HE-AAC v2"),
        }
    }
}

/// Source format to configure an AAC decoder with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFormat {
    pub profile: AacProfile,
    /// Doubled when SBR is present, since SBR doubles the output frame size.
    pub packets_per_conversion: u32,
    /// The parsed configuration, when parsing was attempted and succeeded.
    pub config: Option<AudioConfig>,
}

impl Default for SourceFormat {
    fn default() -> Self {
        Self {
            profile: AacProfile::Aac,
            packets_per_conversion: AAC_PACKETS_PER_CONVERSION,
            config: None,
        }
    }
}

impl SourceFormat {
    /// Never fails: a configuration that cannot be parsed is logged and the
    /// generic AAC format is returned.
    pub fn from_extradata(extradata: &[u8]) -> Self {
        match Self::try_from_extradata(extradata) {
            Ok(format) => format,
            Err(e) => {
                warn!("failed to parse audio decoder config ({e})");
                Self::default()
            }
        }
    }

    pub fn try_from_extradata(extradata: &[u8]) -> Result<Self, ParseError> {
        if extradata.len() <= MIN_PARSED_EXTRADATA_LEN {
            return Ok(Self::default());
        }

        let config = AudioConfig::parse(extradata)?;

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AudioConfig) -> Self {
        let mut format = Self::default();

        if config.extension.sbr_present || config.extension.ps_present {
            format.packets_per_conversion *= 2;
        }

        if config.extension.sbr_present {
            info!("HE-AAC SBR detected");
            format.profile = AacProfile::HeAac;
        }

        if config.extension.ps_present {
            info!("HE-AAC PS detected");
            format.profile = AacProfile::HeAacV2;
        }

        format.config = Some(config);
        format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn short_extradata_is_not_parsed() -> Result<()> {
        // Would be reserved index 0xD if parsed
        let format = SourceFormat::try_from_extradata(&[0x16, 0x90])?;

        assert_eq!(format, SourceFormat::default());
        assert_eq!(format.packets_per_conversion, AAC_PACKETS_PER_CONVERSION);

        assert_eq!(SourceFormat::from_extradata(&[]), SourceFormat::default());

        Ok(())
    }

    #[test]
    fn plain_aac() -> Result<()> {
        let format = SourceFormat::try_from_extradata(&[0x12, 0x10, 0x56, 0xE5, 0x00])?;

        assert_eq!(format.profile, AacProfile::Aac);
        assert_eq!(format.packets_per_conversion, 1024);
        assert!(format.config.is_some());

        Ok(())
    }

    #[test]
    fn he_aac_doubles_packets() -> Result<()> {
        let format = SourceFormat::try_from_extradata(&[0x2B, 0x8A, 0x08, 0x00])?;

        assert_eq!(format.profile, AacProfile::HeAac);
        assert_eq!(format.packets_per_conversion, 2048);

        Ok(())
    }

    #[test]
    fn he_aac_v2() -> Result<()> {
        let explicit = SourceFormat::try_from_extradata(&[0xEB, 0x11, 0x88, 0x00])?;
        let implicit =
            SourceFormat::try_from_extradata(&[0x13, 0x90, 0x56, 0xE5, 0x9D, 0x48, 0x80])?;

        for format in [explicit, implicit] {
            assert_eq!(format.profile, AacProfile::HeAacV2);
            assert_eq!(format.packets_per_conversion, 2048);
        }

        Ok(())
    }

    #[test]
    fn parse_failure_falls_back_to_generic_format() {
        // ER AAC LD is rejected by the parser
        let data = [0xB9, 0x88, 0x00];

        assert!(SourceFormat::try_from_extradata(&data).is_err());
        assert_eq!(SourceFormat::from_extradata(&data), SourceFormat::default());
    }

    #[test]
    fn profile_names() {
        assert_eq!(AacProfile::Aac.to_string(), "AAC");
        assert_eq!(AacProfile::HeAac.to_string(), "HE-AAC");
        assert_eq!(AacProfile::HeAacV2.to_string(), "HE-AAC v2");
    }
}
