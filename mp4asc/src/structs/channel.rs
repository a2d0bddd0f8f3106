//! Channel configuration signalling.

use std::fmt::Display;

/// 4-bit `channelConfiguration` field.
///
/// Values 8..=15 are kept as [`ChannelConfiguration::Unsupported`] with the
/// raw value, so that they stay distinguishable from `None` (which requires
/// an inline program config element).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelConfiguration {
    /// Layout described by a `program_config_element()`.
    #[default]
    None,
    Mono,
    Stereo,
    StereoPlusCenter,
    StereoPlusCenterPlusRearMono,
    Five,
    FivePlusOne,
    SevenPlusOne,
    Unsupported(u8),
}

impl ChannelConfiguration {
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Mono,
            2 => Self::Stereo,
            3 => Self::StereoPlusCenter,
            4 => Self::StereoPlusCenterPlusRearMono,
            5 => Self::Five,
            6 => Self::FivePlusOne,
            7 => Self::SevenPlusOne,
            _ => Self::Unsupported(value),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::StereoPlusCenter => 3,
            Self::StereoPlusCenterPlusRearMono => 4,
            Self::Five => 5,
            Self::FivePlusOne => 6,
            Self::SevenPlusOne => 7,
            Self::Unsupported(value) => value,
        }
    }

    /// Physical channel count; 0 when not derivable from this field alone.
    pub fn channel_count(self) -> u32 {
        match self {
            Self::SevenPlusOne => 8,
            Self::Unsupported(_) => 0,
            other => other.raw() as u32,
        }
    }
}

impl Display for ChannelConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "PCE"),
            Self::Mono => write!(f, "1.0"),
            Self::Stereo => write!(f, "2.0"),
            Self::StereoPlusCenter => write!(f, "3.0"),
            Self::StereoPlusCenterPlusRearMono => write!(f, "4.0"),
            Self::Five => write!(f, "5.0"),
            Self::FivePlusOne => write!(f, "5.1"),
            Self::SevenPlusOne => write!(f, "7.1"),
            Self::Unsupported(value) => write!(f, "unsupported ({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        for value in 0u8..=6 {
            assert_eq!(ChannelConfiguration::from_raw(value).channel_count(), value as u32);
        }

        assert_eq!(ChannelConfiguration::from_raw(7).channel_count(), 8);

        for value in 8u8..=15 {
            let config = ChannelConfiguration::from_raw(value);

            assert_eq!(config, ChannelConfiguration::Unsupported(value));
            assert_eq!(config.channel_count(), 0);
            assert_eq!(config.raw(), value);
        }
    }

    #[test]
    fn raw_value_survives_conversion() {
        for value in 0u8..16 {
            assert_eq!(ChannelConfiguration::from_raw(value).raw(), value);
        }
    }
}
