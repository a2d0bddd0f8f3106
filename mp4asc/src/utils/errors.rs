#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Truncated input: {needed} bits needed at bit {position}, only {available} remain")]
    TruncatedInput {
        needed: u32,
        position: u64,
        available: u64,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(FormatViolation),

    #[error("Not supported: {0}")]
    NotSupported(Unsupported),
}

impl ParseError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    #[error("sampling_frequency_index {0:#X} is reserved")]
    ReservedSamplingFrequencyIndex(u8),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    #[error("program_config_element() is required when channel_configuration is 0")]
    ProgramConfigElement,

    #[error("extension_flag_3 payload")]
    ExtensionFlag3,

    #[error("audio object type {0}")]
    ObjectType(u8),
}

impl From<FormatViolation> for ParseError {
    fn from(value: FormatViolation) -> Self {
        Self::InvalidFormat(value)
    }
}

impl From<Unsupported> for ParseError {
    fn from(value: Unsupported) -> Self {
        Self::NotSupported(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EsdsError {
    #[error("Extradata too long for ES_Descriptor: {len} > {max} bytes")]
    ExtradataTooLong { len: usize, max: usize },
}
