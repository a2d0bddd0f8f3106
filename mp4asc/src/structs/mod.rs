//! Data structures and grammar productions of the MPEG-4 audio decoder
//! configuration.

pub mod audio_config;
pub mod channel;
pub mod object_type;
pub mod sampling_frequency;
