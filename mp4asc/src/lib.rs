#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! Parser for the MPEG-4 Audio `AudioSpecificConfig` carried as decoder
//! specific info in MP4 `esds` boxes and other container extradata.
//!
//! ### Bitstream Organization
//!
//! **Header**: audio object type (5 bits, escapable to 11), sampling
//! frequency index (4 bits, escapable to 28), channel configuration (4 bits).
//! **Explicit HE-AAC**: when the header object type is SBR or PS, an
//! extension sampling frequency and the core object type follow.
//! **GASpecificConfig**: frame length, core coder delay and extension flags
//! for AAC Main and AAC LC.
//! **Sync extension**: trailing `0x2B7` / `0x548` markers carrying implicit
//! SBR and PS signalling.
//!
//! ## Quick Start
//!
//! ```rust
//! use mp4asc::process::format::{AacProfile, SourceFormat};
//! use mp4asc::structs::audio_config::parse_audio_config;
//!
//! // AAC LC, 24 kHz core, stereo, explicit PS with a 48 kHz extension
//! let extradata = [0xEB, 0x11, 0x88, 0x00];
//!
//! let config = parse_audio_config(&extradata)?;
//! assert_eq!(config.object_type, 2);
//! assert!(config.extension.ps_present);
//! assert_eq!(config.extension.sampling_frequency, 48000);
//!
//! let format = SourceFormat::from_extradata(&extradata);
//! assert_eq!(format.profile, AacProfile::HeAacV2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Data structures and grammar productions.
///
/// - **Audio Config** ([`structs::audio_config`]): `AudioSpecificConfig` and SBR/PS extension
/// - **Object Types** ([`structs::object_type`]): Audio object type constants and reader
/// - **Sampling Frequency** ([`structs::sampling_frequency`]): Index table and escape
/// - **Channels** ([`structs::channel`]): Channel configuration
pub mod structs;

/// Consumers of the parsed configuration.
///
/// 1. **Decoder Mode** ([`process::format`]): AAC / HE-AAC / HE-AAC v2 selection.
/// 2. **ES Descriptor** ([`process::esds`]): `ES_Descriptor` wrapping of extradata.
pub mod process;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bounds-checked bit reading
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
