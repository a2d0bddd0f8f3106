//! Utility functions and supporting infrastructure.
//!
//! Provides bounds-checked bitstream reading and the error types shared by
//! the configuration parser and the decoder-facing helpers.

pub mod bitstream_io;
pub mod errors;
