use anyhow::Result;

use crate::input::{InputReader, parse_hex};
use command::SourceArgs;

pub mod command;
pub mod esds;
pub mod info;

/// Load the configuration bytes named by the source arguments.
pub fn load_source(source: &SourceArgs) -> Result<Vec<u8>> {
    match (&source.hex, &source.input) {
        (Some(hex), _) => parse_hex(hex),
        (None, Some(path)) => {
            let mut reader = InputReader::new(path)?;
            if reader.is_pipe() {
                log::debug!("Reading AudioSpecificConfig from stdin");
            } else {
                log::debug!("Reading AudioSpecificConfig from {}", path.display());
            }
            reader.read_all()
        }
        (None, None) => anyhow::bail!("No input given; pass a path or --hex"),
    }
}
