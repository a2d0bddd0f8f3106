use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Result, bail, ensure};

/// Extradata larger than this is certainly not an AudioSpecificConfig.
pub const MAX_CONFIG_LEN: u64 = 64 * 1024;

/// Unified input reader that handles both file and pipe input
pub struct InputReader {
    reader: Box<dyn Read>,
    is_pipe: bool,
}

impl InputReader {
    /// Create a new InputReader from a path
    /// Use "-" for stdin pipe input
    pub fn new<P: AsRef<Path>>(input_path: P) -> Result<Self> {
        let path_str = input_path.as_ref().to_string_lossy();
        let is_pipe = path_str == "-";

        let reader: Box<dyn Read> = if is_pipe {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(input_path)?;
            Box::new(BufReader::new(file))
        };

        Ok(Self { reader, is_pipe })
    }

    /// Check if this is pipe input
    pub fn is_pipe(&self) -> bool {
        self.is_pipe
    }

    /// Read all remaining data, up to [`MAX_CONFIG_LEN`] bytes
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader
            .by_ref()
            .take(MAX_CONFIG_LEN + 1)
            .read_to_end(&mut data)?;

        ensure!(
            data.len() as u64 <= MAX_CONFIG_LEN,
            "Input exceeds {MAX_CONFIG_LEN} bytes; expected raw decoder specific info"
        );

        Ok(data)
    }
}

/// Parse a hex string such as "1210", "12 10", "12:10" or "0x1210".
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let digits: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.len() % 2 != 0 {
        bail!("Hex string has an odd number of digits ({})", digits.len());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let byte: String = pair.iter().collect();
            u8::from_str_radix(&byte, 16)
                .map_err(|e| anyhow::anyhow!("Invalid hex byte {byte:?}: {e}"))
        })
        .collect()
}

pub fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() -> Result<()> {
        assert_eq!(parse_hex("1210")?, vec![0x12, 0x10]);
        assert_eq!(parse_hex(" 0xeb11 8800 ")?, vec![0xEB, 0x11, 0x88, 0x00]);
        assert_eq!(parse_hex("13:90:56")?, vec![0x13, 0x90, 0x56]);
        assert_eq!(parse_hex("")?, Vec::<u8>::new());

        Ok(())
    }

    #[test]
    fn bad_hex() {
        assert!(parse_hex("121").is_err());
        assert!(parse_hex("12zz").is_err());
    }

    #[test]
    fn hex_output() {
        assert_eq!(format_hex(&[0x03, 0x19, 0xAB]), "03 19 AB");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn reads_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("mp4ascd-input-{}.bin", std::process::id()));
        std::fs::write(&path, [0x12, 0x10])?;

        let mut reader = InputReader::new(&path)?;
        assert!(!reader.is_pipe());
        assert_eq!(reader.read_all()?, vec![0x12, 0x10]);

        std::fs::remove_file(&path)?;

        Ok(())
    }
}
