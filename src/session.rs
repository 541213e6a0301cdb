//! Prompt, parse and print around the encoder.
//!
//! A session writes [`PROMPT`], reads one line of hexadecimal text, encodes it and writes
//! `The hamming code is <hex>`. The reader and writer are generic so the binary can hand in
//! stdin and stdout while tests use in-memory buffers.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::cs::ecc::hamming::{encode_with_order, PackOrder};
use crate::error::{Error, Result};

pub const PROMPT: &str = "Enter a four-digit hexadecimal value: ";

/// How a codeword is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Lowercase hex with no padding, e.g. `108009`.
    #[default]
    Integer,
    /// Three big-endian bytes as six hex digits, e.g. `000007`.
    Bytes,
}

/// Settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    pub order: PackOrder,
    pub format: OutputFormat,
}

/// Parses hexadecimal text the way `scanf("%x")` reads it.
///
/// Surrounding whitespace and a `0x` prefix are accepted. Anything wider than 32 bits is
/// rejected; wider than 16 bits is accepted here and truncated by the encoder.
pub fn parse_hex_value(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(Error::EmptyInput);
    }
    let value = u32::from_str_radix(digits, 16).map_err(|source| Error::InvalidHex {
        input: trimmed.to_string(),
        source,
    })?;
    debug!("parsed '{}' as {:#x}", trimmed, value);
    Ok(value)
}

/// Encodes a parsed value, warning when bits above the low 16 are dropped.
pub fn encode_value(value: u32, options: &EncoderOptions) -> u32 {
    if value > u32::from(u16::MAX) {
        warn!(
            "{:#x} is wider than 16 bits; encoding the low 16 bits {:#06x}",
            value,
            value & 0xffff
        );
    }
    encode_with_order(value, options.order)
}

/// Renders a codeword without the surrounding sentence.
pub fn render_codeword(codeword: u32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Integer => format!("{:x}", codeword),
        OutputFormat::Bytes => hex::encode(&codeword.to_be_bytes()[1..]),
    }
}

/// Writes the result line for `codeword`.
pub fn write_result<W: Write>(output: &mut W, codeword: u32, format: OutputFormat) -> Result<()> {
    writeln!(output, "The hamming code is {}", render_codeword(codeword, format))?;
    Ok(())
}

/// Runs one prompt/encode/print exchange and returns the codeword.
pub fn run_session<R, W>(input: &mut R, output: &mut W, options: &EncoderOptions) -> Result<u32>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::EmptyInput);
    }

    let value = parse_hex_value(&line)?;
    let codeword = encode_value(value, options);
    write_result(output, codeword, options.format)?;
    Ok(codeword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(text: &str, options: EncoderOptions) -> (Result<u32>, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_session(&mut input, &mut output, &options);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_hex_value() {
        assert_eq!(parse_hex_value("1234").unwrap(), 0x1234);
        assert_eq!(parse_hex_value("  abcd\n").unwrap(), 0xabcd);
        assert_eq!(parse_hex_value("ABCD").unwrap(), 0xabcd);
        assert_eq!(parse_hex_value("0xFFFF").unwrap(), 0xffff);
        assert_eq!(parse_hex_value("0X1").unwrap(), 1);
        assert_eq!(parse_hex_value("12345").unwrap(), 0x12345);
    }

    #[test]
    fn test_parse_hex_value_errors() {
        assert!(matches!(parse_hex_value(""), Err(Error::EmptyInput)));
        assert!(matches!(parse_hex_value(" \n"), Err(Error::EmptyInput)));
        assert!(matches!(parse_hex_value("0x"), Err(Error::EmptyInput)));
        assert!(matches!(parse_hex_value("zz"), Err(Error::InvalidHex { .. })));
        assert!(matches!(parse_hex_value("12 34"), Err(Error::InvalidHex { .. })));
        assert!(matches!(
            parse_hex_value("123456789"),
            Err(Error::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_render_codeword() {
        assert_eq!(render_codeword(0x108009, OutputFormat::Integer), "108009");
        assert_eq!(render_codeword(0x7, OutputFormat::Integer), "7");
        assert_eq!(render_codeword(0x7, OutputFormat::Bytes), "000007");
        assert_eq!(render_codeword(0x1ffffe, OutputFormat::Bytes), "1ffffe");
    }

    #[test]
    fn test_encode_value_truncates() {
        let options = EncoderOptions::default();
        assert_eq!(encode_value(0x1_0001, &options), encode_value(0x0001, &options));
    }

    #[test]
    fn test_session() {
        let (result, output) = session("0001\n", EncoderOptions::default());
        assert_eq!(result.unwrap(), 0x108009);
        assert_eq!(
            output,
            "Enter a four-digit hexadecimal value: The hamming code is 108009\n"
        );
    }

    #[test]
    fn test_session_msb_first_bytes() {
        let options = EncoderOptions {
            order: PackOrder::MsbFirst,
            format: OutputFormat::Bytes,
        };
        let (result, output) = session("8000", options);
        assert_eq!(result.unwrap(), 0x1c0000);
        assert_eq!(output, format!("{}The hamming code is 1c0000\n", PROMPT));
    }

    #[test]
    fn test_session_errors() {
        let (result, output) = session("", EncoderOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
        assert_eq!(output, PROMPT);

        let (result, output) = session("nope\n", EncoderOptions::default());
        assert!(matches!(result, Err(Error::InvalidHex { .. })));
        assert_eq!(output, PROMPT);
    }
}
