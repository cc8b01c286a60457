use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Text encodings accepted for input tables
// ---------------------------------------------------------------------------

/// Text encoding of an input table.
///
/// `Utf16` follows the usual codec convention: a byte-order mark selects the
/// endianness, and little-endian is assumed when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "utf-16", alias = "utf16")]
    #[value(name = "utf-16", alias = "utf16")]
    Utf16,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "UTF-8"),
            Encoding::Utf16 => write!(f, "UTF-16"),
        }
    }
}

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

impl Encoding {
    /// Decode raw file bytes into text, dropping any byte-order mark.
    ///
    /// The error is a human-readable description of why decoding failed.
    pub fn decode(self, bytes: &[u8]) -> Result<String, String> {
        match self {
            Encoding::Utf8 => {
                let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
                String::from_utf8(body.to_vec()).map_err(|e| e.to_string())
            }
            Encoding::Utf16 => decode_utf16(bytes),
        }
    }

    /// Encode text the way [`decode`](Self::decode) expects to read it back.
    /// UTF-16 output is little-endian with a byte-order mark.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16 => {
                let mut out = UTF16_LE_BOM.to_vec();
                out.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                out
            }
        }
    }
}

fn decode_utf16(bytes: &[u8]) -> Result<String, String> {
    let (body, big_endian) = if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        (rest, true)
    } else {
        (bytes.strip_prefix(&UTF16_LE_BOM).unwrap_or(bytes), false)
    };

    if body.len() % 2 != 0 {
        return Err(format!("odd number of bytes ({}) in UTF-16 data", body.len()));
    }

    let units = body.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| e.to_string())
}
