//! Tile-layer `<data>` payload decoding.
//!
//! The declared encoding and optional compression turn the element's raw
//! text into an ordered, row-major sequence of flipped global tile
//! identifiers. The decoder does not check the identifier count against
//! the layer size; that cross-check belongs to callers.

use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::read::ZlibDecoder;
use tmx_core::{Error, FlippedGlobalId, Result};

use crate::model::{Compression, Data, DataFormat, Encoding};
use crate::reader::{helpers, names};
use crate::xml::Element;

/// Reads a `<data>` element into its declared format and decoded ids.
pub(crate) fn read_data(data: &Element) -> Result<Data> {
    let format = read_format(data)?;
    let ids = decode_ids(format, data.text())?;
    Ok(Data { format, ids })
}

fn read_format(data: &Element) -> Result<DataFormat> {
    Ok(DataFormat {
        encoding: read_encoding(data)?,
        compression: read_compression(data)?,
    })
}

fn read_encoding(data: &Element) -> Result<Encoding> {
    let raw = data.attribute(names::ENCODING)?;
    match raw {
        names::ENCODING_CSV => Ok(Encoding::Csv),
        names::ENCODING_BASE64 => Ok(Encoding::Base64),
        _ => Err(helpers::invalid(names::ENCODING, raw)),
    }
}

fn read_compression(data: &Element) -> Result<Compression> {
    match data.opt_attribute(names::COMPRESSION) {
        None => Ok(Compression::None),
        Some(names::COMPRESSION_ZLIB) => Ok(Compression::Zlib),
        Some(raw) => Err(helpers::invalid(names::COMPRESSION, raw)),
    }
}

/// Decodes the raw payload text according to the declared format.
pub(crate) fn decode_ids(format: DataFormat, text: &str) -> Result<Vec<FlippedGlobalId>> {
    match (format.encoding, format.compression) {
        (Encoding::Csv, Compression::None) => decode_csv(text),
        (Encoding::Base64, compression) => decode_base64(text, compression),
        (encoding, compression) => Err(Error::UnsupportedDataFormat {
            encoding: encoding.to_string(),
            compression: compression.to_string(),
        }),
    }
}

fn decode_csv(text: &str) -> Result<Vec<FlippedGlobalId>> {
    let mut ids = Vec::new();

    for line in text.trim().lines() {
        // Every row but the last ends with a single comma on the wire;
        // any further trailing comma leaves an empty token behind.
        let line = line.trim();
        let line = line.strip_suffix(',').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        for token in line.split(',') {
            let token = token.trim();
            let id: u32 = token
                .parse()
                .map_err(|_| Error::TextConversion(format!("bad tile id token: \"{token}\"")))?;
            ids.push(FlippedGlobalId(id));
        }
    }

    Ok(ids)
}

fn decode_base64(text: &str, compression: Compression) -> Result<Vec<FlippedGlobalId>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| Error::MalformedPayload(format!("base64: {e}")))?;

    let bytes = match compression {
        Compression::None => bytes,
        Compression::Zlib => {
            let mut inflated = Vec::new();
            ZlibDecoder::new(&bytes[..])
                .read_to_end(&mut inflated)
                .map_err(|e| Error::MalformedPayload(format!("zlib: {e}")))?;
            inflated
        }
    };

    if bytes.len() % 4 != 0 {
        return Err(Error::MalformedPayload(format!(
            "payload length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| FlippedGlobalId(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect())
}
