//! Document entry point: decode one WXR export stream.

use std::io::Read;

use crate::engine::Decoder;
use crate::error::Result;
use crate::types::Rss;

/// Decode a WXR document from a readable byte stream.
///
/// The stream is read once to the end; callers own retry, deadline, and
/// decompression concerns. A read failure surfaces as `TruncatedInput`.
///
/// # Arguments
/// * `reader` - Stream containing a well-formed WXR document
///
/// # Returns
/// The populated [`Rss`] record graph.
///
/// # Errors
/// Any [`WxrError`](crate::WxrError) from reading or decoding.
pub fn decode<R: Read>(mut reader: R) -> Result<Rss> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    decode_str(&xml)
}

/// Decode a WXR document held in memory.
///
/// # Errors
/// Any [`WxrError`](crate::WxrError) from decoding.
pub fn decode_str(xml: &str) -> Result<Rss> {
    let rss: Rss = Decoder::new().decode_document(xml)?;
    tracing::debug!(
        categories = rss.channel.categories.len(),
        items = rss.channel.items.len(),
        wxr_version = %rss.channel.wxr_version,
        "decoded WXR document"
    );
    Ok(rss)
}
