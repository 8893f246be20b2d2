//! Splitting identifier lists into request-sized chunks

/// Split `ids` into consecutive chunks of at most `chunk_size` elements
///
/// Order is preserved and every identifier lands in exactly one chunk; only
/// the last chunk may be shorter. A `chunk_size` of zero is treated as one.
pub fn to_chunks(ids: &[String], chunk_size: usize) -> Vec<&[String]> {
    ids.chunks(chunk_size.max(1)).collect()
}
