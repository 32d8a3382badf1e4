use std::path::Path;

use snap::raw::Decoder;

/// Reads a snappy-compressed SSZ asset, returning `None` when the asset
/// directory has not been downloaded or does not decompress.
pub fn read_ssz_snappy_bytes(path: &Path) -> Option<Vec<u8>> {
    let ssz_snappy = std::fs::read(path).ok()?;
    Decoder::new().decompress_vec(&ssz_snappy).ok()
}

pub fn read_ssz_snappy<T: ssz::Decode>(path: &Path) -> Option<T> {
    T::from_ssz_bytes(&read_ssz_snappy_bytes(path)?).ok()
}
