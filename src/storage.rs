//! lz4 compressed bincode files.

use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::Path};
use tracing::debug;

use crate::error::SceneError;

pub fn read_from_file<T, P>(path: &P) -> Result<T, SceneError>
where
    T: DeserializeOwned,
    P: AsRef<Path> + ?Sized,
{
    let bytes = fs::read(path)?;
    let decompressed_bytes = lz4_flex::decompress_size_prepended(&bytes)?;

    debug!(
        path = %path.as_ref().display(),
        compressed = bytes.len(),
        decompressed = decompressed_bytes.len(),
        "read file"
    );

    Ok(bincode::deserialize::<T>(&decompressed_bytes)?)
}

pub fn write_to_file<T, P>(value: &T, path: &P) -> Result<(), SceneError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path> + ?Sized,
{
    let bytes = bincode::serialize(value)?;
    let compressed_bytes = lz4_flex::compress_prepend_size(&bytes);

    debug!(
        path = %path.as_ref().display(),
        compressed = compressed_bytes.len(),
        decompressed = bytes.len(),
        "write file"
    );

    fs::write(path, compressed_bytes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.data");
        fs::write(&path, [10, 0, 0, 0, 0xf0]).unwrap();

        let result = read_from_file::<Vec<u32>, _>(&path);

        assert!(matches!(result, Err(SceneError::Decompress(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = read_from_file::<Vec<u32>, _>(&dir.path().join("missing.data"));

        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
