//! Content hashing for deduplication and stable page identities.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Files are hashed in bounded chunks so large PDFs never sit in memory
/// whole.
const CHUNK_SIZE: usize = 4096;

/// SHA-256 of a file's content, hex-encoded.
///
/// The digest depends only on the file's bytes: two byte-identical files
/// hash the same regardless of name or location. Read errors propagate
/// unchanged.
pub fn hash_file(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-256 of an arbitrary key string, hex-encoded.
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Stable identity for one page of one file: digest of
/// `"{file_hash}_{page_index}"` with the 0-based index in decimal.
pub fn page_id(file_hash: &str, page_index: usize) -> String {
    hash_key(&format!("{}_{}", file_hash, page_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hash_key_matches_known_vectors() {
        // Standard SHA-256 test vectors.
        assert_eq!(
            hash_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn identical_content_hashes_identically_across_paths() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("first.pdf");
        let b = dir.path().join("totally_different_name.bin");
        std::fs::write(&a, b"same bytes").unwrap();
        std::fs::write(&b, b"same bytes").unwrap();

        assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn content_larger_than_one_chunk_hashes_like_key() {
        // Spans multiple read chunks; must equal the one-shot digest.
        let payload = "x".repeat(CHUNK_SIZE * 3 + 17);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(payload.as_bytes()).unwrap();
        file.flush().unwrap();

        assert_eq!(hash_file(file.path()).unwrap(), hash_key(&payload));
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let err = hash_file(Path::new("/no/such/file.pdf")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn page_id_is_deterministic_and_index_sensitive() {
        let file_hash = hash_key("some file body");
        assert_eq!(page_id(&file_hash, 0), page_id(&file_hash, 0));
        assert_ne!(page_id(&file_hash, 0), page_id(&file_hash, 1));
        // Composite key shape: digest of "{hash}_{index}".
        assert_eq!(
            page_id(&file_hash, 7),
            hash_key(&format!("{}_7", file_hash))
        );
    }
}
