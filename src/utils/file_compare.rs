use crate::model::comparison_mode::{ComparisonMode, HashType};
use crate::utils::file_hash::file_hash;
use std::fs::{File, Metadata};
use std::io::{self, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 65536;

/// Decides whether two regular files hold the same data under `mode`.
pub fn files_equal(
    first: &Path,
    first_meta: &Metadata,
    second: &Path,
    second_meta: &Metadata,
    mode: ComparisonMode,
) -> io::Result<bool> {
    match mode {
        ComparisonMode::Shallow => {
            if same_signature(first_meta, second_meta) {
                return Ok(true);
            }
            same_content(first, second, first_meta.len(), second_meta.len())
        }
        ComparisonMode::Content => same_content(first, second, first_meta.len(), second_meta.len()),
        ComparisonMode::Checksum(hash_type) => {
            same_digest(first, second, first_meta.len(), second_meta.len(), hash_type)
        }
    }
}

fn same_signature(first: &Metadata, second: &Metadata) -> bool {
    if first.file_type() != second.file_type() || first.len() != second.len() {
        return false;
    }
    match (first.modified(), second.modified()) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}

fn same_content(first: &Path, second: &Path, first_len: u64, second_len: u64) -> io::Result<bool> {
    if first_len != second_len {
        return Ok(false);
    }
    let mut first = File::open(first)?;
    let mut second = File::open(second)?;
    let mut first_buffer = vec![0; BUFFER_SIZE];
    let mut second_buffer = vec![0; BUFFER_SIZE];
    loop {
        let first_read = fill(&mut first, &mut first_buffer)?;
        let second_read = fill(&mut second, &mut second_buffer)?;
        if first_buffer[..first_read] != second_buffer[..second_read] {
            return Ok(false);
        }
        if first_read == 0 {
            return Ok(true);
        }
    }
}

fn same_digest(
    first: &Path,
    second: &Path,
    first_len: u64,
    second_len: u64,
    hash_type: HashType,
) -> io::Result<bool> {
    if first_len != second_len {
        return Ok(false);
    }
    Ok(file_hash(first, hash_type)? == file_hash(second, hash_type)?)
}

// Reads until the buffer is full or the reader is exhausted.
fn fill(reader: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn pair(first: &[u8], second: &[u8]) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let first_path = dir.path().join("first");
        let second_path = dir.path().join("second");
        fs::write(&first_path, first).unwrap();
        fs::write(&second_path, second).unwrap();
        (dir, first_path, second_path)
    }

    fn equal(first: &Path, second: &Path, mode: ComparisonMode) -> bool {
        let first_meta = fs::metadata(first).unwrap();
        let second_meta = fs::metadata(second).unwrap();
        files_equal(first, &first_meta, second, &second_meta, mode).unwrap()
    }

    fn set_modified(path: &Path, time: SystemTime) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(time).unwrap();
    }

    #[test]
    fn content_mode_detects_same_size_change() {
        let (_dir, first, second) = pair(b"hello", b"world");
        set_modified(&second, SystemTime::now() - Duration::from_secs(3600));
        assert!(!equal(&first, &second, ComparisonMode::Content));
        assert!(!equal(&first, &second, ComparisonMode::Shallow));
        assert!(!equal(&first, &second, ComparisonMode::Checksum(HashType::BLAKE3)));
    }

    #[test]
    fn identical_content_is_equal_in_every_mode() {
        let (_dir, first, second) = pair(b"same bytes", b"same bytes");
        assert!(equal(&first, &second, ComparisonMode::Content));
        assert!(equal(&first, &second, ComparisonMode::Shallow));
        assert!(equal(&first, &second, ComparisonMode::Checksum(HashType::SHA256)));
    }

    #[test]
    fn shallow_mode_trusts_matching_signature() {
        let (_dir, first, second) = pair(b"hello", b"world");
        let stamp = SystemTime::now() - Duration::from_secs(60);
        set_modified(&first, stamp);
        set_modified(&second, stamp);
        assert!(equal(&first, &second, ComparisonMode::Shallow));
        assert!(!equal(&first, &second, ComparisonMode::Content));
    }

    #[test]
    fn large_files_differing_after_first_block() {
        let mut first = vec![7u8; BUFFER_SIZE * 3 + 11];
        let second = first.clone();
        let (_dir, first_path, second_path) = pair(&first, &second);
        assert!(equal(&first_path, &second_path, ComparisonMode::Content));

        first[BUFFER_SIZE * 2 + 5] = 8;
        fs::write(&first_path, &first).unwrap();
        assert!(!equal(&first_path, &second_path, ComparisonMode::Content));
    }

    #[test]
    fn empty_files_are_equal() {
        let (_dir, first, second) = pair(b"", b"");
        assert!(equal(&first, &second, ComparisonMode::Content));
    }
}
