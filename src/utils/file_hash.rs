use crate::model::comparison_mode::HashType;
use blake2::{Blake2b512, Blake2s256};
use digest::Digest;
use md5::Md5;
use sha2::Sha256;
use sha3::Sha3_256;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 65536;

pub fn file_hash(path: &Path, hash_type: HashType) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    match hash_type {
        HashType::MD5 => digest_reader(file, Md5::new()),
        HashType::SHA3 => digest_reader(file, Sha3_256::new()),
        HashType::SHA256 => digest_reader(file, Sha256::new()),
        HashType::BLAKE2B => digest_reader(file, Blake2b512::new()),
        HashType::BLAKE2S => digest_reader(file, Blake2s256::new()),
        HashType::BLAKE3 => digest_reader(file, blake3::Hasher::new()),
    }
}

fn digest_reader<D: Digest>(mut reader: impl Read, mut hasher: D) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0; BUFFER_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hasher.finalize().to_vec())
}
