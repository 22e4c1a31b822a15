use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha256::{Digest, Sha256};

use crate::config::Config;
use crate::error::{ErrorKind, Result, ResultExt};
use crate::util::digest_to_str;

/// Decision point for a computed digest. The engine only produces digests;
/// whether one is trusted belongs to the surrounding system.
pub trait TrustPolicy {
    fn evaluate(&self, digest: &Digest) -> bool;
}

/// Stand-in policy: every digest is accepted.
pub struct AcceptAll;

impl TrustPolicy for AcceptAll {
    fn evaluate(&self, _digest: &Digest) -> bool {
        // To be implemented...
        true
    }
}

/// Hashes one file and reports the verdict. Returns `Ok(false)` when the
/// policy rejects the digest; errors are IO or engine failures only.
pub fn authenticate<P: TrustPolicy>(
    path: &str,
    index: u64,
    config: &Config,
    policy: &P,
) -> Result<bool> {
    info!("[hashguard] authentication call #{}", index);

    let file = File::open(path).chain_err(|| ErrorKind::FileIO(path.to_owned()))?;
    let size = file
        .metadata()
        .chain_err(|| ErrorKind::FileIO(path.to_owned()))?
        .len();

    info!("[+] File: {}", Path::new(path).display());
    info!("[+] File size: {}", size);

    let digest = hash_reader(file, path, config.chunk_size)?;
    info!("[+] SHA256 hash: {}", digest_to_str(&digest, config.uppercase));

    if !policy.evaluate(&digest) {
        error!("[!] SHA256 hash is invalid");
        return Ok(false);
    }

    info!("[+] SHA256 hash is valid");
    Ok(true)
}

/// Streams a reader through the engine in fixed-size chunks; the split
/// points never affect the digest.
fn hash_reader<R: Read>(mut r: R, path: &str, chunk_size: usize) -> Result<Digest> {
    let mut ctx = Sha256::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let amt = r
            .read(&mut buf)
            .chain_err(|| ErrorKind::FileIO(path.to_owned()))?;
        if amt == 0 {
            break;
        }
        ctx.update(&buf[..amt])
            .map_err(|e| ErrorKind::Digest(e.to_string()))?;
    }
    Ok(ctx
        .finalize()
        .map_err(|e| ErrorKind::Digest(e.to_string()))?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{hash_reader, AcceptAll, TrustPolicy};
    use crate::util::digest_to_str;
    use sha256::Sha256;

    #[test]
    fn test_hash_reader_chunked() {
        // Tiny chunk size to force many partial updates.
        let data = b"The quick brown fox jumps over the lazy dog".to_vec();
        let digest = hash_reader(Cursor::new(data), "<mem>", 3).unwrap();
        assert_eq!(
            digest_to_str(&digest, false),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_accept_all() {
        let digest = Sha256::hash(b"anything").unwrap();
        assert!(AcceptAll.evaluate(&digest));
    }
}
