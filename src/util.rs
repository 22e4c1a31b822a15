use std::fmt::Write as FWrite;

use sha256::{Digest, DIGEST_LENGTH};

pub fn digest_to_str(digest: &Digest, uppercase: bool) -> String {
    let mut hash_str = String::with_capacity(DIGEST_LENGTH * 2);
    for b in digest.bytes().iter() {
        if uppercase {
            write!(&mut hash_str, "{:02X}", b).unwrap();
        } else {
            write!(&mut hash_str, "{:02x}", b).unwrap();
        }
    }
    hash_str
}

#[cfg(test)]
mod tests {
    use super::digest_to_str;
    use sha256::Sha256;

    #[test]
    fn test_digest_to_str() {
        let digest = Sha256::hash(b"abc").unwrap();
        assert_eq!(
            digest_to_str(&digest, false),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest_to_str(&digest, true),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
    }
}
