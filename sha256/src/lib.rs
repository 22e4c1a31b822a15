#![no_std]

pub mod consts;

use core::cmp;
use core::fmt;
use core::mem;

use crate::consts::{BLOCK_LEN, H, K, STATE_LEN};

/// The length of a SHA-256 digest in bytes
pub const DIGEST_LENGTH: usize = 32;

/// Failure modes of the engine.
///
/// There are no transient errors: every operation is a pure function of its
/// inputs and the context's current stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The one-shot API was given no data.
    InvalidInput,
    /// `update` or `finalize` was called on a finalized context.
    InvalidState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidInput => write!(f, "no input data supplied"),
            Error::InvalidState => write!(f, "hash context already finalized"),
        }
    }
}

/// Represents a SHA-256 hash object in memory.
///
/// A context accepts input through any number of `update` calls and is
/// sealed by `finalize`; once finalized it rejects further use until
/// `reset`. Splitting the input across updates never changes the digest.
#[derive(Clone)]
pub struct Sha256 {
    state: Sha256State,
    blocks: Blocks,
    len: u64,
    stage: Stage,
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Accepting,
    Finalized,
}

struct Blocks {
    len: u32,
    block: [u8; BLOCK_LEN],
}

#[derive(Copy, Clone)]
struct Sha256State {
    state: [u32; STATE_LEN],
}

/// Digest generated from a `Sha256` instance.
///
/// A digest can be formatted to view the digest as a hex string, or the bytes
/// can be extracted for later processing.
pub struct Digest {
    data: Sha256State,
}

const DEFAULT_STATE: Sha256State = Sha256State { state: H };

#[inline(always)]
fn as_block(input: &[u8]) -> &[u8; BLOCK_LEN] {
    unsafe {
        assert!(input.len() == BLOCK_LEN);
        let arr: &[u8; BLOCK_LEN] = mem::transmute(input.as_ptr());
        arr
    }
}

impl Sha256 {
    /// Creates a fresh hash object in the accepting state.
    pub fn new() -> Sha256 {
        Sha256 {
            state: DEFAULT_STATE,
            len: 0,
            blocks: Blocks {
                len: 0,
                block: [0; BLOCK_LEN],
            },
            stage: Stage::Accepting,
        }
    }

    /// Resets the hash object to its initial state, including one that has
    /// already been finalized.
    pub fn reset(&mut self) {
        self.state = DEFAULT_STATE;
        self.len = 0;
        self.blocks.len = 0;
        self.stage = Stage::Accepting;
    }

    /// Update hash with input data.
    ///
    /// Full 64-byte blocks are compressed immediately; at most 63 bytes stay
    /// buffered. Zero-length input is a no-op.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.stage != Stage::Accepting {
            return Err(Error::InvalidState);
        }
        let len = &mut self.len;
        let state = &mut self.state;
        self.blocks.input(data, |block| {
            *len += block.len() as u64;
            state.process(block);
        });
        Ok(())
    }

    /// Pads and compresses the buffered tail, appends the 64-bit message
    /// length, and serializes the final state. The context moves to the
    /// finalized stage; a second call returns `Error::InvalidState`.
    pub fn finalize(&mut self) -> Result<Digest, Error> {
        if self.stage != Stage::Accepting {
            return Err(Error::InvalidState);
        }
        self.stage = Stage::Finalized;

        let mut state = self.state;
        let bits = (self.len + u64::from(self.blocks.len)) * 8;
        let extra = bits.to_be_bytes();
        let mut last = [0; 2 * BLOCK_LEN];
        let blocklen = self.blocks.len as usize;
        last[..blocklen].copy_from_slice(&self.blocks.block[..blocklen]);
        last[blocklen] = 0x80;

        if blocklen < 56 {
            last[56..64].copy_from_slice(&extra);
            state.process(as_block(&last[0..64]));
        } else {
            last[120..128].copy_from_slice(&extra);
            state.process(as_block(&last[0..64]));
            state.process(as_block(&last[64..128]));
        }

        Ok(Digest { data: state })
    }

    /// One-shot digest of a whole buffer.
    ///
    /// Empty input is rejected with `Error::InvalidInput`; callers that need
    /// the standard empty-message digest can use the streaming API, which
    /// has no such restriction.
    pub fn hash(data: &[u8]) -> Result<Digest, Error> {
        if data.is_empty() {
            return Err(Error::InvalidInput);
        }
        let mut ctx = Sha256::new();
        ctx.update(data)?;
        ctx.finalize()
    }
}

impl Digest {
    /// Returns the 256 bit (32 byte) digest as a byte array, most
    /// significant word first.
    pub fn bytes(&self) -> [u8; DIGEST_LENGTH] {
        let mut out = [0; DIGEST_LENGTH];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.data.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Blocks {
    fn input<F>(&mut self, mut input: &[u8], mut f: F)
    where
        F: FnMut(&[u8; BLOCK_LEN]),
    {
        if self.len > 0 {
            let len = self.len as usize;
            let amt = cmp::min(input.len(), self.block.len() - len);
            self.block[len..len + amt].copy_from_slice(&input[..amt]);
            if len + amt == self.block.len() {
                f(&self.block);
                self.len = 0;
                input = &input[amt..];
            } else {
                self.len += amt as u32;
                return;
            }
        }
        for chunk in input.chunks(BLOCK_LEN) {
            if chunk.len() == BLOCK_LEN {
                f(as_block(chunk))
            } else {
                self.block[..chunk.len()].copy_from_slice(chunk);
                self.len = chunk.len() as u32;
            }
        }
    }
}

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

impl Sha256State {
    /// Compresses one 64-byte block into the running state. Total over its
    /// inputs; all additions wrap mod 2^32.
    fn process(&mut self, block: &[u8; BLOCK_LEN]) {
        let mut w = [0u32; 64];
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in 16..64 {
            w[i] = small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }

        let mut a = self.state[0];
        let mut b = self.state[1];
        let mut c = self.state[2];
        let mut d = self.state[3];
        let mut e = self.state[4];
        let mut f = self.state[5];
        let mut g = self.state[6];
        let mut h = self.state[7];

        for i in 0..64 {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
        self.state[5] = self.state[5].wrapping_add(f);
        self.state[6] = self.state[6].wrapping_add(g);
        self.state[7] = self.state[7].wrapping_add(h);
    }
}

impl Clone for Blocks {
    fn clone(&self) -> Blocks {
        Blocks { ..*self }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in self.data.state.iter() {
            write!(f, "{:08x}", i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use self::std::string::ToString;

    use crate::{Error, Sha256};

    #[test]
    fn test_simple() {
        let mut m = Sha256::new();

        let tests = [
            (
                "The quick brown fox jumps over the lazy dog",
                "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
            ),
            (
                "The quick brown fox jumps over the lazy cog",
                "e4c4d8f3bf76b692de791a173e05321150f7a345b46484fe427f6acc7ecc81be",
            ),
            (
                "abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                "testing\n",
                "12a61f4e173fb3a11c05d6471f74728f76231b4a5fcd9667cef3af87a3ae4dc2",
            ),
            (
                "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
            ),
        ];

        for &(s, ref h) in tests.iter() {
            let data = s.as_bytes();

            m.reset();
            m.update(data).unwrap();
            let hh = m.finalize().unwrap().to_string();

            assert_eq!(hh.len(), h.len());
            assert_eq!(hh, *h);
        }
    }

    #[test]
    fn test_multiple_updates() {
        let mut m = Sha256::new();

        m.update("The quick brown ".as_bytes()).unwrap();
        m.update("fox jumps over ".as_bytes()).unwrap();
        m.update("the lazy dog".as_bytes()).unwrap();
        let hh = m.finalize().unwrap().to_string();

        let h = "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592";
        assert_eq!(hh.len(), h.len());
        assert_eq!(hh, &*h);
    }

    #[test]
    fn test_finalize_twice() {
        let mut m = Sha256::new();
        m.update(b"abc").unwrap();
        assert!(m.finalize().is_ok());
        assert!(matches!(m.finalize(), Err(Error::InvalidState)));
        assert!(matches!(m.finalize(), Err(Error::InvalidState)));
    }

    #[test]
    fn test_update_after_finalize() {
        let mut m = Sha256::new();
        m.update(b"abc").unwrap();
        m.finalize().unwrap();
        assert_eq!(m.update(b"def"), Err(Error::InvalidState));
    }

    #[test]
    fn test_reset_after_finalize() {
        let mut m = Sha256::new();
        m.update(b"garbage").unwrap();
        m.finalize().unwrap();

        m.reset();
        m.update(b"abc").unwrap();
        assert_eq!(
            m.finalize().unwrap().to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_one_shot_empty() {
        assert_eq!(Sha256::hash(b"").err(), Some(Error::InvalidInput));
    }

    #[test]
    fn test_streaming_empty() {
        let mut m = Sha256::new();
        assert_eq!(
            m.finalize().unwrap().to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
