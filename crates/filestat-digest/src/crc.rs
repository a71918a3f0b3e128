//! POSIX cksum CRC.
//!
//! The 32-bit table-driven CRC variant used by the system `cksum` utility:
//! content bytes are folded through the table MSB-first, then the byte
//! length of the input is fed through the same table low byte first, and
//! the accumulator is complemented. Output must agree byte-for-byte with
//! `cksum(1)` on identical input.

const POLY: u32 = 0x04c1_1db7;

const CRCTAB: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut tab = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        tab[i] = crc;
        i += 1;
    }
    tab
}

/// Streaming POSIX cksum accumulator.
#[derive(Debug, Clone)]
pub struct Cksum {
    crc: u32,
    length: u64,
}

impl Cksum {
    /// Start a fresh checksum.
    pub fn new() -> Self {
        Self { crc: 0, length: 0 }
    }

    /// Fold a chunk of content bytes into the accumulator.
    pub fn update(&mut self, bytes: &[u8]) {
        let mut crc = self.crc;
        for &b in bytes {
            crc = (crc << 8) ^ CRCTAB[(((crc >> 24) ^ b as u32) & 0xff) as usize];
        }
        self.crc = crc;
        self.length += bytes.len() as u64;
    }

    /// Feed in the content length and complement, yielding the final value.
    pub fn finalize(self) -> u32 {
        let mut crc = self.crc;
        let mut length = self.length;
        while length != 0 {
            crc = (crc << 8) ^ CRCTAB[(((crc >> 24) ^ length as u32) & 0xff) as usize];
            length >>= 8;
        }
        !crc
    }
}

impl Default for Cksum {
    fn default() -> Self {
        Self::new()
    }
}
