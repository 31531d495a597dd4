//! Sensor response frames
//!
//! Every SCD41 response is a sequence of 3-byte words: a big-endian 16-bit
//! value followed by its CRC-8.
//!
//! Measurement frame (9 bytes):
//! - bytes 0-1: CO2 (ppm), byte 2: CRC
//! - bytes 3-4: temperature raw, byte 5: CRC
//! - bytes 6-7: humidity raw, byte 8: CRC
//!
//! Status frame (3 bytes): data-ready word, low 11 bits nonzero when a
//! measurement is waiting. Only bits 0-2 of the second byte are checked.

use crc::{Crc, CRC_8_NRSC_5};

use crate::measurement::Measurement;

/// Sensirion CRC-8: polynomial 0x31, init 0xFF, no reflection, no final XOR
const SENSIRION_CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Bytes per word on the wire (2 data + 1 CRC)
pub const WORD_LEN: usize = 3;

/// Measurement frame length in bytes
pub const FRAME_LEN: usize = 3 * WORD_LEN;

/// Status frame length in bytes
pub const STATUS_LEN: usize = WORD_LEN;

/// Compute the Sensirion CRC-8 over `data`
pub fn crc8(data: &[u8]) -> u8 {
    SENSIRION_CRC.checksum(data)
}

/// CRC mismatch on a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChecksumMismatch {
    /// CRC computed over the data bytes
    pub expected: u8,
    /// CRC byte the sensor sent
    pub actual: u8,
}

/// One received word: two data bytes and their CRC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Word {
    /// Data bytes, big-endian
    pub data: [u8; 2],
    /// CRC byte as received
    pub crc: u8,
}

impl Word {
    /// Build a word from its three wire bytes
    pub const fn from_bytes(bytes: [u8; WORD_LEN]) -> Self {
        Self {
            data: [bytes[0], bytes[1]],
            crc: bytes[2],
        }
    }

    /// Encode a value with a correct CRC (what a healthy sensor sends)
    pub fn encode(value: u16) -> Self {
        let data = value.to_be_bytes();
        Self {
            data,
            crc: crc8(&data),
        }
    }

    /// 16-bit value
    pub const fn value(&self) -> u16 {
        u16::from_be_bytes(self.data)
    }

    /// Check the CRC byte against the data
    pub fn verify(&self) -> Result<u16, ChecksumMismatch> {
        let expected = crc8(&self.data);
        if expected == self.crc {
            Ok(self.value())
        } else {
            Err(ChecksumMismatch {
                expected,
                actual: self.crc,
            })
        }
    }

    /// Wire bytes
    pub const fn to_bytes(&self) -> [u8; WORD_LEN] {
        [self.data[0], self.data[1], self.crc]
    }
}

/// Raw 9-byte measurement frame, before unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame(pub [u8; FRAME_LEN]);

impl RawFrame {
    /// Frame length in bytes
    pub const LEN: usize = FRAME_LEN;

    /// Wrap received bytes
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a frame from raw words with correct CRCs
    pub fn encode(co2: u16, temperature: u16, humidity: u16) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        for (chunk, value) in bytes
            .chunks_exact_mut(WORD_LEN)
            .zip([co2, temperature, humidity])
        {
            chunk.copy_from_slice(&Word::encode(value).to_bytes());
        }
        Self(bytes)
    }

    fn word(&self, index: usize) -> Word {
        let b = &self.0[index * WORD_LEN..(index + 1) * WORD_LEN];
        Word::from_bytes([b[0], b[1], b[2]])
    }

    /// CO2 word (bytes 0-2)
    pub fn co2(&self) -> Word {
        self.word(0)
    }

    /// Temperature word (bytes 3-5)
    pub fn temperature(&self) -> Word {
        self.word(1)
    }

    /// Humidity word (bytes 6-8)
    pub fn humidity(&self) -> Word {
        self.word(2)
    }

    /// All three words, in frame order
    pub fn words(&self) -> [Word; 3] {
        [self.co2(), self.temperature(), self.humidity()]
    }

    /// Check every word's CRC, reporting the first mismatch
    pub fn verify(&self) -> Result<(), ChecksumMismatch> {
        for word in self.words() {
            word.verify()?;
        }
        Ok(())
    }

    /// Convert to physical units
    ///
    /// CRC bytes are not consulted; call [`RawFrame::verify`] first when
    /// they matter.
    pub fn decode(&self) -> Measurement {
        Measurement::from_raw(
            self.co2().value(),
            self.temperature().value(),
            self.humidity().value(),
        )
    }
}

/// Data-ready status word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadyStatus(pub Word);

impl ReadyStatus {
    /// Frame length in bytes
    pub const LEN: usize = STATUS_LEN;

    /// Wrap the received status frame
    pub const fn new(bytes: [u8; STATUS_LEN]) -> Self {
        Self(Word::from_bytes(bytes))
    }

    /// True when a new measurement is available
    ///
    /// Bits 0-2 of the second status byte.
    pub const fn is_ready(&self) -> bool {
        (self.0.data[1] & 0x07) != 0
    }

    /// Check the status word's CRC
    pub fn verify(&self) -> Result<(), ChecksumMismatch> {
        self.0.verify().map(|_| ())
    }
}
