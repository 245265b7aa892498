// libulc/src/types.rs

use crate::Error;
use crate::constants::{
    CHALLENGE_LEN, DATA_PAGE_END, EK_RND2_RNDR1_LEN, EK_RNDR2_LEN, FIRST_DATA_PAGE,
    MEMORY_IMAGE_LEN, PAGE_SIZE,
};
use serde::{Deserialize, Serialize};

/// Card serial number as reported by the detection event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIdentity(Vec<u8>);

impl CardIdentity {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Uppercase hex, last byte first, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_reversed_upper(&self.0)
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Page index on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageAddress(u8);

impl PageAddress {
    pub const fn new(page: u8) -> Self {
        Self(page)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Byte offset of this page inside the memory image, if it lies in the data window.
    pub fn image_offset(&self) -> Option<usize> {
        if (FIRST_DATA_PAGE..DATA_PAGE_END).contains(&self.0) {
            Some((self.0 - FIRST_DATA_PAGE) as usize * PAGE_SIZE)
        } else {
            None
        }
    }
}

/// The 80-byte data region, pages 0x08..0x1C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryImage([u8; MEMORY_IMAGE_LEN]);

impl MemoryImage {
    pub fn zeroed() -> Self {
        Self([0u8; MEMORY_IMAGE_LEN])
    }

    pub fn from_bytes(bytes: [u8; MEMORY_IMAGE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MEMORY_IMAGE_LEN] {
        &self.0
    }

    /// Copy `data` into the image starting at `page`. Fails if it does not fit.
    pub fn fill_from(&mut self, page: PageAddress, data: &[u8]) -> crate::Result<()> {
        let offset = page.image_offset().ok_or(Error::InvalidLength {
            expected: MEMORY_IMAGE_LEN,
            actual: data.len(),
        })?;
        let end = offset + data.len();
        if end > MEMORY_IMAGE_LEN {
            return Err(Error::InvalidLength {
                expected: MEMORY_IMAGE_LEN - offset,
                actual: data.len(),
            });
        }
        self.0[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Iterate `(page, 4 bytes)` over the data window in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = (PageAddress, [u8; PAGE_SIZE])> + '_ {
        self.0.chunks_exact(PAGE_SIZE).enumerate().map(|(i, chunk)| {
            let mut page = [0u8; PAGE_SIZE];
            page.copy_from_slice(chunk);
            (PageAddress::new(FIRST_DATA_PAGE + i as u8), page)
        })
    }
}

impl AsRef<[u8]> for MemoryImage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl TryFrom<&[u8]> for MemoryImage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != MEMORY_IMAGE_LEN {
            return Err(Error::InvalidLength {
                expected: MEMORY_IMAGE_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MEMORY_IMAGE_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct $name([u8; $len]);

        impl $name {
            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                if bytes.len() != $len {
                    return Err(Error::InvalidLength {
                        expected: $len,
                        actual: bytes.len(),
                    });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(bytes);
                Ok(Self(arr))
            }
        }
    };
}

fixed_bytes!(
    /// Rnd1 challenge generated by the card in authentication phase 1.
    Challenge,
    CHALLENGE_LEN
);

impl Challenge {
    pub fn clear(&mut self) {
        self.0 = [0u8; CHALLENGE_LEN];
    }
}

fixed_bytes!(
    /// Authority-supplied artifact forwarded to the card in phase 2.
    EkRnd2RndR1,
    EK_RND2_RNDR1_LEN
);

fixed_bytes!(
    /// Expected card answer to phase 2, supplied by the authority.
    EkRndR2,
    EK_RNDR2_LEN
);

/// Technologies a detected tag can advertise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TechId {
    #[display(fmt = "MifareUltralight")]
    MifareUltralight,
    #[display(fmt = "NfcA")]
    NfcA,
    #[display(fmt = "IsoDep")]
    IsoDep,
}
