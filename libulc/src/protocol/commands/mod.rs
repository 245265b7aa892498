// libulc/src/protocol/commands/mod.rs

pub mod authenticate;
pub mod read;
pub mod write;

pub use authenticate::{encode_authenticate, encode_authenticate_continue};
pub use read::encode_read;
pub use write::encode_write;

use crate::types::{EkRnd2RndR1, PageAddress};

/// Card commands used by the session engine. Per-command encoders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read 4 pages starting at `page`.
    Read { page: PageAddress },
    /// Write one page.
    Write { page: PageAddress, data: [u8; 4] },
    /// Authentication phase 1.
    Authenticate,
    /// Authentication phase 2.
    AuthenticateContinue { artifact: EkRnd2RndR1 },
}

impl Command {
    /// Return the command code byte.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Read { .. } => crate::constants::CMD_READ,
            Self::Write { .. } => crate::constants::CMD_WRITE,
            Self::Authenticate => crate::constants::CMD_AUTHENTICATE,
            Self::AuthenticateContinue { .. } => crate::constants::CMD_AUTHENTICATE_CONTINUE,
        }
    }

    /// Encode the command into the raw frame handed to the transport.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Read { page } => encode_read(*page).to_vec(),
            Self::Write { page, data } => encode_write(*page, data).to_vec(),
            Self::Authenticate => encode_authenticate().to_vec(),
            Self::AuthenticateContinue { artifact } => {
                encode_authenticate_continue(artifact).to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_codes() {
        assert_eq!(
            Command::Read {
                page: PageAddress::new(0x08)
            }
            .command_code(),
            0x30
        );
        assert_eq!(Command::Authenticate.command_code(), 0x1A);
    }

    #[test]
    fn command_encode_write() {
        let cmd = Command::Write {
            page: PageAddress::new(0x1B),
            data: [1, 2, 3, 4],
        };
        assert_eq!(cmd.encode(), vec![0xA2, 0x1B, 1, 2, 3, 4]);
    }
}
