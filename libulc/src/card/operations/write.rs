use log::{debug, warn};

use crate::protocol::Command;
use crate::transport::Transport;
use crate::types::MemoryImage;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Write the 80-byte image page by page, 0x08 through 0x1B.
///
/// The card's answer to each WRITE is not inspected; only a transceive
/// failure stops the sequence. Closing the connection is left to the caller.
pub fn write_image<T: Transport + ?Sized>(link: &mut T, image: &MemoryImage) -> Result<()> {
    for (page, data) in image.pages() {
        let command = Command::Write { page, data };
        let frame = command.encode();
        debug!("{:#04x} >> {}", command.command_code(), bytes_to_hex_spaced(&frame));
        link.transceive(&frame).map_err(|e| {
            warn!("write aborted at page {:#04x}: {}", page.as_u8(), e);
            Error::WriteFailed {
                page: page.as_u8(),
                source: Box::new(e),
            }
        })?;
    }
    Ok(())
}
