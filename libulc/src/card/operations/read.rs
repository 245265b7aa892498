use log::{debug, warn};

use crate::constants::{DATA_PAGE_END, FIRST_DATA_PAGE, PAGES_PER_READ};
use crate::protocol::{decode_read, Command};
use crate::transport::Transport;
use crate::types::{MemoryImage, PageAddress};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Read the 80-byte data window over an open connection.
///
/// Issues READ at pages 0x08, 0x0C, 0x10, 0x14 and 0x18. The first short or
/// failed answer aborts the read; nothing is retried.
pub fn read_image<T: Transport + ?Sized>(link: &mut T) -> Result<MemoryImage> {
    let mut image = MemoryImage::zeroed();

    for page in (FIRST_DATA_PAGE..DATA_PAGE_END).step_by(PAGES_PER_READ as usize) {
        let page = PageAddress::new(page);
        let command = Command::Read { page };
        let frame = command.encode();
        debug!("{:#04x} >> {}", command.command_code(), bytes_to_hex_spaced(&frame));

        let chunk = link
            .transceive(&frame)
            .and_then(|resp| {
                debug!("<< {}", bytes_to_hex_spaced(&resp));
                decode_read(&resp)
            })
            .map_err(|e| {
                warn!("read aborted at page {:#04x}: {}", page.as_u8(), e);
                Error::ReadFailed {
                    page: page.as_u8(),
                    source: Box::new(e),
                }
            })?;

        image.fill_from(page, &chunk)?;
    }

    Ok(image)
}
