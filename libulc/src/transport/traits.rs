// libulc/src/transport/traits.rs

use crate::Result;
use crate::types::TechId;

/// Link-layer handle to a detected ISO14443-A tag.
///
/// Implementations wrap the platform's NFC stack. Calls are synchronous and
/// may fail; the session engine never retries a failed call.
pub trait Transport {
    /// Open the connection to the tag.
    fn connect(&mut self) -> Result<()>;

    /// Send one frame and return the tag's answer.
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>>;

    /// Close the connection. Closing an already closed handle is not an error.
    fn close(&mut self) -> Result<()>;

    /// Whether `connect` succeeded and `close` has not been called since.
    fn is_connected(&self) -> bool;

    /// Largest frame a single transceive can carry.
    fn max_transceive_length(&self) -> usize;

    /// Technologies the tag advertised on detection.
    fn tech_capabilities(&self) -> Vec<TechId>;

    /// Set the link timeout. Transports without a configurable timeout keep
    /// the default implementation.
    fn set_timeout(&mut self, _timeout_ms: u64) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(frame)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn max_transceive_length(&self) -> usize {
        (**self).max_transceive_length()
    }

    fn tech_capabilities(&self) -> Vec<TechId> {
        (**self).tech_capabilities()
    }

    fn set_timeout(&mut self, timeout_ms: u64) -> Result<()> {
        (**self).set_timeout(timeout_ms)
    }
}
