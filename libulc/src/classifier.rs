// libulc/src/classifier.rs
//! Tag admission: only Ultralight C tags reachable over NfcA with a frame
//! large enough for one 4-page READ are accepted.

use log::{debug, warn};

use crate::error::RejectReason;
use crate::transport::Transport;
use crate::types::{CardIdentity, TechId};
use crate::{Error, Result};

/// A tag as delivered by the platform's discovery event.
pub struct DetectedTag<T> {
    pub id: Vec<u8>,
    pub link: T,
}

impl<T: Transport> DetectedTag<T> {
    pub fn new(id: &[u8], link: T) -> Self {
        Self {
            id: id.to_vec(),
            link,
        }
    }
}

/// A tag that passed classification. Owns the link handle.
pub struct AcceptedTag<T> {
    pub identity: CardIdentity,
    pub link: T,
}

/// Check admissibility without consuming the tag.
pub fn check(techs: &[TechId], max_frame: usize, min_frame: usize) -> Result<()> {
    if !techs.contains(&TechId::MifareUltralight) {
        return Err(Error::TagRejected(RejectReason::NotUltralight));
    }
    if !techs.contains(&TechId::NfcA) {
        return Err(Error::TagRejected(RejectReason::NoNfcA));
    }
    if max_frame < min_frame {
        return Err(Error::TagRejected(RejectReason::FrameTooSmall {
            actual: max_frame,
            minimum: min_frame,
        }));
    }
    Ok(())
}

/// Classify a detected tag. On rejection the tag is dropped and no I/O has
/// been attempted.
pub fn classify<T: Transport>(tag: DetectedTag<T>, min_frame: usize) -> Result<AcceptedTag<T>> {
    let identity = CardIdentity::from_bytes(&tag.id);
    let techs = tag.link.tech_capabilities();
    let max_frame = tag.link.max_transceive_length();

    if let Err(e) = check(&techs, max_frame, min_frame) {
        warn!("tag {} rejected: {}", identity, e);
        return Err(e);
    }

    debug!("tag {} accepted (max frame {})", identity, max_frame);
    Ok(AcceptedTag {
        identity,
        link: tag.link,
    })
}
