// libulc/src/prelude.rs

pub use crate::auth::AuthState;
pub use crate::classifier::DetectedTag;
pub use crate::codec::{AuthResponse, ReadResult, WritePreamble};
pub use crate::config::SessionConfig;
pub use crate::session::{PendingAuthentication, Session};
pub use crate::transport::Transport;
pub use crate::{
    CardIdentity, Challenge, EkRnd2RndR1, EkRndR2, Error, ErrorKind, MemoryImage, PageAddress,
    RejectReason, Result, TechId,
};

pub use crate::utils::{bytes_to_hex_upper, parse_hex};
