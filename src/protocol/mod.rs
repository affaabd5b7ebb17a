//! Requests and notifications of LSP 3.17
//!
//! Each message is an uninhabited marker type implementing [`Request`] or
//! [`Notification`], tying its method name to its parameter, result and
//! registration option types. The same table also fills the runtime
//! [`registry`], used where only the method name is known.

pub mod messages;
pub mod registry;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::lsp_enum;

pub use messages::*;
pub use registry::{MessageInfo, Normalizer, lookup, messages, registration_options};

lsp_enum! {
    /// Which side sends a message
    pub enum MessageDirection: string {
        ClientToServer = "clientToServer",
        ServerToClient = "serverToClient",
        Both = "both",
    }
}

impl MessageDirection {
    /// Whether a message with this direction can be sent in `direction`
    pub fn allows(self, direction: MessageDirection) -> bool {
        self == MessageDirection::Both || self == direction
    }
}

lsp_enum! {
    pub enum MessageKind: string {
        Request = "request",
        Notification = "notification",
    }
}

/// A request with its parameter, result and registration option types
///
/// Messages without parameters use `()`, which only accepts `null`.
/// Messages that cannot be registered dynamically use `()` as
/// `RegistrationOptions`.
pub trait Request {
    const METHOD: &'static str;
    const DIRECTION: MessageDirection;

    type Params: Serialize + DeserializeOwned;
    type Result: Serialize + DeserializeOwned;
    type RegistrationOptions: Serialize + DeserializeOwned;
}

/// A notification with its parameter and registration option types
pub trait Notification {
    const METHOD: &'static str;
    const DIRECTION: MessageDirection;

    type Params: Serialize + DeserializeOwned;
    type RegistrationOptions: Serialize + DeserializeOwned;
}
