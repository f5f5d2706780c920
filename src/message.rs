mod control_message;
mod message_dispatcher;
mod message_error;
mod message_type;
mod route_error;
mod route_reply;
mod route_reply_ack;
mod route_request;
mod wire_message;

pub use control_message::ControlMessage;
pub use message_dispatcher::{MessageDecodeFn, MessageDispatcher};
pub use message_error::DecodeError;
pub use message_type::MessageType;
pub use route_error::{RouteErrorMessage, UnreachableDestination};
pub use route_reply::RouteReplyMessage;
pub use route_reply_ack::RouteReplyAckMessage;
pub use route_request::RouteRequestMessage;
pub use wire_message::{DecodedMessage, WireMessage};
