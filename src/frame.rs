//! Well known STOMP frame header names.
//!
//! STOMP header keys are case-sensitive and the standard names are all
//! lowercase, so lookups through these constants match exactly what a
//! conforming peer puts on the wire.

// ===== Connection negotiation =====

/// Versions of the STOMP protocol the client can accept, sent in CONNECT.
pub const ACCEPT_VERSION: &str = "accept-version";

/// Name of the virtual host the client wishes to connect to.
pub const HOST: &str = "host";

/// User identifier used to authenticate against a secured server.
pub const LOGIN: &str = "login";

/// Password used to authenticate against a secured server.
pub const PASSCODE: &str = "passcode";

/// Heart-beating capability, a pair of millisecond intervals.
pub const HEART_BEAT: &str = "heart-beat";

/// Version of the STOMP protocol the session will use, sent in CONNECTED.
pub const VERSION: &str = "version";

/// Session identifier assigned by the server.
pub const SESSION: &str = "session";

/// Field about the server, such as its name and version.
pub const SERVER: &str = "server";

// ===== Messaging =====

/// Destination a SEND frame delivers to, or a MESSAGE frame originates
/// from.
pub const DESTINATION: &str = "destination";

/// MIME type describing the frame body.
pub const CONTENT_TYPE: &str = "content-type";

/// Byte length of the frame body. When absent, the body runs up to the
/// null terminator.
pub const CONTENT_LENGTH: &str = "content-length";

/// Identifier of the message, assigned by the server on MESSAGE frames.
pub const MESSAGE_ID: &str = "message-id";

/// Short description of an error, set by the server on ERROR frames.
pub const MESSAGE: &str = "message";

// ===== Subscription =====

/// Identifier chosen by the client to name a subscription.
pub const ID: &str = "id";

/// Acknowledgment mode of a subscription: `auto`, `client` or
/// `client-individual`.
pub const ACK: &str = "ack";

/// Subscription a MESSAGE frame was delivered through.
pub const SUBSCRIPTION: &str = "subscription";

// ===== Receipt and transaction =====

/// Receipt requested by the client; the server confirms with a RECEIPT
/// frame.
pub const RECEIPT: &str = "receipt";

/// Identifier of the receipt being confirmed, set on RECEIPT frames.
pub const RECEIPT_ID: &str = "receipt-id";

/// Transaction a SEND, ACK or NACK frame is part of.
pub const TRANSACTION: &str = "transaction";
