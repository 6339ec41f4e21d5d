//! Public library API for decoding Thrift compact protocol messages.

/// Compact protocol parsing, value tree types, and decode options.
pub mod compact;
