//! Error types for layer-peers.

use std::{fmt, io};

// ─── RpcError ─────────────────────────────────────────────────────────────────

/// An error returned by Telegram's servers in response to an RPC call.
///
/// Numeric values are stripped from the name and placed in [`RpcError::value`].
///
/// # Example
/// `FLOOD_WAIT_30` → `RpcError { code: 420, name: "FLOOD_WAIT", value: Some(30) }`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// HTTP-like status code.
    pub code: i32,
    /// Error name in SCREAMING_SNAKE_CASE with digits removed.
    pub name: String,
    /// Numeric suffix extracted from the name, if any.
    pub value: Option<u32>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC {}: {}", self.code, self.name)?;
        if let Some(v) = self.value {
            write!(f, " (value: {v})")?;
        }
        Ok(())
    }
}

impl std::error::Error for RpcError {}

impl RpcError {
    /// Parse a raw Telegram error message like `"FLOOD_WAIT_30"` into an `RpcError`.
    pub fn from_telegram(code: i32, message: &str) -> Self {
        if let Some(idx) = message.rfind('_') {
            let suffix = &message[idx + 1..];
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(v) = suffix.parse::<u32>() {
                    let name = message[..idx].to_string();
                    return Self { code, name, value: Some(v) };
                }
            }
        }
        Self { code, name: message.to_string(), value: None }
    }

    /// Match on the error name, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("USER_NOT_PARTICIPANT")`: exact match
    /// - `err.is("CHAT_*")`: starts-with match
    /// - `err.is("*_INVALID")`: ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.name.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.name.ends_with(suffix)
        } else {
            self.name == pattern
        }
    }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from every `Client` method.
///
/// `InvalidArgument` and `NotParticipant` are produced locally; every other
/// variant is handed through unchanged from the transport, the resolver or
/// the uploader.
#[derive(Debug)]
pub enum InvocationError {
    /// Telegram rejected the request.
    Rpc(RpcError),
    /// Network / I/O failure inside the transport.
    Io(io::Error),
    /// The transport answered with a result of the wrong type.
    Deserialize(String),
    /// The request was dropped (e.g. sender task shut down).
    Dropped,
    /// A peer of the wrong kind was passed for the operation.
    InvalidArgument(String),
    /// The user is not a member of the basic group that was scanned.
    NotParticipant,
    /// A peer identifier could not be mapped to a peer reference.
    Unresolved(String),
    /// Media could not be uploaded.
    Upload(String),
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(e)             => write!(f, "{e}"),
            Self::Io(e)              => write!(f, "I/O error: {e}"),
            Self::Deserialize(s)     => write!(f, "deserialize error: {s}"),
            Self::Dropped            => write!(f, "request dropped"),
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
            Self::NotParticipant     => write!(f, "the user is not a member of this chat"),
            Self::Unresolved(s)      => write!(f, "cannot resolve peer: {s}"),
            Self::Upload(s)          => write!(f, "upload failed: {s}"),
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rpc(e) => Some(e),
            Self::Io(e)  => Some(e),
            _            => None,
        }
    }
}

impl From<io::Error> for InvocationError {
    fn from(e: io::Error) -> Self { Self::Io(e) }
}

impl From<RpcError> for InvocationError {
    fn from(e: RpcError) -> Self { Self::Rpc(e) }
}

impl InvocationError {
    /// Returns `true` if this is the named RPC error (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Rpc(e) => e.is(pattern),
            _            => false,
        }
    }

    /// Returns `true` for both the locally detected [`InvocationError::NotParticipant`]
    /// and Telegram's `USER_NOT_PARTICIPANT`.
    pub fn is_not_participant(&self) -> bool {
        matches!(self, Self::NotParticipant) || self.is("USER_NOT_PARTICIPANT")
    }
}
