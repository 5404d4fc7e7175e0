//! The request/response seam between this crate and an MTProto connection.
//!
//! Framing, encryption, session state and flood-wait handling all live behind
//! [`Transport`]. Errors it returns reach the caller of every `Client` method
//! unchanged.

use std::future::Future;
use std::sync::Arc;

use layer_peer_types::{Request, Response};

use crate::InvocationError;

/// Sends one typed request and waits for its typed response.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> impl Future<Output = Result<Response, InvocationError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: Request) -> impl Future<Output = Result<Response, InvocationError>> + Send {
        (**self).send(request)
    }
}
