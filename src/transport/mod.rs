//! Transport layer: the pluggable request sender and the decorators wrapped
//! around it.
//!
//! Every request the client makes goes through a single [`HttpTransport`]
//! stack. The bottom of the stack is [`ReqwestTransport`]; authentication is a
//! decorator ([`AccessKeyTransport`] or [`BasicAuthTransport`]) that clones the
//! request, adds the credential and forwards the copy to the inner transport.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::HeaderMap;
use url::Url;

mod access_key;
mod basic_auth;
mod debug;
mod sender;

pub use access_key::AccessKeyTransport;
pub use basic_auth::BasicAuthTransport;
pub use debug::DebugTransport;
pub use sender::ReqwestTransport;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error produced by a transport. Passed to callers verbatim.
pub type TransportError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
/// An outgoing HTTP request, before any credential is attached.
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole exchange. `None` leaves it to the sender.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

/// Something that can deliver an [`HttpRequest`].
///
/// Implementations must not mutate shared state per request; one transport
/// stack is shared by every clone of a client.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}
