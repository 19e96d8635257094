use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::domain::{Password, Username};

#[derive(Clone)]
/// Decorator that attaches an HTTP Basic `Authorization` header to every request.
pub struct BasicAuthTransport {
    username: Username,
    password: Password,
    inner: Arc<dyn HttpTransport>,
}

impl BasicAuthTransport {
    pub fn new(username: Username, password: Password, inner: Arc<dyn HttpTransport>) -> Self {
        Self {
            username,
            password,
            inner,
        }
    }

    /// Return a copy of `request` with its `Authorization` header replaced.
    pub fn authorize(&self, request: &HttpRequest) -> HttpRequest {
        let mut authorized = request.clone();
        authorized.headers.insert(
            AUTHORIZATION,
            basic_auth_header(self.username.as_str(), self.password.as_str()),
        );
        authorized
    }
}

fn basic_auth_header(username: &str, password: &str) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .expect("base64 output is always a valid header value");
    value.set_sensitive(true);
    value
}

impl HttpTransport for BasicAuthTransport {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let authorized = self.authorize(request);
            self.inner.send(&authorized).await
        })
    }
}
