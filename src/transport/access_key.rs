use std::sync::Arc;

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::domain::AccessKey;

#[derive(Clone)]
/// Decorator that appends `accesskey=<key>` to the query of every request.
pub struct AccessKeyTransport {
    access_key: AccessKey,
    inner: Arc<dyn HttpTransport>,
}

impl AccessKeyTransport {
    pub fn new(access_key: AccessKey, inner: Arc<dyn HttpTransport>) -> Self {
        Self { access_key, inner }
    }

    /// Return a copy of `request` carrying exactly one `accesskey` parameter.
    ///
    /// An existing `accesskey` is replaced; other query pairs keep their order.
    pub fn authorize(&self, request: &HttpRequest) -> HttpRequest {
        let mut url = request.url.clone();
        let retained = url
            .query_pairs()
            .filter(|(key, _)| key != AccessKey::FIELD)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<_>>();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained.iter())
            .append_pair(AccessKey::FIELD, self.access_key.as_str());

        let mut authorized = request.clone();
        authorized.url = url;
        authorized
    }
}

impl HttpTransport for AccessKeyTransport {
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
