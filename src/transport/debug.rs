use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::domain::AccessKey;

#[derive(Clone)]
/// Decorator that logs every exchange through `tracing` at `debug` level.
///
/// The `accesskey` value is redacted from logged URLs and only header names
/// are logged, so credentials never reach the log.
pub struct DebugTransport {
    inner: Arc<dyn HttpTransport>,
}

impl DebugTransport {
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self { inner }
    }
}

impl HttpTransport for DebugTransport {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let url = redacted_url(&request.url);
            let header_names = request
                .headers
                .keys()
                .map(|name| name.as_str())
                .collect::<Vec<_>>()
                .join(",");
            debug!(
                method = %request.method,
                url = %url,
                headers = %header_names,
                body_len = request.body.as_ref().map_or(0, Vec::len),
                "sending request"
            );

            let result = self.inner.send(request).await;
            match &result {
                Ok(response) => debug!(
                    status = response.status,
                    body_len = response.body.len(),
                    url = %url,
                    "received response"
                ),
                Err(err) => warn!(error = %err, url = %url, "request failed"),
            }
            result
        })
    }
}

fn redacted_url(url: &Url) -> Url {
    if !url.query_pairs().any(|(key, _)| key == AccessKey::FIELD) {
        return url.clone();
    }

    let pairs = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == AccessKey::FIELD {
                "<redacted>".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect::<Vec<_>>();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs.iter());
    redacted
}
