//! Client layer: builds requests against the base URL and runs them through the
//! transport stack.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{
    AccessKey, CallsPage, CreateCallsResponse, GetCallsParams, LoginRequest, LoginResponse,
    Message, Password, PostCallsBody, PostMessagesBody, Username,
};
use crate::transport::{
    AccessKeyTransport, BasicAuthTransport, DebugTransport, HttpRequest, HttpResponse,
    HttpTransport, ReqwestTransport, TransportError,
};

/// Versioned API endpoint used by [`VoipbinClient::with_access_key`] and
/// [`VoipbinClient::with_basic_auth`].
pub const DEFAULT_SERVER_ADDRESS: &str = "https://api.voipbin.net/v1.0";

/// Server address for `auth/login`, which is not under the versioned prefix.
pub const AUTH_SERVER_ADDRESS: &str = "https://api.voipbin.net";

const ACCESS_KEY_ENV: &str = "VOIPBIN_ACCESS_KEY";
const USERNAME_ENV: &str = "VOIPBIN_USERNAME";
const PASSWORD_ENV: &str = "VOIPBIN_PASSWORD";

#[derive(Debug, Clone)]
/// Credentials installed on a [`VoipbinClient`].
///
/// Use [`Auth::access_key`] for most API operations, and [`Auth::basic`] for
/// the agent login endpoint.
pub enum Auth {
    /// Sent as the `accesskey` query parameter.
    AccessKey(AccessKey),
    /// Sent as an HTTP Basic `Authorization` header.
    BasicAuth { username: Username, password: Password },
}

impl Auth {
    pub fn access_key(value: impl Into<String>) -> Self {
        Self::AccessKey(AccessKey::new(value))
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::BasicAuth {
            username: Username::new(username),
            password: Password::new(password),
        }
    }

    /// Read credentials from the environment.
    ///
    /// `VOIPBIN_ACCESS_KEY` wins when set; otherwise both `VOIPBIN_USERNAME` and
    /// `VOIPBIN_PASSWORD` are required.
    pub fn from_env() -> Result<Self, VoipbinError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, VoipbinError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(access_key) = non_empty(ACCESS_KEY_ENV) {
            return Ok(Self::access_key(access_key));
        }
        let username = non_empty(USERNAME_ENV).ok_or(VoipbinError::MissingEnv {
            var: ACCESS_KEY_ENV,
        })?;
        let password =
            non_empty(PASSWORD_ENV).ok_or(VoipbinError::MissingEnv { var: PASSWORD_ENV })?;
        Ok(Self::basic(username, password))
    }

    fn wrap(self, inner: Arc<dyn HttpTransport>) -> Arc<dyn HttpTransport> {
        match self {
            Self::AccessKey(access_key) => Arc::new(AccessKeyTransport::new(access_key, inner)),
            Self::BasicAuth { username, password } => {
                Arc::new(BasicAuthTransport::new(username, password, inner))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VoipbinClient`].
///
/// HTTP statuses are not errors: a non-200 answer is returned as an
/// [`ApiResponse`] without a parsed payload.
pub enum VoipbinError {
    /// The base address could not be used to build request URLs.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Failure reported by the transport stack (DNS, TLS, timeouts, etc), verbatim.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 200 response body did not match the expected payload.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// [`Auth::from_env`] found no usable credentials.
    #[error("environment variable {var} is not set")]
    MissingEnv { var: &'static str },
}

#[derive(Debug, Clone)]
/// Typed response wrapper: the parsed success payload plus the raw exchange.
pub struct ApiResponse<T> {
    status: u16,
    headers: HeaderMap,
    body: String,
    json200: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    fn from_http(response: HttpResponse) -> Result<Self, VoipbinError> {
        let json200 = if response.status == 200 {
            Some(serde_json::from_str(&response.body).map_err(VoipbinError::Parse)?)
        } else {
            None
        };
        Ok(Self {
            status: response.status,
            headers: response.headers,
            body: response.body,
            json200,
        })
    }
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parsed payload; `Some` only for HTTP 200.
    pub fn json200(&self) -> Option<&T> {
        self.json200.as_ref()
    }

    pub fn into_json200(self) -> Option<T> {
        self.json200
    }
}

#[derive(Clone)]
/// Builder for [`VoipbinClient`].
///
/// Use this when you need to customize the server address, deadlines, or the
/// underlying transport.
pub struct VoipbinClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<Arc<dyn HttpTransport>>,
    debug: bool,
}

impl VoipbinClientBuilder {
    /// Create a builder with the default server address.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_SERVER_ADDRESS.to_owned(),
            timeout: None,
            user_agent: None,
            http: None,
            debug: false,
        }
    }

    /// Override the server address. Request paths are appended to its path.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Deadline applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the default reqwest transport. Authentication is still layered on top.
    pub fn http_transport(mut self, http: Arc<dyn HttpTransport>) -> Self {
        self.http = Some(http);
        self
    }

    /// Log every request and response through `tracing` (see [`DebugTransport`]).
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Build a [`VoipbinClient`]. No network I/O happens here.
    pub fn build(self) -> Result<VoipbinClient, VoipbinError> {
        let base_url = parse_base_url(&self.base_url)?;

        let inner: Arc<dyn HttpTransport> = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| VoipbinError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };
        let inner: Arc<dyn HttpTransport> = if self.debug {
            Arc::new(DebugTransport::new(inner))
        } else {
            inner
        };

        Ok(VoipbinClient {
            base_url,
            timeout: self.timeout,
            http: self.auth.wrap(inner),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, VoipbinError> {
    let invalid = |reason: String| VoipbinError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level VoIPBIN client.
///
/// Cheap to clone and safe to share between tasks: the transport stack holds
/// only immutable credentials.
///
/// ```rust,no_run
/// use voipbin::{GetCallsParams, VoipbinClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), voipbin::VoipbinError> {
///     let client = VoipbinClient::with_access_key("your-access-key")?;
///     let res = client.get_calls(GetCallsParams::default()).await?;
///     for call in res.json200().and_then(|page| page.result.as_ref()).into_iter().flatten() {
///         println!("call: {:?}", call.id);
///     }
///     Ok(())
/// }
/// ```
pub struct VoipbinClient {
    base_url: Url,
    timeout: Option<Duration>,
    http: Arc<dyn HttpTransport>,
}

impl VoipbinClient {
    /// Create a client for [`DEFAULT_SERVER_ADDRESS`] that appends the access key
    /// to every request.
    pub fn with_access_key(access_key: impl Into<String>) -> Result<Self, VoipbinError> {
        VoipbinClientBuilder::new(Auth::access_key(access_key)).build()
    }

    /// Create a client for [`DEFAULT_SERVER_ADDRESS`] that sends HTTP Basic
    /// credentials with every request.
    pub fn with_basic_auth(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, VoipbinError> {
        VoipbinClientBuilder::new(Auth::basic(username, password)).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> VoipbinClientBuilder {
        VoipbinClientBuilder::new(auth)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List calls (`GET calls`).
    pub async fn get_calls(
        &self,
        params: GetCallsParams,
    ) -> Result<ApiResponse<CallsPage>, VoipbinError> {
        let mut url = self.endpoint(&["calls"])?;
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }
        self.execute("get_calls", self.request(Method::GET, url)).await
    }

    /// Create outbound calls (`POST calls`).
    pub async fn post_calls(
        &self,
        body: PostCallsBody,
    ) -> Result<ApiResponse<CreateCallsResponse>, VoipbinError> {
        let url = self.endpoint(&["calls"])?;
        let request = self.json_request(Method::POST, url, &body)?;
        self.execute("post_calls", request).await
    }

    /// Send a message (`POST messages`).
    pub async fn post_messages(
        &self,
        body: PostMessagesBody,
    ) -> Result<ApiResponse<Message>, VoipbinError> {
        let url = self.endpoint(&["messages"])?;
        let request = self.json_request(Method::POST, url, &body)?;
        self.execute("post_messages", request).await
    }

    /// Exchange a username/password for a token (`POST auth/login`).
    ///
    /// The login endpoint lives at [`AUTH_SERVER_ADDRESS`]; build the client with
    /// that base URL to reach it.
    pub async fn post_auth_login(
        &self,
        body: LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, VoipbinError> {
        let url = self.endpoint(&["auth", "login"])?;
        let request = self.json_request(Method::POST, url, &body)?;
        self.execute("post_auth_login", request).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, VoipbinError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| VoipbinError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> HttpRequest {
        let mut request = HttpRequest::new(method, url);
        request.timeout = self.timeout;
        request
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<HttpRequest, VoipbinError> {
        let mut request = self.request(method, url);
        request.body = Some(serde_json::to_vec(body).map_err(VoipbinError::Encode)?);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(request)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<ApiResponse<T>, VoipbinError> {
        debug!(
            operation,
            method = %request.method,
            path = request.url.path(),
            "sending request"
        );
        let response = self
            .http
            .send(&request)
            .await
            .map_err(VoipbinError::Transport)?;
        debug!(operation, status = response.status, "request completed");
        ApiResponse::from_http(response)
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use reqwest::header::AUTHORIZATION;

    use super::*;
    use crate::domain::{CommonAddress, int_ptr, string_ptr};
    use crate::transport::testing::RecordingTransport;

    fn make_client(auth: Auth, transport: RecordingTransport) -> VoipbinClient {
        VoipbinClient::builder(auth)
            .http_transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn body_json(request: &HttpRequest) -> serde_json::Value {
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn access_key_client_sends_access_key_when_listing_calls() {
        let json = r#"{ "result": [{ "id": "c1" }], "next_page_token": "t2" }"#;
        let transport = RecordingTransport::new(200, json);
        let client = make_client(Auth::access_key("abc123"), transport.clone());

        let res = client.get_calls(GetCallsParams::default()).await.unwrap();

        let page = res.json200().unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("t2"));
        assert_eq!(page.result.as_ref().unwrap()[0].id.as_deref(), Some("c1"));

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(
            sent.url.as_str(),
            "https://api.voipbin.net/v1.0/calls?accesskey=abc123"
        );
        assert!(sent.headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn get_calls_keeps_paging_params_next_to_access_key() {
        let transport = RecordingTransport::new(200, "{}");
        let client = make_client(Auth::access_key("abc123"), transport.clone());

        client
            .get_calls(GetCallsParams {
                page_size: int_ptr(100),
                page_token: string_ptr("t1"),
            })
            .await
            .unwrap();

        let sent = transport.last_request();
        assert_eq!(
            sent.url.query(),
            Some("page_size=100&page_token=t1&accesskey=abc123")
        );
    }

    #[tokio::test]
    async fn basic_auth_client_sends_authorization_when_logging_in() {
        let json = r#"{ "username": "alice", "token": "jwt-token" }"#;
        let transport = RecordingTransport::new(200, json);
        let client = make_client(Auth::basic("alice", "secret"), transport.clone());

        let res = client
            .post_auth_login(LoginRequest {
                username: "alice".to_owned(),
                password: "secret".to_owned(),
            })
            .await
            .unwrap();

        let login = res.into_json200().unwrap();
        assert_eq!(login.username, "alice");
        assert_eq!(login.token, "jwt-token");

        let sent = transport.last_request();
        let expected = format!("Basic {}", STANDARD.encode("alice:secret"));
        assert_eq!(sent.headers.get(AUTHORIZATION).unwrap(), expected.as_str());
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url.as_str(), "https://api.voipbin.net/v1.0/auth/login");
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(
            body_json(&sent),
            serde_json::json!({ "username": "alice", "password": "secret" })
        );
        assert!(sent.url.query().is_none());
    }

    #[tokio::test]
    async fn login_against_auth_server_has_no_version_prefix() {
        let transport = RecordingTransport::new(200, r#"{ "username": "a", "token": "t" }"#);
        let client = VoipbinClient::builder(Auth::basic("a", "b"))
            .base_url(AUTH_SERVER_ADDRESS)
            .http_transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client
            .post_auth_login(LoginRequest {
                username: "a".to_owned(),
                password: "b".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().url.as_str(),
            "https://api.voipbin.net/auth/login"
        );
    }

    #[tokio::test]
    async fn post_messages_encodes_body() {
        let transport = RecordingTransport::new(200, r#"{ "id": "m1" }"#);
        let client = make_client(Auth::access_key("k"), transport.clone());

        let res = client
            .post_messages(PostMessagesBody {
                source: CommonAddress {
                    target: string_ptr("+1987654321"),
                    ..Default::default()
                },
                destinations: vec![CommonAddress {
                    target: string_ptr("+1234567890"),
                    ..Default::default()
                }],
                text: "Hello from VoIPBIN!".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(res.json200().unwrap().id.as_deref(), Some("m1"));
        let sent = transport.last_request();
        assert_eq!(
            sent.url.as_str(),
            "https://api.voipbin.net/v1.0/messages?accesskey=k"
        );
        assert_eq!(
            body_json(&sent),
            serde_json::json!({
                "source": { "target": "+1987654321" },
                "destinations": [{ "target": "+1234567890" }],
                "text": "Hello from VoIPBIN!"
            })
        );
    }

    #[tokio::test]
    async fn post_calls_parses_calls_and_groupcalls() {
        let json = r#"
        {
          "calls": [{ "id": "c1", "status": "dialing" }],
          "groupcalls": [{ "id": "g1", "call_ids": ["c2", "c3"] }]
        }
        "#;
        let transport = RecordingTransport::new(200, json);
        let client = make_client(Auth::access_key("k"), transport.clone());

        let res = client
            .post_calls(PostCallsBody {
                destinations: Some(vec![CommonAddress::tel("+79251234567").unwrap()]),
                flow_id: string_ptr("flow-1"),
                ..Default::default()
            })
            .await
            .unwrap();

        let created = res.json200().unwrap();
        assert_eq!(created.calls.as_ref().unwrap()[0].id.as_deref(), Some("c1"));
        assert_eq!(
            created.groupcalls.as_ref().unwrap()[0].call_ids,
            Some(vec!["c2".to_owned(), "c3".to_owned()])
        );
        assert_eq!(
            body_json(&transport.last_request()),
            serde_json::json!({
                "destinations": [{ "type": "tel", "target": "+79251234567" }],
                "flow_id": "flow-1"
            })
        );
    }

    #[tokio::test]
    async fn non_200_status_is_exposed_without_payload() {
        let transport = RecordingTransport::new(401, r#"{"message":"unauthorized"}"#);
        let client = make_client(Auth::access_key("bad"), transport);

        let res = client.get_calls(GetCallsParams::default()).await.unwrap();

        assert_eq!(res.status(), 401);
        assert!(!res.is_success());
        assert!(res.json200().is_none());
        assert_eq!(res.body(), r#"{"message":"unauthorized"}"#);
    }

    #[tokio::test]
    async fn malformed_200_body_is_a_parse_error() {
        let transport = RecordingTransport::new(200, "{ not json }");
        let client = make_client(Auth::access_key("k"), transport);

        let err = client.get_calls(GetCallsParams::default()).await.unwrap_err();

        assert!(matches!(err, VoipbinError::Parse(_)));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let transport = RecordingTransport::failing("connection reset");
        let client = make_client(Auth::basic("alice", "secret"), transport);

        let err = client.get_calls(GetCallsParams::default()).await.unwrap_err();

        match err {
            VoipbinError::Transport(inner) => assert_eq!(inner.to_string(), "connection reset"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_is_carried_to_the_transport() {
        let transport = RecordingTransport::new(200, "{}");
        let client = VoipbinClient::builder(Auth::access_key("k"))
            .timeout(Duration::from_secs(3))
            .http_transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.get_calls(GetCallsParams::default()).await.unwrap();

        assert_eq!(
            transport.last_request().timeout,
            Some(Duration::from_secs(3))
        );
    }

    #[tokio::test]
    async fn debug_layer_sits_beneath_authentication() {
        let transport = RecordingTransport::new(200, "{}");
        let client = VoipbinClient::builder(Auth::access_key("abc123"))
            .debug(true)
            .http_transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.get_calls(GetCallsParams::default()).await.unwrap();

        assert_eq!(transport.last_request().url.query(), Some("accesskey=abc123"));
    }

    #[tokio::test]
    async fn invalid_base_url_fails_without_touching_the_transport() {
        for bad in ["not a url", "ftp://api.voipbin.net/v1.0", ""] {
            let transport = RecordingTransport::new(200, "{}");
            let result = VoipbinClient::builder(Auth::access_key("k"))
                .base_url(bad)
                .http_transport(Arc::new(transport.clone()))
                .build();

            match result {
                Err(VoipbinError::InvalidBaseUrl { url, .. }) => assert_eq!(url, bad),
                Err(other) => panic!("unexpected error for {bad:?}: {other:?}"),
                Ok(_) => panic!("{bad:?} was accepted"),
            }
            assert!(transport.requests().is_empty());
        }
    }

    #[test]
    fn factories_use_default_server_address() {
        let client = VoipbinClient::with_access_key("k").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.voipbin.net/v1.0");

        let client = VoipbinClient::with_basic_auth("alice", "secret").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.voipbin.net/v1.0");
    }

    #[test]
    fn trailing_slash_in_base_url_is_not_doubled() {
        let client = make_client_with_base("https://api.example.invalid/v1.0/");
        assert_eq!(
            client.endpoint(&["calls"]).unwrap().as_str(),
            "https://api.example.invalid/v1.0/calls"
        );
    }

    fn make_client_with_base(base_url: &str) -> VoipbinClient {
        VoipbinClient::builder(Auth::access_key("k"))
            .base_url(base_url)
            .http_transport(Arc::new(RecordingTransport::new(200, "{}")))
            .build()
            .unwrap()
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone + 'static>() {}
        assert_send_sync::<VoipbinClient>();
    }

    #[test]
    fn auth_from_env_prefers_access_key() {
        let auth = Auth::from_lookup(|name| match name {
            "VOIPBIN_ACCESS_KEY" => Some("key".to_owned()),
            "VOIPBIN_USERNAME" => Some("alice".to_owned()),
            "VOIPBIN_PASSWORD" => Some("secret".to_owned()),
            _ => None,
        })
        .unwrap();
        assert!(matches!(auth, Auth::AccessKey(key) if key.as_str() == "key"));
    }

    #[test]
    fn auth_from_env_falls_back_to_basic_auth() {
        let auth = Auth::from_lookup(|name| match name {
            "VOIPBIN_ACCESS_KEY" => Some(String::new()),
            "VOIPBIN_USERNAME" => Some("alice".to_owned()),
            "VOIPBIN_PASSWORD" => Some("secret".to_owned()),
            _ => None,
        })
        .unwrap();
        match auth {
            Auth::BasicAuth { username, password } => {
                assert_eq!(username.as_str(), "alice");
                assert_eq!(password.as_str(), "secret");
            }
            other => panic!("unexpected auth: {other:?}"),
        }
    }

    #[test]
    fn auth_from_env_reports_missing_variables() {
        let err = Auth::from_lookup(|_| None).unwrap_err();
        assert!(matches!(
            err,
            VoipbinError::MissingEnv {
                var: "VOIPBIN_ACCESS_KEY"
            }
        ));

        let err = Auth::from_lookup(|name| {
            (name == "VOIPBIN_USERNAME").then(|| "alice".to_owned())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            VoipbinError::MissingEnv {
                var: "VOIPBIN_PASSWORD"
            }
        ));
    }
}
