//! Typed Rust client for the VoIPBIN communications API (voice calls, SMS, AI agents).
//!
//! The crate is split into a domain layer of plain types, a transport layer
//! where credentials are injected by decorating the request sender, and a small
//! client layer that encodes typed requests and wraps responses.
//!
//! Two ways to authenticate:
//! - an access key, appended to every request as the `accesskey` query
//!   parameter ([`VoipbinClient::with_access_key`]);
//! - HTTP Basic credentials, used by the agent login endpoint
//!   ([`VoipbinClient::with_basic_auth`]).
//!
//! ```rust,no_run
//! use voipbin::{CommonAddress, PostMessagesBody, VoipbinClient, string_ptr};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voipbin::VoipbinError> {
//!     let client = VoipbinClient::with_access_key("your-access-key")?;
//!     let body = PostMessagesBody {
//!         source: CommonAddress {
//!             target: string_ptr("+1987654321"),
//!             ..Default::default()
//!         },
//!         destinations: vec![CommonAddress {
//!             target: string_ptr("+1234567890"),
//!             ..Default::default()
//!         }],
//!         text: "Hello from VoIPBIN!".to_owned(),
//!     };
//!     let res = client.post_messages(body).await?;
//!     println!("message id: {:?}", res.json200().and_then(|m| m.id.as_deref()));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{
    AUTH_SERVER_ADDRESS, ApiResponse, Auth, DEFAULT_SERVER_ADDRESS, VoipbinClient,
    VoipbinClientBuilder, VoipbinError,
};
pub use domain::{
    AccessKey, AddressType, Call, CallsPage, CommonAddress, CreateCallsResponse, GetCallsParams,
    Groupcall, LoginRequest, LoginResponse, Message, Password, PostCallsBody, PostMessagesBody,
    Username, ValidationError, int_ptr, string_ptr,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport};
