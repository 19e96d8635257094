use serde::Serialize;

use crate::domain::value::CommonAddress;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query parameters for `GET /calls`.
pub struct GetCallsParams {
    pub page_size: Option<i64>,
    pub page_token: Option<String>,
}

impl GetCallsParams {
    pub const PAGE_SIZE_FIELD: &'static str = "page_size";
    pub const PAGE_TOKEN_FIELD: &'static str = "page_token";

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page_size) = self.page_size {
            pairs.push((Self::PAGE_SIZE_FIELD, page_size.to_string()));
        }
        if let Some(page_token) = self.page_token.as_ref() {
            pairs.push((Self::PAGE_TOKEN_FIELD, page_token.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// JSON body for `POST /calls`.
///
/// Calls are driven either by an existing flow (`flow_id`) or by inline
/// `actions`.
pub struct PostCallsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CommonAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<CommonAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// JSON body for `POST /messages`.
pub struct PostMessagesBody {
    pub source: CommonAddress,
    pub destinations: Vec<CommonAddress>,
    pub text: String,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
/// JSON body for `POST /auth/login`.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
