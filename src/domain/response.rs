use serde::Deserialize;

use crate::domain::value::CommonAddress;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Call {
    pub id: Option<String>,
    pub flow_id: Option<String>,
    pub activeflow_id: Option<String>,
    pub r#type: Option<String>,
    pub status: Option<String>,
    pub direction: Option<String>,
    pub source: Option<CommonAddress>,
    pub destination: Option<CommonAddress>,
    pub hangup_by: Option<String>,
    pub hangup_reason: Option<String>,
    pub tm_create: Option<String>,
    pub tm_update: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Groupcall {
    pub id: Option<String>,
    pub flow_id: Option<String>,
    pub status: Option<String>,
    pub source: Option<CommonAddress>,
    pub destinations: Option<Vec<CommonAddress>>,
    pub call_ids: Option<Vec<String>>,
    pub tm_create: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// One page of `GET /calls`.
pub struct CallsPage {
    pub result: Option<Vec<Call>>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
/// Result of `POST /calls`: one call per single destination, one group call
/// per group destination.
pub struct CreateCallsResponse {
    pub calls: Option<Vec<Call>>,
    pub groupcalls: Option<Vec<Groupcall>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: Option<String>,
    pub r#type: Option<String>,
    pub source: Option<CommonAddress>,
    pub text: Option<String>,
    pub direction: Option<String>,
    pub tm_create: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
/// Result of `POST /auth/login`.
pub struct LoginResponse {
    pub username: String,
    pub token: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
