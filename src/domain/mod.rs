//! Domain layer: credentials, addresses, request and response types (no I/O).

mod ptr;
mod request;
mod response;
mod validation;
mod value;

pub use ptr::{int_ptr, string_ptr};
pub use request::{GetCallsParams, LoginRequest, PostCallsBody, PostMessagesBody};
pub use response::{Call, CallsPage, CreateCallsResponse, Groupcall, LoginResponse, Message};
pub use validation::ValidationError;
pub use value::{AccessKey, AddressType, CommonAddress, Password, Username};
