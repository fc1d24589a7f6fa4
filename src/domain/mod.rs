//! Domain layer: strong types with validation and invariants (no I/O).

mod method;
mod request;
mod response;
mod validation;
mod value;

pub use method::Method;
pub use request::{ParamValue, Params};
pub use response::*;
pub use validation::ValidationError;
pub use value::{
    ApiKey, ChimpTime, ChimpTimeLayout, ErrorCode, JsonDocument, KnownErrorCode, Scheme,
};
