//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod decode;
mod endpoint;
mod envelope;
mod patch;
mod request;

pub use decode::{DecodeError, decode_bool, decode_int, decode_json, decode_string};
pub use endpoint::{base_url, method_url};
pub use envelope::probe_error;
pub use request::encode_request;
