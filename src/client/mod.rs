//! Network side of a detection request
//!
//! - `form` - the multipart payload (selected file + method)
//! - `transport` - the seam between callers and the network
//! - `http` - reqwest implementation of the transport
//! - `exchange` - local validation and reply interpretation

mod exchange;
mod form;
mod http;
mod transport;

pub use exchange::{detect, interpret_reply, validate_upload};
pub use form::{SelectedFile, UploadForm};
pub use http::HttpTransport;
pub use transport::{HttpReply, Transport};
