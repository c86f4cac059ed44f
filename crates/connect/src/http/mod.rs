//! HTTP module - transport abstraction, response envelope, and the gateway
//! with its one-shot refresh interceptor.

mod envelope;
mod gateway;
mod transport;


pub use envelope::{parse, parse_empty};
pub use gateway::Gateway;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
