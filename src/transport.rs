use std::future::Future;

use crate::error::Result;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET and hands back whatever the server answered.
///
/// Only failures to complete the exchange (DNS, connect, reading the body) are
/// errors here; a non-2xx status is still a successful `RawResponse`.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send;
}

impl Transport for reqwest::Client {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send {
        let request = reqwest::Client::get(self, url);
        async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RawResponse { status, body })
        }
    }
}
