use crate::domain::payment::PaymentRequest;
use crate::domain::ports::TransactionServiceBox;
use crate::domain::response::ApiResponse;
use crate::error::Result;

/// Drives a single transaction build against a `TransactionService`.
///
/// The run is strictly sequential: encode, submit, decode. The first
/// failure ends it and nothing is decoded after a transport error.
pub struct RequestRunner {
    service: TransactionServiceBox,
}

impl RequestRunner {
    pub fn new(service: TransactionServiceBox) -> Self {
        Self { service }
    }

    /// Submits `request` and decodes the service response.
    ///
    /// # Errors
    ///
    /// * `EncodeError` if the request cannot be serialized.
    /// * `TransportError` if the request cannot be delivered.
    /// * `DecodeError` if the response body is truncated or not JSON.
    pub async fn run(&self, request: &PaymentRequest) -> Result<ApiResponse> {
        let body = request.encode()?;
        tracing::debug!(
            outputs = request.outputs.len(),
            bytes = body.len(),
            "encoded payment request"
        );

        let raw = self.service.build(body).await?;
        ApiResponse::decode(&raw)
    }

    pub async fn check_health(&self) -> Result<String> {
        self.service.health().await
    }
}
