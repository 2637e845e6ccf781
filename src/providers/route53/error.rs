use thiserror::Error;

use crate::error::Error;
use crate::providers::route53::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum Route53ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error("malformed response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("{code}: {message}")]
    Api { code: String, message: String },

    #[error("throttled: {0}")]
    Throttled(String),
}

impl From<ErrorResponse> for Route53ProviderError {
    fn from(resp: ErrorResponse) -> Self {
        match resp.error.code.as_str() {
            "Throttling" | "PriorRequestNotComplete" => {
                Route53ProviderError::Throttled(resp.error.message)
            }
            "AccessDenied" | "InvalidClientTokenId" | "SignatureDoesNotMatch"
            | "UnrecognizedClientException" => {
                Route53ProviderError::Credential(resp.error.message)
            }
            _ => Route53ProviderError::Api {
                code: resp.error.code,
                message: resp.error.message,
            },
        }
    }
}

/// Remote failures propagate verbatim as provider errors; only
/// credential-shaped ones get their own variant.
pub fn map_error(e: Route53ProviderError) -> Error {
    match e {
        Route53ProviderError::Credential(msg) => Error::CredentialError(msg),
        other => Error::ProviderError(other.to_string()),
    }
}
