use crate::error::Error;
use std::env;

#[derive(Debug, Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Result<AwsCredentials, Error>;
}

/// Credentials from the standard AWS environment variables. Presence is the
/// only validation performed here; bad keys surface as provider errors.
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> Result<AwsCredentials, Error> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID")
            .map_err(|_| Error::CredentialError("AWS_ACCESS_KEY_ID is not set".to_string()))?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY")
            .map_err(|_| Error::CredentialError("AWS_SECRET_ACCESS_KEY is not set".to_string()))?;
        let session_token = env::var("AWS_SESSION_TOKEN").ok();
        Ok(AwsCredentials {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}
