use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::debug;
use reqwest::{Client, Method, Url};

use crate::auth::credentials::{AwsCredentials, CredentialProvider};
use crate::providers::route53::error::Route53ProviderError;
use crate::providers::route53::sign;
use crate::providers::route53::types::*;

const API_VERSION: &str = "2013-04-01";

pub struct Route53Config {
    /// Region used for the SigV4 signing scope.
    pub region: String,
    /// Origin of the Route53 endpoint, overridable for tests.
    pub api_url: String,
}

impl Route53Config {
    pub fn for_region(region: &str) -> Self {
        Self {
            region: region.to_string(),
            api_url: "https://route53.amazonaws.com".to_string(),
        }
    }
}

pub struct Route53Provider {
    config: Route53Config,
    client: Client,
    credentials: AwsCredentials,
    host: String,
}

impl Route53Provider {
    pub fn new(
        config: Route53Config,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, Route53ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let credentials = credentials
            .credentials()
            .map_err(|e| Route53ProviderError::Credential(e.to_string()))?;
        let url = Url::parse(&config.api_url)
            .map_err(|e| Route53ProviderError::Endpoint(format!("{}: {e}", config.api_url)))?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(Route53ProviderError::Endpoint(config.api_url.clone()));
            }
        };
        Ok(Self {
            config,
            client,
            credentials,
            host,
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<String, Route53ProviderError> {
        let canonical_query = sign::canonical_query_string(query);
        let url = if canonical_query.is_empty() {
            format!("{}{path}", self.config.api_url)
        } else {
            format!("{}{path}?{canonical_query}", self.config.api_url)
        };
        let payload = body.as_deref().unwrap_or("");
        let signed = sign::sign_request(
            &self.credentials,
            method.as_str(),
            &self.host,
            path,
            &canonical_query,
            payload.as_bytes(),
            &self.config.region,
            Utc::now(),
        );

        let mut request = self
            .client
            .request(method, &url)
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization);
        if let Some(token) = &self.credentials.session_token {
            request = request.header("x-amz-security-token", token);
        }
        if let Some(body) = body {
            request = request.header("content-type", "text/xml").body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            return Ok(text);
        }
        debug!("request to {url} failed with {status}");
        let error: ErrorResponse = quick_xml::de::from_str(&text).map_err(|_| {
            Route53ProviderError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
            }
        })?;
        Err(error.into())
    }

    pub async fn list_hosted_zones_page(
        &self,
        marker: Option<&str>,
    ) -> Result<ListHostedZonesResponse, Route53ProviderError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(marker) = marker {
            query.push(("marker", marker));
        }
        let path = format!("/{API_VERSION}/hostedzone");
        let body = self.send(Method::GET, &path, &query, None).await?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    pub async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &str,
    ) -> Result<ListResourceRecordSetsResponse, Route53ProviderError> {
        let path = format!("/{API_VERSION}/hostedzone/{zone_id}/rrset");
        let query = [("name", start_name), ("type", start_type)];
        let body = self.send(Method::GET, &path, &query, None).await?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    pub async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        request: &ChangeResourceRecordSetsRequest,
    ) -> Result<ChangeResourceRecordSetsResponse, Route53ProviderError> {
        let path = format!("/{API_VERSION}/hostedzone/{zone_id}/rrset/");
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>{}",
            quick_xml::se::to_string(request)?
        );
        let body = self.send(Method::POST, &path, &[], Some(body)).await?;
        Ok(quick_xml::de::from_str(&body)?)
    }
}
