//! AWS Signature Version 4 request signing.
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::auth::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "route53";

pub(crate) struct SignedRequest {
    pub authorization: String,
    pub amz_date: String,
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Sorted, percent-encoded query string used both for the request URL and
/// the canonical request.
pub(crate) fn canonical_query_string(params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    pairs.sort();
    pairs.join("&")
}

/// Produces the Authorization header value for one request.
pub(crate) fn sign_request(
    credentials: &AwsCredentials,
    method: &str,
    host: &str,
    canonical_uri: &str,
    canonical_query: &str,
    payload: &[u8],
    region: &str,
    timestamp: DateTime<Utc>,
) -> SignedRequest {
    let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let datestamp = timestamp.format("%Y%m%d").to_string();
    let payload_hash = hex::encode(Sha256::digest(payload));

    // 1. Canonical request. Header names sorted, lowercase.
    let mut canonical_headers = format!("host:{host}\nx-amz-date:{amz_date}\n");
    let mut signed_headers = String::from("host;x-amz-date");
    if let Some(token) = &credentials.session_token {
        canonical_headers.push_str(&format!("x-amz-security-token:{token}\n"));
        signed_headers.push_str(";x-amz-security-token");
    }
    let canonical_request = format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{payload_hash}"
    );

    // 2. String to sign, scoped to date/region/service.
    let scope = format!("{datestamp}/{region}/{SERVICE}/aws4_request");
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = format!("{ALGORITHM}\n{amz_date}\n{scope}\n{hashed_canonical_request}");

    // 3. Signing key chain.
    let k_date = hmac_sha256(
        format!("AWS4{}", credentials.secret_access_key).as_bytes(),
        datestamp.as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, SERVICE.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id
    );
    SignedRequest {
        authorization,
        amz_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_credentials(token: Option<&str>) -> AwsCredentials {
        AwsCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
            session_token: token.map(str::to_string),
        }
    }

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    fn sign(credentials: &AwsCredentials) -> SignedRequest {
        sign_request(
            credentials,
            "GET",
            "route53.amazonaws.com",
            "/2013-04-01/hostedzone",
            "",
            b"",
            "us-east-1",
            fixed_timestamp(),
        )
    }

    fn extract_signature(authorization: &str) -> &str {
        authorization
            .split("Signature=")
            .nth(1)
            .expect("missing Signature= in output")
    }

    #[test]
    fn authorization_format() {
        let result = sign(&make_credentials(None));
        assert!(result.authorization.starts_with("AWS4-HMAC-SHA256 "));
        assert!(result
            .authorization
            .contains("Credential=AKIDEXAMPLE/20150830/us-east-1/route53/aws4_request"));
        assert!(result
            .authorization
            .contains("SignedHeaders=host;x-amz-date"));
        assert_eq!(result.amz_date, "20150830T123600Z");
    }

    #[test]
    fn signature_is_hex_and_deterministic() {
        let creds = make_credentials(None);
        let first = sign(&creds);
        let second = sign(&creds);
        let signature = extract_signature(&first.authorization);
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first.authorization, second.authorization);
    }

    #[test]
    fn signature_depends_on_payload() {
        let creds = make_credentials(None);
        let empty = sign_request(
            &creds,
            "POST",
            "route53.amazonaws.com",
            "/2013-04-01/hostedzone/Z1/rrset/",
            "",
            b"",
            "us-east-1",
            fixed_timestamp(),
        );
        let with_body = sign_request(
            &creds,
            "POST",
            "route53.amazonaws.com",
            "/2013-04-01/hostedzone/Z1/rrset/",
            "",
            b"<ChangeResourceRecordSetsRequest/>",
            "us-east-1",
            fixed_timestamp(),
        );
        assert_ne!(empty.authorization, with_body.authorization);
    }

    #[test]
    fn session_token_joins_signed_headers() {
        let result = sign(&make_credentials(Some("FwoGZXIvYXdzEXAMPLE")));
        assert!(result
            .authorization
            .contains("SignedHeaders=host;x-amz-date;x-amz-security-token"));
    }

    #[test]
    fn canonical_query_string_sorts_and_encodes() {
        assert_eq!(
            canonical_query_string(&[("type", "A"), ("name", "www.example.com.")]),
            "name=www.example.com.&type=A"
        );
        assert_eq!(canonical_query_string(&[]), "");
    }
}
