use serde::{Deserialize, Serialize};

use crate::core::record::{ChangeInfo, HostedZone, RecordSet, RecordType};

pub const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

// --- Listing responses ---

#[derive(Debug, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZonesXml,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZonesXml {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<HostedZoneXml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedZoneXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ListResourceRecordSetsResponse {
    #[serde(rename = "ResourceRecordSets", default)]
    pub resource_record_sets: ResourceRecordSetsXml,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecordSetsXml {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<ResourceRecordSetXml>,
}

// Field order matters on the wire: the change request body is validated
// against the provider's schema (Name, Type, SetIdentifier, Weight, TTL,
// ResourceRecords).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecordSetXml {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "SetIdentifier", skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(rename = "ResourceRecords", default)]
    pub resource_records: ResourceRecordsXml,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRecordsXml {
    #[serde(rename = "ResourceRecord", default)]
    pub items: Vec<ResourceRecordXml>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecordXml {
    #[serde(rename = "Value")]
    pub value: String,
}

// --- Change submission ---

#[derive(Debug, Serialize)]
pub struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: ChangeBatchXml,
}

#[derive(Debug, Serialize)]
pub struct ChangeBatchXml {
    #[serde(rename = "Changes")]
    pub changes: ChangesXml,
}

#[derive(Debug, Serialize)]
pub struct ChangesXml {
    #[serde(rename = "Change")]
    pub items: Vec<ChangeXml>,
}

#[derive(Debug, Serialize)]
pub struct ChangeXml {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "ResourceRecordSet")]
    pub resource_record_set: ResourceRecordSetXml,
}

#[derive(Debug, Deserialize)]
pub struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
}

#[derive(Debug, Deserialize)]
pub struct ChangeInfoXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmittedAt")]
    pub submitted_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: ErrorXml,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorXml {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

// --- Conversions ---

pub fn to_hosted_zone(zone: &HostedZoneXml) -> HostedZone {
    HostedZone {
        id: zone.id.clone(),
        name: zone.name.clone(),
    }
}

pub fn to_record_set(rrs: &ResourceRecordSetXml) -> RecordSet {
    RecordSet {
        name: rrs.name.clone(),
        record_type: RecordType::from_wire(&rrs.record_type),
        set_identifier: rrs.set_identifier.clone(),
        ttl: rrs.ttl,
        weight: rrs.weight,
        addresses: rrs
            .resource_records
            .items
            .iter()
            .map(|r| r.value.clone())
            .collect(),
    }
}

pub fn to_wire_record_set(rrs: &RecordSet) -> ResourceRecordSetXml {
    ResourceRecordSetXml {
        name: rrs.name.clone(),
        record_type: rrs.record_type.as_str().to_string(),
        set_identifier: rrs.set_identifier.clone(),
        weight: rrs.weight,
        ttl: rrs.ttl,
        resource_records: ResourceRecordsXml {
            items: rrs
                .addresses
                .iter()
                .map(|a| ResourceRecordXml { value: a.clone() })
                .collect(),
        },
    }
}

pub fn to_change_info(info: &ChangeInfoXml) -> ChangeInfo {
    ChangeInfo {
        id: info.id.clone(),
        status: info.status.clone(),
        submitted_at: info.submitted_at.clone(),
    }
}

pub fn upsert_request(rrs: &RecordSet) -> ChangeResourceRecordSetsRequest {
    ChangeResourceRecordSetsRequest {
        xmlns: ROUTE53_XMLNS,
        change_batch: ChangeBatchXml {
            changes: ChangesXml {
                items: vec![ChangeXml {
                    action: "UPSERT".to_string(),
                    resource_record_set: to_wire_record_set(rrs),
                }],
            },
        },
    }
}
