use std::fmt;

/// DNS record types the provider can return. The tool only mutates A
/// records, but listing pages can carry anything, so unrecognized types are
/// kept verbatim rather than dropped.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    Other(String),
}

impl RecordType {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            other => RecordType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::Other(s) => s,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted/latency/failover variant of a DNS name. Fetched fresh each
/// invocation, mutated in memory, then submitted wholesale as an UPSERT:
/// the full address list replaces the prior one on the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub name: String,
    pub record_type: RecordType,
    pub set_identifier: Option<String>,
    pub ttl: Option<u64>,
    pub weight: Option<i64>,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    /// Provider resource path, e.g. `/hostedzone/Z22CR2RGPPKRQB`.
    pub id: String,
    /// Dot-terminated zone name.
    pub name: String,
}

/// One page of a hosted-zone listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePage {
    pub zones: Vec<HostedZone>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeInfo {
    pub id: String,
    pub status: String,
    pub submitted_at: String,
}
