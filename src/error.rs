use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidName(String),
    ZoneNotFound(String),
    MalformedZoneId(String),
    RecordSetNotFound {
        zone_id: String,
        name: String,
        set_identifier: Option<String>,
    },
    EmptyInput,
    CredentialError(String),
    ProviderError(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidName(name) => write!(f, "invalid record name: {name}"),
            Error::ZoneNotFound(zone) => write!(f, "zone {zone} not found"),
            Error::MalformedZoneId(id) => write!(f, "problem splitting id from {id}"),
            Error::RecordSetNotFound {
                zone_id,
                name,
                set_identifier,
            } => write!(
                f,
                "no record set found for zoneID={zone_id} recordName={name} setIdentifier={}",
                set_identifier.as_deref().unwrap_or("")
            ),
            Error::EmptyInput => write!(f, "at least one IP needs to be passed"),
            Error::CredentialError(msg) => write!(f, "Credential error: {msg}"),
            Error::ProviderError(msg) => write!(f, "Provider error: {msg}"),
        }
    }
}
