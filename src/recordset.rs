use std::collections::HashSet;

use log::{debug, warn};

use crate::core::provider::HostedZoneApi;
use crate::core::record::{ChangeInfo, RecordSet, RecordType};
use crate::error::Error;

/// Finds the existing record set matching `record_name` and
/// `set_identifier` in the first listing page. The record type is only a
/// listing hint, not a match filter, so a differently-typed set with the
/// same name and set identifier matches too.
pub async fn find_record_set(
    api: &dyn HostedZoneApi,
    zone_id: &str,
    record_name: &str,
    record_type: &RecordType,
    set_identifier: Option<&str>,
) -> Result<RecordSet, Error> {
    let sets = api.list_record_sets(zone_id, record_name, record_type).await?;
    sets.into_iter()
        .find(|rrs| rrs.name == record_name && rrs.set_identifier.as_deref() == set_identifier)
        .ok_or_else(|| Error::RecordSetNotFound {
            zone_id: zone_id.to_string(),
            name: record_name.to_string(),
            set_identifier: set_identifier.map(str::to_string),
        })
}

/// Appends `ips` to the record set's address list and submits the result.
/// No de-duplication against existing addresses: repeated adds of the same
/// IP produce repeated entries.
pub async fn add_addresses(
    api: &dyn HostedZoneApi,
    zone_id: &str,
    mut record_set: RecordSet,
    ips: &[String],
) -> Result<ChangeInfo, Error> {
    if ips.is_empty() {
        return Err(Error::EmptyInput);
    }
    record_set.addresses.extend(ips.iter().cloned());
    submit(api, zone_id, &record_set).await
}

/// Removes `ips` from the record set's address list (set difference) and
/// submits the result. Addresses requested for removal but not present are
/// reported and otherwise ignored. The resulting list may be empty; no
/// guard against emptying the record set entirely.
pub async fn remove_addresses(
    api: &dyn HostedZoneApi,
    zone_id: &str,
    mut record_set: RecordSet,
    ips: &[String],
) -> Result<ChangeInfo, Error> {
    if ips.is_empty() {
        return Err(Error::EmptyInput);
    }
    let requested: HashSet<&str> = ips.iter().map(String::as_str).collect();
    for ip in &requested {
        if !record_set.addresses.iter().any(|a| a == ip) {
            warn!("address {ip} not found in record set {}", record_set.name);
        }
    }
    record_set
        .addresses
        .retain(|a| !requested.contains(a.as_str()));
    submit(api, zone_id, &record_set).await
}

async fn submit(
    api: &dyn HostedZoneApi,
    zone_id: &str,
    record_set: &RecordSet,
) -> Result<ChangeInfo, Error> {
    let info = api.change_record_set(zone_id, record_set).await?;
    debug!("change {} submitted, status {}", info.id, info.status);
    Ok(info)
}
