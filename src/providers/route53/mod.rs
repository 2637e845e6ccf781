//! Route53 provider implementation

pub mod client;
pub mod error;
pub mod sign;
pub mod types;


pub use client::{Route53Config, Route53Provider};
pub use error::Route53ProviderError;

use async_trait::async_trait;

use crate::core::provider::HostedZoneApi;
use crate::core::record::{ChangeInfo, RecordSet, RecordType, ZonePage};
use crate::error::Error;
use error::map_error;
use types::{to_change_info, to_hosted_zone, to_record_set, upsert_request};

#[async_trait]
impl HostedZoneApi for Route53Provider {
    fn name(&self) -> &str {
        "route53"
    }

    async fn list_hosted_zones(&self, marker: Option<String>) -> Result<ZonePage, Error> {
        let resp = self
            .list_hosted_zones_page(marker.as_deref())
            .await
            .map_err(map_error)?;
        Ok(ZonePage {
            zones: resp.hosted_zones.items.iter().map(to_hosted_zone).collect(),
            next_marker: if resp.is_truncated {
                resp.next_marker
            } else {
                None
            },
        })
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &RecordType,
    ) -> Result<Vec<RecordSet>, Error> {
        let resp = self
            .list_resource_record_sets(zone_id, start_name, start_type.as_str())
            .await
            .map_err(map_error)?;
        Ok(resp
            .resource_record_sets
            .items
            .iter()
            .map(to_record_set)
            .collect())
    }

    async fn change_record_set(
        &self,
        zone_id: &str,
        record_set: &RecordSet,
    ) -> Result<ChangeInfo, Error> {
        let request = upsert_request(record_set);
        let resp = self
            .change_resource_record_sets(zone_id, &request)
            .await
            .map_err(map_error)?;
        Ok(to_change_info(&resp.change_info))
    }
}
