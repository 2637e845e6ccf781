use crate::core::record::{ChangeInfo, RecordSet, RecordType, ZonePage};
use crate::error::Error;
use async_trait::async_trait;

/// Seam for the hosted-zone DNS service. The core logic only talks to this
/// trait; the concrete Route53 client lives under `providers/`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    #[allow(dead_code)]
    fn name(&self) -> &str;

    /// One page of hosted zones, continuing from `marker` when given.
    async fn list_hosted_zones(&self, marker: Option<String>) -> Result<ZonePage, Error>;

    /// First page of record sets starting at (`start_name`, `start_type`).
    async fn list_record_sets(
        &self,
        zone_id: &str,
        start_name: &str,
        start_type: &RecordType,
    ) -> Result<Vec<RecordSet>, Error>;

    /// Submit `record_set` as a single UPSERT, replacing the remote set.
    async fn change_record_set(
        &self,
        zone_id: &str,
        record_set: &RecordSet,
    ) -> Result<ChangeInfo, Error>;
}
