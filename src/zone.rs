use log::debug;

use crate::core::provider::HostedZoneApi;
use crate::error::Error;
use crate::name;

/// Walks the hosted-zone listing page by page until a zone matching the
/// record name's derived zone name turns up, and returns its short id.
/// No caching; every invocation re-resolves.
pub async fn resolve_zone_id(api: &dyn HostedZoneApi, record_name: &str) -> Result<String, Error> {
    let zone_name = name::zone_name_of(record_name)?;
    let mut marker: Option<String> = None;
    loop {
        let page = api.list_hosted_zones(marker.take()).await?;
        if let Some(zone) = page.zones.iter().find(|z| z.name == zone_name) {
            let zone_id = short_zone_id(&zone.id)?;
            debug!("zoneName={zone_name} zoneID={zone_id}");
            return Ok(zone_id);
        }
        match page.next_marker {
            Some(next) => marker = Some(next),
            None => return Err(Error::ZoneNotFound(zone_name)),
        }
    }
}

/// The provider reports zone ids as resource paths like
/// `/hostedzone/Z22CR2RGPPKRQB`; only the last part is wanted.
pub fn short_zone_id(id: &str) -> Result<String, Error> {
    let components: Vec<&str> = id.split('/').collect();
    if components.len() != 3 {
        return Err(Error::MalformedZoneId(id.to_string()));
    }
    Ok(components[components.len() - 1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::MockHostedZoneApi;
    use crate::core::record::{HostedZone, ZonePage};
    use assert_matches::assert_matches;

    fn zone(id: &str, name: &str) -> HostedZone {
        HostedZone {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn short_zone_id_strips_path_prefix() {
        assert_eq!(
            short_zone_id("/hostedzone/Z22CR2RGPPKRQB").unwrap(),
            "Z22CR2RGPPKRQB"
        );
    }

    #[test]
    fn short_zone_id_rejects_unexpected_shapes() {
        assert_matches!(short_zone_id("Z22CR2RGPPKRQB"), Err(Error::MalformedZoneId(_)));
        assert_matches!(
            short_zone_id("/hostedzone/Z22CR2RGPPKRQB/extra"),
            Err(Error::MalformedZoneId(_))
        );
    }

    #[tokio::test]
    async fn resolves_zone_on_first_page() {
        let mut api = MockHostedZoneApi::new();
        api.expect_list_hosted_zones().times(1).returning(|marker| {
            assert_eq!(marker, None);
            Ok(ZonePage {
                zones: vec![
                    zone("/hostedzone/ZOTHER", "other.com."),
                    zone("/hostedzone/Z22CR2RGPPKRQB", "example.com."),
                ],
                next_marker: None,
            })
        });

        let id = resolve_zone_id(&api, "www.example.com.").await.unwrap();
        assert_eq!(id, "Z22CR2RGPPKRQB");
    }

    #[tokio::test]
    async fn follows_pagination_markers_until_match() {
        let mut api = MockHostedZoneApi::new();
        api.expect_list_hosted_zones()
            .times(2)
            .returning(|marker| match marker.as_deref() {
                None => Ok(ZonePage {
                    zones: vec![zone("/hostedzone/ZOTHER", "other.com.")],
                    next_marker: Some("page-2".to_string()),
                }),
                Some("page-2") => Ok(ZonePage {
                    zones: vec![zone("/hostedzone/ZTARGET", "example.com.")],
                    next_marker: None,
                }),
                Some(other) => panic!("unexpected marker {other}"),
            });

        let id = resolve_zone_id(&api, "www.example.com.").await.unwrap();
        assert_eq!(id, "ZTARGET");
    }

    #[tokio::test]
    async fn missing_zone_is_an_error_after_all_pages() {
        let mut api = MockHostedZoneApi::new();
        api.expect_list_hosted_zones()
            .times(2)
            .returning(|marker| match marker {
                None => Ok(ZonePage {
                    zones: vec![],
                    next_marker: Some("page-2".to_string()),
                }),
                Some(_) => Ok(ZonePage {
                    zones: vec![zone("/hostedzone/ZOTHER", "other.com.")],
                    next_marker: None,
                }),
            });

        let err = resolve_zone_id(&api, "www.example.com.").await.unwrap_err();
        assert_matches!(err, Error::ZoneNotFound(zone) if zone == "example.com.");
    }

    #[tokio::test]
    async fn malformed_zone_id_fails_resolution() {
        let mut api = MockHostedZoneApi::new();
        api.expect_list_hosted_zones().returning(|_| {
            Ok(ZonePage {
                zones: vec![zone("hostedzone-Z1", "example.com.")],
                next_marker: None,
            })
        });

        let err = resolve_zone_id(&api, "www.example.com.").await.unwrap_err();
        assert_matches!(err, Error::MalformedZoneId(_));
    }

    #[tokio::test]
    async fn invalid_record_name_fails_before_listing() {
        let api = MockHostedZoneApi::new();
        let err = resolve_zone_id(&api, "a.").await.unwrap_err();
        assert_matches!(err, Error::InvalidName(_));
    }
}
