//! Sequential narrowing of the catalog by provider and region.
//!
//! Every function returns freshly cloned records so later ranking never
//! writes into the caller's catalog.

use crate::region::RegionRecord;

/// Records whose `name` contains `provider_code` anywhere.
///
/// Matching is substring containment, not a prefix check on the provider
/// segment, so a short code can also match names from other providers
/// (for example `"do"` matches `"google-london"`).
#[must_use]
pub fn filter_by_provider(catalog: &[RegionRecord], provider_code: &str) -> Vec<RegionRecord> {
    catalog
        .iter()
        .filter(|r| r.name.contains(provider_code))
        .cloned()
        .collect()
}

/// Records whose `region` equals `region` exactly (case-sensitive).
#[must_use]
pub fn filter_by_region(records: &[RegionRecord], region: &str) -> Vec<RegionRecord> {
    records
        .iter()
        .filter(|r| r.region == region)
        .cloned()
        .collect()
}

/// Applies the provider filter, then the region filter, skipping whichever is
/// empty. With both empty the whole catalog comes back in its original order.
#[must_use]
pub fn apply_filters(
    catalog: &[RegionRecord],
    provider_code: &str,
    region: &str,
) -> Vec<RegionRecord> {
    let by_provider = if provider_code.is_empty() {
        catalog.to_vec()
    } else {
        filter_by_provider(catalog, provider_code)
    };

    if region.is_empty() {
        by_provider
    } else {
        filter_by_region(&by_provider, region)
    }
}
