//! Nearest-first ordering of region records.

use crate::distance::great_circle_distance_km;
use crate::region::{Location, RegionRecord};

/// Orders `records` nearest-first relative to `origin`.
///
/// Lists of zero or one record are returned untouched: no distance is
/// attached and nothing is sorted. Longer lists get a fresh `distance` on
/// every record and are sorted ascending; ties keep their incoming order.
#[must_use]
pub fn rank_by_distance(mut records: Vec<RegionRecord>, origin: Location) -> Vec<RegionRecord> {
    if records.len() <= 1 {
        return records;
    }

    for record in &mut records {
        record.distance = Some(great_circle_distance_km(
            record.latitude,
            record.longitude,
            origin.lat,
            origin.lon,
        ));
    }

    records.sort_by(|a, b| {
        let a = a.distance.unwrap_or_default();
        let b = b.distance.unwrap_or_default();
        a.total_cmp(&b)
    });
    records
}
