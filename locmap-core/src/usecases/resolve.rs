use crate::{gateways::geocode::GeoCodingGateway, usecases::prelude::*};

/// Receives the progress of a resolution pass after each row.
pub trait ProgressObserver {
    fn progress(&mut self, progress: Progress);
}

impl<F> ProgressObserver for F
where
    F: FnMut(Progress),
{
    fn progress(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Geocodes all records without a position.
///
/// Records that already have a position are never looked up again,
/// so running the pass twice is the same as running it once.
/// A failed lookup leaves the record without a position and is
/// only counted; it never stops the pass.
pub fn resolve(
    dataset: &mut Dataset,
    geo_gw: &dyn GeoCodingGateway,
    observer: &mut dyn ProgressObserver,
) -> ResolutionReport {
    let total_rows = dataset.len();
    let mut report = ResolutionReport::default();
    for (idx, record) in dataset.records_mut().enumerate() {
        if !record.is_resolved() {
            report.total += 1;
            match resolve_record(geo_gw, record) {
                Some(pos) => {
                    log::debug!("Resolved address of row {}: {}", idx + 1, pos);
                    record.position = Some(pos);
                    report.resolved += 1;
                }
                None => {
                    log::warn!(
                        "Could not resolve address of row {} ({}): '{}'",
                        idx + 1,
                        record.company_name,
                        record.address
                    );
                    report.failed += 1;
                }
            }
        }
        observer.progress(Progress {
            processed: idx + 1,
            total: total_rows,
        });
    }
    debug_assert_eq!(report.total, report.resolved + report.failed);
    report
}

fn resolve_record(geo_gw: &dyn GeoCodingGateway, record: &LocationRecord) -> Option<MapPoint> {
    if record.has_address() {
        geo_gw.resolve_address_lat_lng(record.address.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn resolve_only_missing_positions() {
        let mut dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", Some((10.0, 20.0))),
            ("Bar", "Main St 2", None),
            ("Baz", "Nowhere", None),
        ]);
        let geo_gw = MockGeoGw::default().with("Main St 2", 30.0, 40.0);
        let report = resolve(&mut dataset, &geo_gw, &mut |_: Progress| {});
        assert_eq!(
            ResolutionReport {
                total: 2,
                resolved: 1,
                failed: 1
            },
            report
        );
        let records = dataset.records();
        assert_eq!(Some(MapPoint::from_lat_lng_deg(10.0, 20.0)), records[0].position);
        assert_eq!(Some(MapPoint::from_lat_lng_deg(30.0, 40.0)), records[1].position);
        assert_eq!(None, records[2].position);
        assert_eq!(vec!["Main St 2", "Nowhere"], geo_gw.requested());
    }

    #[test]
    fn empty_dataset() {
        let mut dataset = dataset_with_rows(&[]);
        let geo_gw = MockGeoGw::default();
        let mut reported = vec![];
        let report = resolve(&mut dataset, &geo_gw, &mut |p: Progress| reported.push(p));
        assert_eq!(ResolutionReport::default(), report);
        assert!(geo_gw.requested().is_empty());
        assert!(reported.is_empty());
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let mut dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", None),
            ("Bar", "Main St 2", None),
            ("Baz", "Nowhere", None),
        ]);
        let geo_gw = MockGeoGw::default()
            .with("Main St 1", 1.0, 2.0)
            .with("Main St 2", 3.0, 4.0);
        let first = resolve(&mut dataset, &geo_gw, &mut |_: Progress| {});
        let once = dataset.clone();
        let second = resolve(&mut dataset, &geo_gw, &mut |_: Progress| {});
        assert_eq!(once, dataset);
        assert_eq!(3, first.total);
        assert_eq!(
            ResolutionReport {
                total: 1,
                resolved: 0,
                failed: 1
            },
            second
        );
        // Resolved rows are not requested again
        assert_eq!(
            vec!["Main St 1", "Main St 2", "Nowhere", "Nowhere"],
            geo_gw.requested()
        );
    }

    #[test]
    fn report_monotonic_progress_for_every_row() {
        let mut dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", Some((1.0, 1.0))),
            ("Bar", "Main St 2", None),
            ("Baz", "Main St 3", None),
            ("Qux", "Main St 4", Some((2.0, 2.0))),
        ]);
        let mut fractions = vec![];
        resolve(&mut dataset, &MockGeoGw::default(), &mut |p: Progress| {
            fractions.push(p.fraction())
        });
        assert_eq!(vec![0.25, 0.5, 0.75, 1.0], fractions);
    }

    #[test]
    fn all_lookups_fail() {
        let mut dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", None),
            ("Bar", "Main St 2", None),
        ]);
        let report = resolve(
            &mut dataset,
            &|_: &str| -> Option<MapPoint> { None },
            &mut |_: Progress| {},
        );
        assert_eq!(
            ResolutionReport {
                total: 2,
                resolved: 0,
                failed: 2
            },
            report
        );
        assert_eq!(2, dataset.count_unresolved());
    }

    #[test]
    fn blank_addresses_are_not_looked_up() {
        let mut dataset = dataset_with_rows(&[("Foo", "  ", None), ("Bar", "Main St 2", None)]);
        let geo_gw = MockGeoGw::default().with("Main St 2", 3.0, 4.0);
        let report = resolve(&mut dataset, &geo_gw, &mut |_: Progress| {});
        assert_eq!(1, report.failed);
        assert_eq!(1, report.resolved);
        assert_eq!(vec!["Main St 2"], geo_gw.requested());
    }

    #[test]
    fn positions_are_always_complete_pairs() {
        let mut dataset = dataset_with_rows(&[
            ("Foo", "Main St 1", None),
            ("Bar", "Main St 2", Some((5.0, 6.0))),
        ]);
        let geo_gw = |addr: &str| (addr == "Main St 1").then(|| MapPoint::from_lat_lng_deg(0.0, 0.0));
        resolve(&mut dataset, &geo_gw, &mut |_: Progress| {});
        let table = export(&dataset);
        let columns = dataset.columns();
        for row in &table.rows {
            assert_eq!(
                row[columns.latitude].is_empty(),
                row[columns.longitude].is_empty()
            );
        }
        assert_eq!(Cell::Number(0.0), table.rows[0][columns.latitude]);
    }
}
