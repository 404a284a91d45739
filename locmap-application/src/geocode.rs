use super::*;
use crate::{gateways::geocode::GeoCodingGateway, usecases::ProgressObserver};

/// Outcome of the geocoding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geocoded {
    pub report: ResolutionReport,
    /// Human readable summary of the report.
    pub summary: String,
}

/// Geocodes all rows of the session that have no coordinates yet.
pub fn geocode(
    mut session: Session,
    geo_gw: &dyn GeoCodingGateway,
    observer: &mut dyn ProgressObserver,
) -> (Session, Geocoded) {
    let unresolved = session.dataset().count_unresolved();
    if unresolved == 0 {
        info!("All rows of {} already have coordinates", session.file_name());
    } else {
        info!(
            "Geocoding {} of {} row(s) from {}",
            unresolved,
            session.dataset().len(),
            session.file_name()
        );
    }
    let report = usecases::resolve(session.dataset_mut(), geo_gw, observer);
    let summary = usecases::summarize(&report);
    if report.is_complete() {
        info!("{summary}");
    } else {
        warn!("{summary}");
    }
    session.set_last_report(report);
    (session, Geocoded { report, summary })
}
