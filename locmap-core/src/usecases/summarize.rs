use crate::usecases::prelude::*;

/// A user facing message about the outcome of a resolution pass.
pub fn summarize(report: &ResolutionReport) -> String {
    let ResolutionReport {
        total,
        resolved,
        failed,
    } = *report;
    match (total, failed) {
        (0, _) => "All addresses already had coordinates.".to_string(),
        (_, 0) => format!("Geocoded {resolved} of {total} {}.", addresses(total)),
        (_, 1) => "1 address could not be geocoded and will not appear on the map.".to_string(),
        (_, n) => format!("{n} addresses could not be geocoded and will not appear on the map."),
    }
}

fn addresses(n: usize) -> &'static str {
    if n == 1 {
        "address"
    } else {
        "addresses"
    }
}
