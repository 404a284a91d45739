use crate::usecases::prelude::*;
use std::collections::BTreeSet;

/// Assigns one palette color to each distinct company.
///
/// The names are sorted before the palette is applied, so the
/// result does not depend on the order in which companies appear.
/// The palette is repeated if there are more companies than colors.
pub fn assign_colors<'a>(
    companies: impl IntoIterator<Item = &'a str>,
    palette: &Palette,
) -> ColorMap {
    companies
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, company)| (company.to_string(), palette.get(i)))
        .collect()
}
