use crate::usecases::prelude::*;

/// The records of a single company in dataset order.
///
/// The header and the column roles are the ones of the full dataset.
/// Fails if no record belongs to the company.
pub fn filter_by_company(dataset: &Dataset, company_name: &str) -> Result<Dataset> {
    let records: Vec<_> = dataset
        .records()
        .iter()
        .filter(|r| r.company_name == company_name)
        .cloned()
        .collect();
    if records.is_empty() {
        return Err(Error::UnknownCompany(company_name.to_string()));
    }
    Ok(Dataset::new(
        dataset.header().to_vec(),
        dataset.columns(),
        records,
    ))
}
