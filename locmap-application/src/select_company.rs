use super::*;

/// A session that only contains the rows of one company.
///
/// The given session stays untouched.
pub fn select_company(session: &Session, company_name: &str) -> Result<Session> {
    let dataset = usecases::filter_by_company(session.dataset(), company_name)?;
    debug!(
        "Selected {} row(s) of company '{company_name}'",
        dataset.len()
    );
    Ok(Session::new(session.file_name().to_string(), dataset))
}
