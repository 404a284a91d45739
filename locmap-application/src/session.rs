use super::*;

/// State of one uploaded file.
///
/// A session is created on upload and replaced by the next upload.
/// Flows take it by value and hand it back with their changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    file_name: String,
    dataset: Dataset,
    last_report: Option<ResolutionReport>,
}

impl Session {
    pub(crate) fn new(file_name: String, dataset: Dataset) -> Self {
        Self {
            file_name,
            dataset,
            last_report: None,
        }
    }

    /// Name of the uploaded file.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub(crate) fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    /// Report of the most recent geocoding pass.
    pub fn last_report(&self) -> Option<&ResolutionReport> {
        self.last_report.as_ref()
    }

    pub(crate) fn set_last_report(&mut self, report: ResolutionReport) {
        self.last_report = Some(report);
    }
}
