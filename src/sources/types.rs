use crate::models::RawSalary;

/// Everything one language query yields from a source
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Normalized salary records from every fetched page
    pub records: Vec<RawSalary>,
    /// Total count reported by the source, independent of pages fetched
    pub found: u64,
}
