use crate::sources::types::SourceBatch;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all vacancy sources
/// This allows easy addition of new job boards in the future
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Fetch every result page for one language query
    async fn fetch_language(&self, language: &str) -> Result<SourceBatch>;

    /// Get the name of the vacancy source
    fn source_name(&self) -> &'static str;

    /// Currency code a record must carry to be aggregated
    fn currency_filter(&self) -> &'static str;
}
