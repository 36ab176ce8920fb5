/// One vacancy's salary range, normalized from a source-specific wire shape
#[derive(Debug, Clone, PartialEq)]
pub struct RawSalary {
    /// Lower bound, absent when the source reported none
    pub from: Option<u32>,
    /// Upper bound, absent when the source reported none
    pub to: Option<u32>,
    /// Currency code as the source spells it ("RUR" on HeadHunter, "rub" on SuperJob)
    pub currency: String,
}

/// Aggregated vacancy statistics for one (source, language) pair
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStats {
    /// Total matches the source reported for the query, independent of paging
    pub found_vacancies: u64,
    /// Records that produced a usable salary estimate
    pub processed_vacancies: usize,
    /// Truncated mean of the estimates; None when nothing was processed
    pub average_salary: Option<u64>,
}
