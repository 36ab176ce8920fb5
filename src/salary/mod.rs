use crate::models::RawSalary;

/// Scale factor applied when only the lower bound is known
const FROM_ONLY_FACTOR: f64 = 1.2;
/// Scale factor applied when only the upper bound is known
const TO_ONLY_FACTOR: f64 = 0.8;

/// Point estimate derived from one salary range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryEstimate {
    pub value: f64,
    /// False when the range carried no usable bound
    pub counted: bool,
}

/// Estimate a single salary from a (from, to) range.
///
/// A zero bound means the same as an absent one: the sources report
/// "not specified" as 0. When one bound is missing, the other is scaled
/// to approximate the midpoint of a typical range.
pub fn estimate(from: Option<u32>, to: Option<u32>) -> SalaryEstimate {
    let from = from.filter(|bound| *bound > 0);
    let to = to.filter(|bound| *bound > 0);

    let value = match (from, to) {
        (Some(from), Some(to)) => (f64::from(from) + f64::from(to)) / 2.0,
        (Some(from), None) => f64::from(from) * FROM_ONLY_FACTOR,
        (None, Some(to)) => f64::from(to) * TO_ONLY_FACTOR,
        (None, None) => 0.0,
    };

    SalaryEstimate {
        value,
        counted: value > 0.0,
    }
}

/// Average the salaries of the records carrying the target currency.
///
/// Returns the truncated average together with the number of records that
/// produced a usable estimate. The average is `None` when no record could
/// be estimated, which also keeps the division well-defined.
pub fn aggregate(records: &[RawSalary], currency: &str) -> (Option<u64>, usize) {
    let mut total = 0.0;
    let mut processed = 0usize;

    for record in records {
        if record.currency != currency {
            continue;
        }
        let predicted = estimate(record.from, record.to);
        if predicted.counted {
            total += predicted.value;
            processed += 1;
        }
    }

    if processed > 0 {
        (Some((total / processed as f64) as u64), processed)
    } else {
        (None, 0)
    }
}
