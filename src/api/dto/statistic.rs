//! DTOs for account statistics.

use std::collections::BTreeMap;

/// Hit counts keyed by target URL.
///
/// ```json
/// { "https://example.com/a": 3, "https://example.com/b": 0 }
/// ```
pub type StatisticResponse = BTreeMap<String, u64>;
