use chrono::NaiveDate;

use super::{PageFilters, PagedQuery, Query, QueryParams};

/// Filters for `GET /transactions` beyond the required account id.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransactionFilters {
    pub common: PageFilters,
    /// Inclusive lower bound on the transaction date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date.
    pub to: Option<NaiveDate>,
}

impl Query for TransactionFilters {
    fn add_to_params(&self, params: &mut QueryParams) {
        self.common.add_to_params(params);
        params.set("from", self.from.map(Into::into));
        params.set("to", self.to.map(Into::into));
    }
}

impl PagedQuery for TransactionFilters {
    fn get_common(&mut self) -> &mut PageFilters {
        &mut self.common
    }
}

impl TransactionFilters {
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_filters() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        insta::assert_snapshot!(TransactionFilters::default()
            .with_from(from)
            .with_to(to)
            .to_params()
            .to_query_string(), @"?from=2024-01-01&to=2024-01-31");

        insta::assert_snapshot!(TransactionFilters::default()
            .with_page(2)
            .with_page_size(500)
            .with_from(from)
            .to_params()
            .to_query_string(), @"?from=2024-01-01&page=2&pageSize=500");
    }
}
