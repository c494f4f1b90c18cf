use crate::types::InvestmentType;

use super::{PageFilters, PagedQuery, Query, QueryParams};

/// Filters for `GET /investments` beyond the required item id.
#[derive(Clone, Copy, Debug, Default)]
pub struct InvestmentFilters {
    pub common: PageFilters,
    pub investment_type: Option<InvestmentType>,
}

impl Query for InvestmentFilters {
    fn add_to_params(&self, params: &mut QueryParams) {
        self.common.add_to_params(params);
        params.set("type", self.investment_type.map(|t| t.to_string().into()));
    }
}

impl PagedQuery for InvestmentFilters {
    fn get_common(&mut self) -> &mut PageFilters {
        &mut self.common
    }
}

impl InvestmentFilters {
    pub fn with_type(mut self, investment_type: InvestmentType) -> Self {
        self.investment_type = Some(investment_type);
        self
    }
}
