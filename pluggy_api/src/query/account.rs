use crate::types::AccountType;

use super::{Query, QueryParams};

/// Filters for `GET /accounts` beyond the required item id.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountFilters {
    pub account_type: Option<AccountType>,
}

impl Query for AccountFilters {
    fn add_to_params(&self, params: &mut QueryParams) {
        params.set("type", self.account_type.map(|t| t.to_string().into()));
    }
}

impl AccountFilters {
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }
}
