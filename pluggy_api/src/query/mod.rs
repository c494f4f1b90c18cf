mod common;
pub use self::common::{PageFilters, PagedQuery, Query, QueryParams, QueryValue};

mod connector;
pub use self::connector::ConnectorFilters;

mod account;
pub use self::account::AccountFilters;

mod transaction;
pub use self::transaction::TransactionFilters;

mod investment;
pub use self::investment::InvestmentFilters;
