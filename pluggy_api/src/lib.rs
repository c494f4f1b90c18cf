mod auth;
mod client;
mod credentials;
mod endpoints;
mod errors;
mod paginate;
mod query;
mod request;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::credentials::Credentials;
pub use self::errors::Error;
pub use self::paginate::{fetch_all, MAX_PAGE_SIZE};
pub use self::query::{
    AccountFilters, ConnectorFilters, InvestmentFilters, PageFilters, PagedQuery, Query,
    QueryParams, QueryValue, TransactionFilters,
};
pub use self::request::{strip_nulls, ApiRequest};
