mod transaction_query_service;

pub use transaction_query_service::{QueryServiceError, TransactionQueryService};
