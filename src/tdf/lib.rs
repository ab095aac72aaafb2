mod grouped;
pub mod ids;
mod money;
pub mod report;
pub mod repositories;
mod result;
pub mod services;
mod transaction;

pub use grouped::Grouped;
pub use money::{Money, MoneyError};
pub use result::Result;
pub use transaction::Transaction;

/// Builds the query service on top of a file-backed repository (json or csv)
pub fn build_transaction_query_service(
    path: &std::path::Path,
) -> Result<services::TransactionQueryService<Box<dyn repositories::TransactionRepository>>> {
    let repository = repositories::open(path)?;
    let transaction_query_service = services::TransactionQueryService::new(repository);

    return Ok(transaction_query_service);
}
