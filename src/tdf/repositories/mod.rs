mod csv_transaction_repository;
mod in_memory_transaction_repository;
mod json_transaction_repository;
mod transaction_repository;

pub use csv_transaction_repository::CsvTransactionRepository;
pub use in_memory_transaction_repository::InMemoryTransactionRepository;
pub use json_transaction_repository::JsonTransactionRepository;
pub use transaction_repository::{open, RepositoryError, TransactionRepository};
