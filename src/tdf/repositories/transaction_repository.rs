use super::{CsvTransactionRepository, JsonTransactionRepository};

use crate::Result;
use crate::Transaction;

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Unsupported transactions source format: {0}")]
    UnsupportedFormat(String),

    #[error("Couldn't load transactions from: {0}")]
    Load(String),
}

/// Source of transaction records. Queries never look past this boundary.
pub trait TransactionRepository {
    /// Returns every known transaction, always in the same order.
    ///
    /// The returned vector is a copy: callers are free to consume it without affecting the
    /// repository or any other query.
    fn get_all(&self) -> Result<Vec<Transaction>>;
}

impl<R: TransactionRepository + ?Sized> TransactionRepository for &R {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        return (**self).get_all();
    }
}

impl<R: TransactionRepository + ?Sized> TransactionRepository for Box<R> {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        return (**self).get_all();
    }
}

/// Opens a file-backed repository, picking the format from the file extension
pub fn open(path: &Path) -> Result<Box<dyn TransactionRepository>> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());

    log::debug!("Opening transactions source {path:?} with extension {extension:?}");

    let repository: Box<dyn TransactionRepository> = match extension.as_deref() {
        Some("json") => Box::new(JsonTransactionRepository::from_path(path)?),
        Some("csv") => Box::new(CsvTransactionRepository::from_path(path)?),
        _ => Err(RepositoryError::UnsupportedFormat(path.display().to_string()))?,
    };

    return Ok(repository);
}
