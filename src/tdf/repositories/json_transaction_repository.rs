use super::{RepositoryError, TransactionRepository};

use crate::Result;
use crate::Transaction;

use std::{fs, path::Path};

use anyhow::Context;

/// Transactions loaded once from a file holding a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonTransactionRepository {
    transactions: Vec<Transaction>,
}

impl JsonTransactionRepository {
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| RepositoryError::Load(path.display().to_string()))?;

        let repository = Self::from_json(&json)
            .with_context(|| RepositoryError::Load(path.display().to_string()))?;

        log::debug!(
            "Loaded {} transactions from {path:?}",
            repository.transactions.len()
        );

        return Ok(repository);
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let transactions: Vec<Transaction> = serde_json::from_str(json)?;

        return Ok(Self { transactions });
    }
}

impl TransactionRepository for JsonTransactionRepository {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        return Ok(self.transactions.clone());
    }
}
