use super::TransactionRepository;

use crate::Result;
use crate::Transaction;

/// Append-only list of transactions kept in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryTransactionRepository {
    history: Vec<Transaction>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction, returning its position in the history
    pub fn append(&mut self, transaction: Transaction) -> usize {
        let index = self.history.len();

        self.history.push(transaction);

        index
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Transaction>> for InMemoryTransactionRepository {
    fn from(history: Vec<Transaction>) -> Self {
        Self { history }
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.history.clone())
    }
}
