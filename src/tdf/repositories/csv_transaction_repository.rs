use super::{RepositoryError, TransactionRepository};

use crate::ids::{IssueId, TransactionId};
use crate::Money;
use crate::Result;
use crate::Transaction;

use std::{fs::File, io, path::Path};

use anyhow::Context;

use csv::{Reader, ReaderBuilder, Trim};

use serde::Deserialize;

/// Represents a csv row. The amount stays a string so csv never infers it as a float.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct CsvTransactionRecord {
    #[serde(rename = "mtn", alias = "id")]
    id: i32,
    amount: String,
    sender_full_name: String,
    sender_age: i32,
    beneficiary_full_name: String,
    beneficiary_age: i32,
    issue_id: Option<i32>,
    issue_solved: Option<bool>,
    issue_message: Option<String>,
}

impl CsvTransactionRecord {
    fn parse_transaction(self) -> Result<Transaction> {
        let amount = Money::parse(&self.amount)?;

        Ok(Transaction {
            id: TransactionId(self.id),
            amount,
            sender_full_name: self.sender_full_name,
            sender_age: self.sender_age,
            beneficiary_full_name: self.beneficiary_full_name,
            beneficiary_age: self.beneficiary_age,
            issue_id: self.issue_id.map(IssueId),
            issue_solved: self.issue_solved.unwrap_or(false),
            issue_message: self.issue_message,
        })
    }
}

/// Transactions loaded once from a headered csv file. Empty cells stand for absent optional values.
#[derive(Debug, Clone)]
pub struct CsvTransactionRepository {
    transactions: Vec<Transaction>,
}

impl CsvTransactionRepository {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader: Reader<File> = build_csv_reader()
            .from_path(path)
            .with_context(|| RepositoryError::Load(path.display().to_string()))?;

        let repository = Self::from_csv_reader(reader)
            .with_context(|| RepositoryError::Load(path.display().to_string()))?;

        log::debug!(
            "Loaded {} transactions from {path:?}",
            repository.transactions.len()
        );

        return Ok(repository);
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        return Self::from_csv_reader(build_csv_reader().from_reader(reader));
    }

    fn from_csv_reader<R: io::Read>(mut reader: Reader<R>) -> Result<Self> {
        let mut transactions = vec![];

        // A single bad row fails the whole load
        for record in reader.deserialize::<CsvTransactionRecord>() {
            log::debug!("Parsing csv record into Transaction: {record:?}");
            transactions.push(record?.parse_transaction()?);
        }

        return Ok(Self { transactions });
    }
}

impl TransactionRepository for CsvTransactionRepository {
    fn get_all(&self) -> Result<Vec<Transaction>> {
        return Ok(self.transactions.clone());
    }
}

fn build_csv_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All);

    return builder;
}
