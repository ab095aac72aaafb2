use crate::grouped::Grouped;
use crate::ids::IssueId;
use crate::repositories::TransactionRepository;
use crate::Money;
use crate::Result;
use crate::Transaction;

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryServiceError {
    #[error("Not found: {0}")]
    NotFound(&'static str),
}

/// Read-only queries over the transactions of a repository.
///
/// Every query fetches the full transaction list again and computes its answer from scratch.
/// Nothing is cached between calls and the fetched list is dropped once the query returns.
pub struct TransactionQueryService<R> {
    repository: R,
}

impl<R: TransactionRepository> TransactionQueryService<R> {
    pub fn new(repository: R) -> Self {
        return Self { repository };
    }

    /// Sum of all amounts. Zero when there are no transactions.
    pub fn total_amount(&self) -> Result<Money> {
        let transactions = self.repository.get_all()?;

        return Money::sum(transactions.iter().map(|tx| &tx.amount));
    }

    /// Sum of the amounts sent by the exact (case-sensitive) sender name. Zero when nothing matches.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> Result<Money> {
        let transactions = self.repository.get_all()?;

        return Money::sum(
            transactions
                .iter()
                .filter(|tx| tx.sender_full_name == sender_full_name)
                .map(|tx| &tx.amount),
        );
    }

    pub fn max_amount(&self) -> Result<Money> {
        let transactions = self.repository.get_all()?;

        let max = transactions
            .iter()
            .map(|tx| tx.amount)
            .max()
            .ok_or(QueryServiceError::NotFound("max amount of an empty transaction list"))?;

        return Ok(max);
    }

    /// Number of distinct client names, senders and beneficiaries counted together
    pub fn unique_client_count(&self) -> Result<usize> {
        let transactions = self.repository.get_all()?;

        let mut client_names: HashSet<&str> = HashSet::new();

        for tx in transactions.iter() {
            client_names.insert(&tx.sender_full_name);
            client_names.insert(&tx.beneficiary_full_name);
        }

        return Ok(client_names.len());
    }

    /// Whether the client, as sender or beneficiary, has at least one transaction with an
    /// unsolved compliance issue
    pub fn has_open_issue(&self, client_full_name: &str) -> Result<bool> {
        let transactions = self.repository.get_all()?;

        return Ok(transactions
            .iter()
            .any(|tx| tx.has_open_issue() && tx.involves(client_full_name)));
    }

    pub fn transactions_by_beneficiary(&self) -> Result<Grouped<String, Transaction>> {
        let transactions = self.repository.get_all()?;

        let grouped: Grouped<String, Transaction> = transactions
            .into_iter()
            .map(|tx| (tx.beneficiary_full_name.clone(), tx))
            .collect();

        log::debug!("Grouped transactions into {} beneficiaries", grouped.len());

        return Ok(grouped);
    }

    pub fn unsolved_issue_ids(&self) -> Result<BTreeSet<IssueId>> {
        let transactions = self.repository.get_all()?;

        return Ok(transactions
            .iter()
            .filter(|tx| tx.has_open_issue())
            .filter_map(|tx| tx.issue_id)
            .collect());
    }

    /// One message per solved issue in source order, duplicates included. A solved issue
    /// without a message yields `None`.
    pub fn solved_issue_messages(&self) -> Result<Vec<Option<String>>> {
        let transactions = self.repository.get_all()?;

        let mut messages = vec![];

        for tx in transactions.into_iter().filter(|tx| tx.has_solved_issue()) {
            if tx.issue_message.is_none() {
                log::warn!("Solved issue on transaction {} has no message", tx.id);
            }

            messages.push(tx.issue_message);
        }

        return Ok(messages);
    }

    pub fn top3_by_amount(&self) -> Result<Vec<Transaction>> {
        return self.top_by_amount(3);
    }

    /// The `count` largest transactions, descending by amount. Equal amounts keep source order.
    pub fn top_by_amount(&self, count: usize) -> Result<Vec<Transaction>> {
        let mut transactions = self.repository.get_all()?;

        // stable sort, ascending on the negated amount
        transactions.sort_by_key(|tx| tx.amount.negate());
        transactions.truncate(count);

        return Ok(transactions);
    }

    /// Sender with the highest total sent amount.
    ///
    /// When several senders share the highest total, the one appearing first in the
    /// transaction list wins.
    pub fn top_sender(&self) -> Result<String> {
        let transactions = self.repository.get_all()?;

        let by_sender: Grouped<&str, &Transaction> = transactions
            .iter()
            .map(|tx| (tx.sender_full_name.as_str(), tx))
            .collect();

        let mut top: Option<(&str, Money)> = None;

        for (sender, sent) in by_sender.iter() {
            let total = Money::sum(sent.iter().map(|tx| &tx.amount))?;

            log::debug!("Sender {sender:?} sent a total of {total}");

            let is_new_top = match top {
                Some((_, top_total)) => total > top_total,
                None => true,
            };

            if is_new_top {
                top = Some((*sender, total));
            }
        }

        let (sender, _) =
            top.ok_or(QueryServiceError::NotFound("top sender of an empty transaction list"))?;

        return Ok(sender.to_string());
    }
}
