use crate::grouped::Grouped;
use crate::ids::IssueId;
use crate::repositories::TransactionRepository;
use crate::services::{QueryServiceError, TransactionQueryService};
use crate::Money;
use crate::Result;
use crate::Transaction;

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SenderTotal {
    pub sender: String,
    pub total: Money,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientIssues {
    pub client: String,
    pub has_open_issue: bool,
}

/// Answers to every query, gathered for presentation.
///
/// `max_amount` and `top_sender` are `None` when there are no transactions.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport {
    pub total_amount: Money,
    pub sent_by: Option<SenderTotal>,
    pub max_amount: Option<Money>,
    pub unique_client_count: usize,
    pub client_issues: Option<ClientIssues>,
    pub transactions_by_beneficiary: Grouped<String, Transaction>,
    pub unsolved_issue_ids: BTreeSet<IssueId>,
    pub solved_issue_messages: Vec<Option<String>>,
    pub top3_by_amount: Vec<Transaction>,
    pub top_sender: Option<String>,
}

impl QueryReport {
    pub fn build<R: TransactionRepository>(
        service: &TransactionQueryService<R>,
        sender: Option<&str>,
        client: Option<&str>,
    ) -> Result<Self> {
        let sent_by = match sender {
            Some(sender) => Some(SenderTotal {
                sender: sender.to_string(),
                total: service.total_amount_sent_by(sender)?,
            }),
            None => None,
        };

        let client_issues = match client {
            Some(client) => Some(ClientIssues {
                client: client.to_string(),
                has_open_issue: service.has_open_issue(client)?,
            }),
            None => None,
        };

        let report = Self {
            total_amount: service.total_amount()?,
            sent_by,
            max_amount: not_found_as_none(service.max_amount())?,
            unique_client_count: service.unique_client_count()?,
            client_issues,
            transactions_by_beneficiary: service.transactions_by_beneficiary()?,
            unsolved_issue_ids: service.unsolved_issue_ids()?,
            solved_issue_messages: service.solved_issue_messages()?,
            top3_by_amount: service.top3_by_amount()?,
            top_sender: not_found_as_none(service.top_sender())?,
        };

        log::debug!("Built report: {report:?}");

        return Ok(report);
    }
}

/// Turns a `NotFound` failure into `None`, keeping every other error
fn not_found_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            if let Some(QueryServiceError::NotFound(what)) = e.downcast_ref::<QueryServiceError>() {
                log::debug!("Nothing found for {what}");
                return Ok(None);
            }

            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::TransactionId;
    use crate::repositories::InMemoryTransactionRepository;

    use super::*;

    fn build_transaction(id: i32, amount: &str, sender: &str, beneficiary: &str) -> Transaction {
        Transaction {
            id: TransactionId(id),
            amount: Money::parse(amount).unwrap(),
            sender_full_name: sender.to_string(),
            sender_age: 40,
            beneficiary_full_name: beneficiary.to_string(),
            beneficiary_age: 41,
            issue_id: None,
            issue_solved: false,
            issue_message: None,
        }
    }

    #[test]
    fn build() {
        let mut repository = InMemoryTransactionRepository::new();
        repository.append(build_transaction(1, "10", "Ada Shelby", "John Shelby"));
        repository.append(build_transaction(2, "25.5", "John Shelby", "Ada Shelby"));

        let service = TransactionQueryService::new(&repository);
        let report = QueryReport::build(&service, Some("Ada Shelby"), Some("John Shelby")).unwrap();

        assert_eq!(report.total_amount, Money::parse("35.5").unwrap());
        assert_eq!(
            report.sent_by,
            Some(SenderTotal {
                sender: "Ada Shelby".to_string(),
                total: Money::parse("10").unwrap(),
            })
        );
        assert_eq!(report.max_amount, Some(Money::parse("25.5").unwrap()));
        assert_eq!(report.unique_client_count, 2);
        assert_eq!(
            report.client_issues,
            Some(ClientIssues {
                client: "John Shelby".to_string(),
                has_open_issue: false,
            })
        );
        assert_eq!(report.transactions_by_beneficiary.len(), 2);
        assert!(report.unsolved_issue_ids.is_empty());
        assert!(report.solved_issue_messages.is_empty());
        assert_eq!(
            report.top3_by_amount.iter().map(|tx| tx.id).collect::<Vec<_>>(),
            vec![TransactionId(2), TransactionId(1)]
        );
        assert_eq!(report.top_sender.as_deref(), Some("John Shelby"));
    }

    #[test]
    fn build_empty() {
        let repository = InMemoryTransactionRepository::new();
        let service = TransactionQueryService::new(&repository);

        let report = QueryReport::build(&service, None, None).unwrap();

        assert_eq!(report.total_amount, Money::ZERO);
        assert_eq!(report.sent_by, None);
        assert_eq!(report.max_amount, None);
        assert_eq!(report.client_issues, None);
        assert_eq!(report.top_sender, None);
        assert!(report.top3_by_amount.is_empty());
    }
}
