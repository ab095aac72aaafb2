use crate::ids::{IssueId, TransactionId};
use crate::Money;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single money transfer between two clients, optionally flagged with a compliance issue.
///
/// A transaction without an `issue_id` has no compliance issue, whatever `issue_solved` says.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "mtn", alias = "id")]
    pub id: TransactionId,

    pub amount: Money,

    pub sender_full_name: String,
    pub sender_age: i32,

    pub beneficiary_full_name: String,
    pub beneficiary_age: i32,

    #[serde(default)]
    pub issue_id: Option<IssueId>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub issue_solved: bool,

    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    /// Issue present and not yet solved
    pub fn has_open_issue(&self) -> bool {
        return self.issue_id.is_some() && !self.issue_solved;
    }

    /// Issue present and solved
    pub fn has_solved_issue(&self) -> bool {
        return self.issue_id.is_some() && self.issue_solved;
    }

    /// Whether the client took part in this transaction, either as sender or beneficiary
    pub fn involves(&self, full_name: &str) -> bool {
        return self.sender_full_name == full_name || self.beneficiary_full_name == full_name;
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#{} {} {} -> {}",
            self.id, self.amount, self.sender_full_name, self.beneficiary_full_name
        )?;

        if let Some(issue_id) = self.issue_id {
            let state = if self.issue_solved { "solved" } else { "open" };
            write!(f, " [issue {issue_id}: {state}]")?;
        }

        return Ok(());
    }
}

/// Accepts `null` (or an empty csv cell) for `issueSolved`
fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    return Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false));
}
