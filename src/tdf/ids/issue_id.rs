use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a compliance issue attached to a transaction
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueId(pub i32);

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
