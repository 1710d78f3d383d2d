use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
        }
    }

    /// CSS class for the amount cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionType::Credit => "transaction-credit",
            TransactionType::Debit => "transaction-debit",
        }
    }
}
