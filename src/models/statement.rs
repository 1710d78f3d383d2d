use serde::{Deserialize, Serialize};
use crate::enums::transaction_type::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub issuer: String,
    pub card_last_four: String,
    pub statement_period: String,
    pub payment_due_date: String,
    pub total_amount_due: f64,
    pub minimum_amount_due: f64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned by the parsing service's `/parse` endpoint.
///
/// `Failed` is listed first so that any body carrying an `error` field is
/// treated as an error, even if summary fields are present as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Failed(ErrorResponse),
    Parsed(StatementSummary),
}
