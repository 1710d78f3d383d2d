use askama::Template;
use crate::error::RenderError;
use crate::models::page::{Region, Regions};
use crate::models::statement::StatementSummary;
use crate::services::currency::{format_inr, mask_card};

struct TransactionRow<'a> {
    date: &'a str,
    description: &'a str,
    amount: String,
    amount_class: &'static str,
    type_label: &'static str,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate<'a> {
    issuer: &'a str,
    card_number: String,
    statement_period: &'a str,
    payment_due_date: &'a str,
    total_amount_due: String,
    minimum_amount_due: String,
    rows: Vec<TransactionRow<'a>>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct PageTemplate<'a> {
    loading: &'a Region,
    results: &'a Region,
    error: &'a Region,
}

/// Turns a parsed statement into the markup of the results region.
pub trait ResultsRenderer: Send + Sync {
    fn render_results(&self, summary: &StatementSummary) -> Result<String, RenderError>;
}

#[derive(Clone, Default)]
pub struct RenderService;

impl RenderService {
    pub fn new() -> Self {
        Self
    }

    /// Full upload page with each region shown or hidden as `regions` says.
    pub fn render_page(&self, regions: &Regions) -> Result<String, RenderError> {
        let page = PageTemplate {
            loading: &regions.loading,
            results: &regions.results,
            error: &regions.error,
        };
        Ok(page.render()?)
    }
}

impl ResultsRenderer for RenderService {
    fn render_results(&self, summary: &StatementSummary) -> Result<String, RenderError> {
        let rows = summary
            .transactions
            .iter()
            .map(|txn| TransactionRow {
                date: &txn.date,
                description: &txn.description,
                amount: format_inr(txn.amount),
                amount_class: txn.transaction_type.css_class(),
                type_label: txn.transaction_type.label(),
            })
            .collect();
        let results = ResultsTemplate {
            issuer: &summary.issuer,
            card_number: mask_card(&summary.card_last_four),
            statement_period: &summary.statement_period,
            payment_due_date: &summary.payment_due_date,
            total_amount_due: format_inr(summary.total_amount_due),
            minimum_amount_due: format_inr(summary.minimum_amount_due),
            rows,
        };
        Ok(results.render()?)
    }
}
