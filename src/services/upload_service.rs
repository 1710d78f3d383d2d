use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use crate::error::UploadError;
use crate::models::page::{Regions, ViewState};
use crate::models::statement::ParseResponse;
use crate::models::upload::UploadForm;
use crate::repositories::parser_repository::StatementParser;
use crate::services::render_service::ResultsRenderer;

/// Marks a parse request as outstanding until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Forwards uploads to the parsing service and renders the outcome into the
/// page regions. Only one parse request is outstanding at a time.
#[derive(Clone)]
pub struct UploadService<P, R> {
    parser: P,
    renderer: R,
    in_flight: Arc<AtomicBool>,
}

impl<P, R> UploadService<P, R>
where
    P: StatementParser,
    R: ResultsRenderer,
{
    pub fn new(parser: P, renderer: R) -> Self {
        Self {
            parser,
            renderer,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether a parse request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn handle_submission(&self, regions: &mut Regions, form: UploadForm) -> ViewState {
        regions.show_loading();

        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            warn!("Rejected upload while another statement is being parsed");
            regions.show_error(UploadError::Busy.to_string());
            return regions.state();
        };

        match self.submit(form).await {
            Ok(markup) => {
                info!("Statement rendered");
                regions.show_results(markup);
            }
            Err(e) => {
                warn!("Upload failed: {:?}", e);
                regions.show_error(e.to_string());
            }
        }
        regions.state()
    }

    async fn submit(&self, form: UploadForm) -> Result<String, UploadError> {
        let reply = self.parser.parse(form).await?;
        info!("Parsing service replied with status {}", reply.status);
        match serde_json::from_str::<ParseResponse>(&reply.body) {
            Ok(ParseResponse::Failed(body)) => Err(UploadError::Service(body.error)),
            Ok(ParseResponse::Parsed(summary)) => {
                Ok(self.renderer.render_results(&summary)?)
            }
            Err(e) => Err(UploadError::MalformedResponse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;
    use crate::error::RenderError;
    use crate::models::statement::StatementSummary;
    use crate::repositories::parser_repository::ParserReply;
    use crate::services::render_service::RenderService;

    const COFFEE_JSON: &str = r#"{"issuer":"Bank X","card_last_four":"1234","statement_period":"Jan 2024","payment_due_date":"2024-02-05","total_amount_due":12345.6,"minimum_amount_due":500,"transactions":[{"date":"2024-01-05","description":"Coffee Shop","amount":250.5,"transaction_type":"debit"}]}"#;

    #[derive(Clone)]
    struct StubParser {
        reply: Result<ParserReply, UploadError>,
        calls: Arc<AtomicUsize>,
    }

    impl StubParser {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(ParserReply { status, body: body.to_string() }),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(description: &str) -> Self {
            Self {
                reply: Err(UploadError::Network(description.to_string())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl StatementParser for StubParser {
        async fn parse(&self, _form: UploadForm) -> Result<ParserReply, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    /// Holds every request open until released.
    #[derive(Clone)]
    struct GatedParser {
        started: Arc<Notify>,
        release: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    impl StatementParser for GatedParser {
        async fn parse(&self, _form: UploadForm) -> Result<ParserReply, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok(ParserReply { status: 200, body: COFFEE_JSON.to_string() })
        }
    }

    struct FailingRenderer;

    impl ResultsRenderer for FailingRenderer {
        fn render_results(&self, _summary: &StatementSummary) -> Result<String, RenderError> {
            Err(RenderError(askama::Error::Fmt(std::fmt::Error)))
        }
    }

    fn form() -> UploadForm {
        UploadForm::new().with_file("pdf_file", "statement.pdf", None, b"%PDF".to_vec())
    }

    #[tokio::test]
    async fn successful_reply_shows_results() {
        let parser = StubParser::replying(200, COFFEE_JSON);
        let service = UploadService::new(parser.clone(), RenderService::new());
        let mut regions = Regions::idle();

        let state = service.handle_submission(&mut regions, form()).await;

        assert_eq!(state, ViewState::Results);
        assert!(regions.results.visible);
        assert!(!regions.loading.visible);
        assert!(!regions.error.visible);
        assert!(regions.results.content.contains("<td>Coffee Shop</td>"));
        assert!(regions.results.content.contains("₹250.50"));
        assert!(regions.results.content.contains("<td>DEBIT</td>"));
        assert!(regions.results.content.contains("**** 1234"));
        assert!(regions.results.content.contains("₹12,345.60"));
        assert_eq!(parser.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn service_error_is_shown_verbatim() {
        let parser = StubParser::replying(400, r#"{"error":"Unsupported file format"}"#);
        let service = UploadService::new(parser, RenderService::new());
        let mut regions = Regions::idle();

        let state = service.handle_submission(&mut regions, form()).await;

        assert_eq!(state, ViewState::Error);
        assert_eq!(regions.error.content, "Unsupported file format");
        assert!(!regions.results.visible);
        assert!(regions.results.content.is_empty());
    }

    #[tokio::test]
    async fn network_failure_shows_description() {
        let service = UploadService::new(StubParser::failing("Failed to fetch"), RenderService::new());
        let mut regions = Regions::idle();

        let state = service.handle_submission(&mut regions, form()).await;

        assert_eq!(state, ViewState::Error);
        assert_eq!(regions.error.content, "Error: Failed to fetch");
        assert!(!regions.results.visible);
        assert!(!regions.loading.visible);
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let parser = StubParser::replying(502, "<html>Bad Gateway</html>");
        let service = UploadService::new(parser, RenderService::new());
        let mut regions = Regions::idle();

        let state = service.handle_submission(&mut regions, form()).await;

        assert_eq!(state, ViewState::Error);
        assert!(regions
            .error
            .content
            .starts_with("Error: Unexpected response from parsing service: "));
    }

    #[tokio::test]
    async fn render_failure_is_an_error() {
        let service = UploadService::new(StubParser::replying(200, COFFEE_JSON), FailingRenderer);
        let mut regions = Regions::idle();

        let state = service.handle_submission(&mut regions, form()).await;

        assert_eq!(state, ViewState::Error);
        assert!(regions.error.content.starts_with("Error: "));
    }

    #[tokio::test]
    async fn new_submission_replaces_previous_outcome() {
        let service = UploadService::new(StubParser::replying(200, COFFEE_JSON), RenderService::new());
        let mut regions = Regions::idle();
        regions.show_error("Unsupported file format".to_string());

        service.handle_submission(&mut regions, form()).await;

        assert_eq!(regions.state(), ViewState::Results);
        assert!(!regions.error.visible);
    }

    #[tokio::test]
    async fn rejects_second_submission_while_first_is_pending() {
        let parser = GatedParser {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let service = UploadService::new(parser.clone(), RenderService::new());

        let first = {
            let service = service.clone();
            tokio::spawn(async move {
                let mut regions = Regions::idle();
                service.handle_submission(&mut regions, form()).await
            })
        };
        parser.started.notified().await;

        let mut regions = Regions::idle();
        let state = service.handle_submission(&mut regions, form()).await;
        assert_eq!(state, ViewState::Error);
        assert_eq!(regions.error.content, UploadError::Busy.to_string());
        assert_eq!(parser.calls.load(Ordering::SeqCst), 1);

        parser.release.notify_one();
        assert_eq!(first.await.unwrap(), ViewState::Results);

        // The flag is released once the first request completes.
        let mut regions = Regions::idle();
        parser.release.notify_one();
        let state = service.handle_submission(&mut regions, form()).await;
        assert_eq!(state, ViewState::Results);
        assert_eq!(parser.calls.load(Ordering::SeqCst), 2);
    }
}
