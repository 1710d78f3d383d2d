use std::sync::Arc;
use crate::config::AppConfig;
use crate::repositories::parser_repository::ParserRepository;
use crate::services::render_service::RenderService;
use crate::services::upload_service::UploadService;

pub type StatementUploadService = UploadService<ParserRepository, RenderService>;

#[derive(Clone)]
pub struct ServiceRegister {
    pub upload_service: StatementUploadService,
}

impl ServiceRegister {
    pub fn new(app_config: Arc<AppConfig>) -> Self {
        let parser_repo = ParserRepository::new(app_config.parser_url.clone());
        Self {
            upload_service: UploadService::new(parser_repo, RenderService::new()),
        }
    }
}
