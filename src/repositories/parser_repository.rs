use std::future::Future;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};
use crate::error::UploadError;
use crate::models::upload::{FormField, UploadForm};

const PARSE_PATH: &str = "/parse";

/// Raw reply from the parsing service; the body is decoded by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserReply {
    pub status: u16,
    pub body: String,
}

/// Sends an upload form to a statement parsing service.
pub trait StatementParser: Send + Sync {
    fn parse(
        &self,
        form: UploadForm,
    ) -> impl Future<Output = Result<ParserReply, UploadError>> + Send;
}

#[derive(Clone)]
pub struct ParserRepository {
    client: reqwest::Client,
    parser_url: String,
}

impl ParserRepository {
    pub fn new(parser_url: String) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            parser_url: parser_url.trim_end_matches('/').to_string(),
        }
    }

    fn multipart_form(form: UploadForm) -> Result<Form, UploadError> {
        let mut multipart = Form::new();
        for field in form.fields {
            multipart = match field {
                FormField::Text { name, value } => multipart.text(name, value),
                FormField::File { name, file_name, content_type, data } => {
                    let mut part = Part::bytes(data).file_name(file_name);
                    if let Some(mime) = content_type {
                        part = part
                            .mime_str(&mime)
                            .map_err(|e| UploadError::Network(e.to_string()))?;
                    }
                    multipart.part(name, part)
                }
            };
        }
        Ok(multipart)
    }
}

impl StatementParser for ParserRepository {
    async fn parse(&self, form: UploadForm) -> Result<ParserReply, UploadError> {
        let url = format!("{}{}", self.parser_url, PARSE_PATH);
        debug!("Posting {} form bytes to {}", form.file_bytes(), url);
        let multipart = Self::multipart_form(form)?;
        let res = match self.client.post(&url).multipart(multipart).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("{}", e);
                return Err(UploadError::Network(e.to_string()));
            }
        };
        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| {
            warn!("Failed to read parser reply: {}", e);
            UploadError::Network(e.to_string())
        })?;
        Ok(ParserReply { status, body })
    }
}
