use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tracing::{info, warn};
use crate::models::page::Regions;
use crate::models::upload::{FormField, UploadForm};
use crate::services::register_service::ServiceRegister;

pub fn router(max_upload_bytes: usize) -> Router<ServiceRegister> {
    Router::new()
        .route("/", get(get_upload_page))
        .route(
            "/upload",
            post(post_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

async fn get_upload_page(State(services): State<ServiceRegister>) -> Result<Html<String>, Response> {
    render(&services, &Regions::idle())
}

async fn post_upload(
    State(services): State<ServiceRegister>,
    multipart: Multipart,
) -> Result<Html<String>, Response> {
    let form = read_form(multipart).await?;
    info!(
        "Received upload with fields {:?}",
        form.fields.iter().map(FormField::name).collect::<Vec<_>>()
    );

    let mut regions = Regions::idle();
    let state = services
        .upload_service
        .handle_submission(&mut regions, form)
        .await;
    info!("Upload finished in state {:?}", state);
    render(&services, &regions)
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, Response> {
    let mut form = UploadForm::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read upload: {}", e);
        e.into_response()
    })? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        form = match file_name {
            Some(file_name) => {
                let data = field.bytes().await.map_err(IntoResponse::into_response)?;
                form.with_file(name, file_name, content_type, data.to_vec())
            }
            None => {
                let value = field.text().await.map_err(IntoResponse::into_response)?;
                form.with_text(name, value)
            }
        };
    }
    Ok(form)
}

fn render(services: &ServiceRegister, regions: &Regions) -> Result<Html<String>, Response> {
    services
        .upload_service
        .renderer()
        .render_page(regions)
        .map(Html)
        .map_err(|e| {
            warn!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        })
}
