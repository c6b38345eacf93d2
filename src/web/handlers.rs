//! Request handlers for the page and the JSON API.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::collector::ImageCollector;
use crate::error::RunshotError;
use crate::generation;
use crate::models::GeminiModel;
use crate::preview::PreviewLayout;
use crate::types::UploadedImage;

use super::page::{self, PageView};
use super::AppState;

/// What the user asked the page to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormAction {
    #[default]
    Preview,
    Convert,
}

/// A parsed multipart submission.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub model: GeminiModel,
    pub action: FormAction,
    pub images: Vec<UploadedImage>,
}

impl UploadForm {
    /// Read every field of the submission.
    ///
    /// Freshly uploaded files replace any previously previewed images that were re-posted.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, RunshotError> {
        let mut form = UploadForm::default();
        let mut uploads = ImageCollector::new();
        let mut reposted = ImageCollector::new();
        let mut pending_name: Option<String> = None;

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "model" => form.model = GeminiModel::parse(&field.text().await?)?,
                "action" => {
                    form.action = match field.text().await?.as_str() {
                        "convert" => FormAction::Convert,
                        _ => FormAction::Preview,
                    }
                }
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await?;
                    // An empty file input still submits one nameless, empty part.
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    uploads.push(file_name, data.to_vec())?;
                }
                "image_name" => pending_name = Some(field.text().await?),
                "image_data" => {
                    let name = pending_name
                        .take()
                        .unwrap_or_else(|| format!("image-{}", reposted.len() + 1));
                    reposted.push_data_uri(name, &field.text().await?)?;
                }
                _ => {}
            }
        }

        form.images = if uploads.is_empty() {
            reposted.finish()
        } else {
            uploads.finish()
        };
        Ok(form)
    }
}

pub async fn index() -> Html<String> {
    Html(page::render(&PageView::default()))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, RunshotError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let preview = PreviewLayout::from_images(&form.images);

    // No images, no trigger: a convert request without previews only re-renders the page.
    let result = match (form.action, &preview) {
        (FormAction::Convert, Some(_)) => {
            info!(model = form.model.as_str(), images = form.images.len(), "converting session");
            let result = generation::convert(form.model, &state.config, &form.images).await?;
            Some(result.text)
        }
        _ => None,
    };

    Ok(Html(page::render(&PageView {
        model: form.model,
        preview,
        result,
    })))
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub model: GeminiModel,
    pub text: String,
}

pub async fn api_convert(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ConvertResponse>, RunshotError> {
    let form = UploadForm::from_multipart(multipart).await?;
    if form.images.is_empty() {
        return Err(RunshotError::InvalidArgument(
            "at least one image is required".into(),
        ));
    }
    info!(model = form.model.as_str(), images = form.images.len(), "converting session");
    let result = generation::convert(form.model, &state.config, &form.images).await?;
    Ok(Json(ConvertResponse {
        model: result.model,
        text: result.text,
    }))
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: GeminiModel,
    pub info: &'static str,
    pub default: bool,
}

pub async fn list_models() -> Json<Vec<ModelInfo>> {
    Json(
        GeminiModel::all()
            .into_iter()
            .map(|m| ModelInfo {
                id: m,
                info: m.info(),
                default: m == GeminiModel::default(),
            })
            .collect(),
    )
}
