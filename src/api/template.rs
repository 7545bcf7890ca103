//! Template CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::server::AppState;
use crate::template::Template;

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub codigo: Option<String>,
    pub plantilla: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTemplateRequest {
    pub plantilla: Option<String>,
    pub descripcion: Option<String>,
}

/// GET /templates - List all templates, newest first
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Json<ApiResponse<Vec<Template>>> {
    Json(ApiResponse::data(state.template_store.list_all()))
}

/// GET /templates/{codigo} - Get a template by its code
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<ApiResponse<Template>>> {
    let template = state.template_store.get_by_code(&codigo)?;
    Ok(Json(ApiResponse::data(template)))
}

/// POST /templates - Create a new template
#[tracing::instrument(name = "http.create_template", skip(state, request), fields(codigo = ?request.codigo))]
pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Template>>)> {
    let (codigo, plantilla) = match (request.codigo, request.plantilla) {
        (Some(codigo), Some(plantilla)) if !codigo.is_empty() && !plantilla.is_empty() => {
            (codigo, plantilla)
        }
        _ => {
            return Err(AppError::Validation(
                "codigo and plantilla are required".to_string(),
            ))
        }
    };

    let template = state
        .template_store
        .create(&codigo, &plantilla, request.descripcion)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(template, "template created")),
    ))
}

/// PUT /templates/{id} - Update an existing template
#[tracing::instrument(name = "http.update_template", skip(state, request))]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<ApiResponse<Template>>> {
    let id = parse_template_id(&id)?;
    let template = state
        .template_store
        .update(id, request.plantilla, request.descripcion)?;

    Ok(Json(ApiResponse::with_message(template, "template updated")))
}

/// DELETE /templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_template_id(&id)?;
    state.template_store.delete(id)?;

    Ok(Json(ApiResponse::message("template deleted")))
}

fn parse_template_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("invalid template id: {}", raw)))
}
