use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::curation::CurationDraft;
use crate::error::ApiError;
use crate::gate::Gate;
use crate::models::{Message, MessageFilter};
use crate::repo::TributeRepo;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(web::resource("/chapters").route(web::get().to(list_chapters)))
            .service(web::resource("/chapters/{id}").route(web::get().to(get_chapter)))
            .service(web::resource("/messages").route(web::get().to(list_messages)))
            .service(web::resource("/messages/{id}").route(web::get().to(get_message)))
            .service(web::resource("/relations").route(web::get().to(list_relations)))
            .service(web::resource("/videos").route(web::get().to(list_videos)))
            .service(web::resource("/videos/{id}").route(web::get().to(get_video)))
            .service(web::resource("/audio").route(web::get().to(list_audio)))
            .service(web::resource("/audio/{id}").route(web::get().to(get_audio)))
            .service(web::resource("/gate").route(web::post().to(check_gate)))
            .service(web::resource("/admin/messages").route(web::get().to(admin_list_messages)))
            .service(
                web::resource("/admin/messages/{id}").route(web::patch().to(admin_set_curated)),
            )
            .service(
                web::resource("/admin/messages/{id}/curation")
                    .route(web::delete().to(admin_reset_curated)),
            ),
    );
}

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TributeRepo>,
    pub curation: CurationDraft,
    pub gate: Gate,
}

#[utoipa::path(
    get,
    path = "/api/v1/chapters",
    responses((status = 200, description = "All chapters in journey order", body = [crate::models::Chapter]))
)]
pub async fn list_chapters(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.repo.list_chapters().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/chapters/{id}",
    params(("id" = String, Path, description = "Chapter id")),
    responses(
        (status = 200, description = "Chapter", body = crate::models::Chapter),
        (status = 404, description = "No such chapter")
    )
)]
pub async fn get_chapter(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let chapter = data
        .repo
        .get_chapter(&path.into_inner())
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(chapter))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages",
    params(
        ("chapterId" = Option<String>, Query, description = "Exact chapter id match"),
        ("relation" = Option<String>, Query, description = "Exact relation match"),
        ("curated" = Option<bool>, Query, description = "Exact curated flag match")
    ),
    responses((status = 200, description = "Matching messages, newest first", body = [Message]))
)]
pub async fn list_messages(
    data: web::Data<AppState>,
    filter: web::Query<MessageFilter>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.repo.list_messages(&filter).await))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/{id}",
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message", body = Message),
        (status = 404, description = "No such message")
    )
)]
pub async fn get_message(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let message = data
        .repo
        .get_message(&path.into_inner())
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(message))
}

#[utoipa::path(
    get,
    path = "/api/v1/relations",
    responses((status = 200, description = "Distinct relation strings, sorted", body = [String]))
)]
pub async fn list_relations(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.repo.list_relations().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/videos",
    responses((status = 200, description = "All videos in fixture order", body = [crate::models::Video]))
)]
pub async fn list_videos(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.repo.list_videos().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/videos/{id}",
    params(("id" = String, Path, description = "Video id")),
    responses(
        (status = 200, description = "Video", body = crate::models::Video),
        (status = 404, description = "No such video")
    )
)]
pub async fn get_video(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let video = data
        .repo
        .get_video(&path.into_inner())
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(video))
}

#[utoipa::path(
    get,
    path = "/api/v1/audio",
    responses((status = 200, description = "All audio clips in fixture order", body = [crate::models::Audio]))
)]
pub async fn list_audio(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.repo.list_audio().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/audio/{id}",
    params(("id" = String, Path, description = "Audio id")),
    responses(
        (status = 200, description = "Audio clip", body = crate::models::Audio),
        (status = 404, description = "No such audio clip")
    )
)]
pub async fn get_audio(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let audio = data
        .repo
        .get_audio(&path.into_inner())
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(audio))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GateRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GateResponse {
    pub granted: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/gate",
    request_body = GateRequest,
    responses(
        (status = 200, description = "Password accepted (or no gate configured)", body = GateResponse),
        (status = 403, description = "Wrong password")
    )
)]
pub async fn check_gate(
    data: web::Data<AppState>,
    payload: web::Json<GateRequest>,
) -> Result<HttpResponse, ApiError> {
    if !data.gate.permits(&payload.password) {
        return Err(ApiError::Forbidden);
    }
    Ok(HttpResponse::Ok().json(GateResponse { granted: true }))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/messages",
    responses((status = 200, description = "All messages with draft curation applied, newest first", body = [Message]))
)]
pub async fn admin_list_messages(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let messages = data.repo.list_messages(&MessageFilter::default()).await;
    Ok(HttpResponse::Ok().json(data.curation.apply(messages)))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CurateRequest {
    pub curated: bool,
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/messages/{id}",
    params(("id" = String, Path, description = "Message id")),
    request_body = CurateRequest,
    responses(
        (status = 200, description = "Message with the draft override applied", body = Message),
        (status = 404, description = "No such message")
    )
)]
pub async fn admin_set_curated(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<CurateRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut message = data.repo.get_message(&id).await.ok_or(ApiError::NotFound)?;
    data.curation.set(&id, payload.curated);
    message.curated = payload.curated;
    Ok(HttpResponse::Ok().json(message))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/messages/{id}/curation",
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message reverted to its fixture curation", body = Message),
        (status = 404, description = "No such message")
    )
)]
pub async fn admin_reset_curated(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let message = data.repo.get_message(&id).await.ok_or(ApiError::NotFound)?;
    data.curation.reset(&id);
    Ok(HttpResponse::Ok().json(message))
}
