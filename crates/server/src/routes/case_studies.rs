use axum::{extract::State, routing::post, Json, Router};
use service::{
    case_studies::{self, CreateCaseStudyInput, UpdateCaseStudyInput},
    case_study_images::{self, CreateCaseStudyImageInput},
    DeleteOutcome, IdParam, ListFilter,
};
use tracing::info;

use crate::{errors::JsonApiError, rpc::RpcInput, state::AppState};

type Record = models::case_study::Model;
type Image = models::case_study_image::Model;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/createCaseStudy", post(create_case_study))
        .route("/rpc/getCaseStudies", post(get_case_studies))
        .route("/rpc/getCaseStudy", post(get_case_study))
        .route("/rpc/updateCaseStudy", post(update_case_study))
        .route("/rpc/deleteCaseStudy", post(delete_case_study))
        .route("/rpc/createCaseStudyImage", post(create_case_study_image))
        .route("/rpc/getCaseStudyImages", post(get_case_study_images))
        .route("/rpc/deleteCaseStudyImage", post(delete_case_study_image))
}

#[utoipa::path(
    post, path = "/rpc/createCaseStudy", tag = "case_studies",
    request_body = crate::openapi::CreateCaseStudyDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create_case_study(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateCaseStudyInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(case_studies::create_case_study(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getCaseStudies", tag = "case_studies",
    request_body(content = crate::openapi::ListFilterDoc, description = "Optional window; the body may be empty"),
    responses((status = 200, description = "Case studies, newest first"))
)]
pub async fn get_case_studies(
    State(state): State<AppState>,
    RpcInput(filter): RpcInput<Option<ListFilter>>,
) -> Result<Json<Vec<Record>>, JsonApiError> {
    let list = case_studies::list_case_studies(&state.db, filter).await?;
    info!(count = list.len(), "list case studies");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/rpc/getCaseStudy", tag = "case_studies",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "The case study, or null"))
)]
pub async fn get_case_study(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<Option<Record>>, JsonApiError> {
    Ok(Json(case_studies::get_case_study(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/updateCaseStudy", tag = "case_studies",
    request_body = crate::openapi::UpdateCaseStudyDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_case_study(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<UpdateCaseStudyInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(case_studies::update_case_study(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/deleteCaseStudy", tag = "case_studies",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "Case study and its images removed"))
)]
pub async fn delete_case_study(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<DeleteOutcome>, JsonApiError> {
    Ok(Json(case_studies::delete_case_study(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/createCaseStudyImage", tag = "case_studies",
    request_body = crate::openapi::CreateCaseStudyImageDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Case study does not exist")
    )
)]
pub async fn create_case_study_image(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateCaseStudyImageInput>,
) -> Result<Json<Image>, JsonApiError> {
    Ok(Json(case_study_images::create_case_study_image(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getCaseStudyImages", tag = "case_studies",
    request_body(content = crate::openapi::IdDoc, description = "Case study id"),
    responses((status = 200, description = "Images by display order"))
)]
pub async fn get_case_study_images(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<Vec<Image>>, JsonApiError> {
    Ok(Json(case_study_images::list_case_study_images(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/deleteCaseStudyImage", tag = "case_studies",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "`success` is false when nothing matched"))
)]
pub async fn delete_case_study_image(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<DeleteOutcome>, JsonApiError> {
    Ok(Json(case_study_images::delete_case_study_image(&state.db, param.id).await?))
}
