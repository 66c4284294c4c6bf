use axum::{extract::State, routing::post, Json, Router};
use service::{
    project_images::{self, CreateProjectImageInput},
    projects::{self, CreateProjectInput, ProjectFilter, UpdateProjectInput},
    DeleteOutcome, IdParam,
};
use tracing::info;

use crate::{errors::JsonApiError, rpc::RpcInput, state::AppState};

type Record = models::project::Model;
type Image = models::project_image::Model;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/createProject", post(create_project))
        .route("/rpc/getProjects", post(get_projects))
        .route("/rpc/getProject", post(get_project))
        .route("/rpc/updateProject", post(update_project))
        .route("/rpc/deleteProject", post(delete_project))
        .route("/rpc/createProjectImage", post(create_project_image))
        .route("/rpc/getProjectImages", post(get_project_images))
        .route("/rpc/deleteProjectImage", post(delete_project_image))
}

#[utoipa::path(
    post, path = "/rpc/createProject", tag = "projects",
    request_body = crate::openapi::CreateProjectDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create_project(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateProjectInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(projects::create_project(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getProjects", tag = "projects",
    request_body(content = crate::openapi::ProjectFilterDoc, description = "Optional category and window; the body may be empty"),
    responses((status = 200, description = "Projects in creation order"))
)]
pub async fn get_projects(
    State(state): State<AppState>,
    RpcInput(filter): RpcInput<Option<ProjectFilter>>,
) -> Result<Json<Vec<Record>>, JsonApiError> {
    let list = projects::list_projects(&state.db, filter).await?;
    info!(count = list.len(), "list projects");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/rpc/getProject", tag = "projects",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "The project, or null"))
)]
pub async fn get_project(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<Option<Record>>, JsonApiError> {
    Ok(Json(projects::get_project(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/updateProject", tag = "projects",
    request_body = crate::openapi::UpdateProjectDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<UpdateProjectInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(projects::update_project(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/deleteProject", tag = "projects",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "Project and its images removed"))
)]
pub async fn delete_project(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<DeleteOutcome>, JsonApiError> {
    Ok(Json(projects::delete_project(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/createProjectImage", tag = "projects",
    request_body = crate::openapi::CreateProjectImageDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Project does not exist")
    )
)]
pub async fn create_project_image(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateProjectImageInput>,
) -> Result<Json<Image>, JsonApiError> {
    Ok(Json(project_images::create_project_image(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getProjectImages", tag = "projects",
    request_body(content = crate::openapi::IdDoc, description = "Project id"),
    responses((status = 200, description = "Images by display order"))
)]
pub async fn get_project_images(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<Vec<Image>>, JsonApiError> {
    Ok(Json(project_images::list_project_images(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/deleteProjectImage", tag = "projects",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "`success` is false when nothing matched"))
)]
pub async fn delete_project_image(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<DeleteOutcome>, JsonApiError> {
    Ok(Json(project_images::delete_project_image(&state.db, param.id).await?))
}
