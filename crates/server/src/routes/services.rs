use axum::{extract::State, routing::post, Json, Router};
use service::{
    services::{self as svc, CreateServiceInput, UpdateServiceInput},
    DeleteOutcome, IdParam, ListFilter,
};
use tracing::info;

use crate::{errors::JsonApiError, rpc::RpcInput, state::AppState};

type Record = models::service::Model;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/createService", post(create_service))
        .route("/rpc/getServices", post(get_services))
        .route("/rpc/getService", post(get_service))
        .route("/rpc/updateService", post(update_service))
        .route("/rpc/deleteService", post(delete_service))
}

#[utoipa::path(
    post, path = "/rpc/createService", tag = "services",
    request_body = crate::openapi::CreateServiceDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"))
)]
pub async fn create_service(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateServiceInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(svc::create_service(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getServices", tag = "services",
    request_body(content = crate::openapi::ListFilterDoc, description = "Optional window; the body may be empty"),
    responses((status = 200, description = "Services in creation order"))
)]
pub async fn get_services(
    State(state): State<AppState>,
    RpcInput(filter): RpcInput<Option<ListFilter>>,
) -> Result<Json<Vec<Record>>, JsonApiError> {
    let list = svc::list_services(&state.db, filter).await?;
    info!(count = list.len(), "list services");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/rpc/getService", tag = "services",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "The service, or null"))
)]
pub async fn get_service(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<Option<Record>>, JsonApiError> {
    Ok(Json(svc::get_service(&state.db, param.id).await?))
}

#[utoipa::path(
    post, path = "/rpc/updateService", tag = "services",
    request_body = crate::openapi::UpdateServiceDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<UpdateServiceInput>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(svc::update_service(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/deleteService", tag = "services",
    request_body = crate::openapi::IdDoc,
    responses((status = 200, description = "`success` is false when nothing matched"))
)]
pub async fn delete_service(
    State(state): State<AppState>,
    RpcInput(param): RpcInput<IdParam>,
) -> Result<Json<DeleteOutcome>, JsonApiError> {
    Ok(Json(svc::delete_service(&state.db, param.id).await?))
}
