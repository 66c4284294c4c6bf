use axum::{extract::State, routing::post, Json, Router};
use common::types::Health;
use service::{
    contact_details::{self, UpdateContactDetailsInput},
    contact_form::{self, CreateContactFormSubmissionInput},
    home_page::{self, UpdateHomePageContentInput},
};
use tracing::info;

use crate::{errors::JsonApiError, rpc::RpcInput, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rpc/healthcheck", post(healthcheck))
        .route("/rpc/createContactFormSubmission", post(create_contact_form_submission))
        .route("/rpc/getContactFormSubmissions", post(get_contact_form_submissions))
        .route("/rpc/getContactDetails", post(get_contact_details))
        .route("/rpc/updateContactDetails", post(update_contact_details))
        .route("/rpc/getHomePageContent", post(get_home_page_content))
        .route("/rpc/updateHomePageContent", post(update_home_page_content))
}

#[utoipa::path(
    post, path = "/rpc/healthcheck", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn healthcheck() -> Json<Health> {
    Json(Health::ok())
}

#[utoipa::path(
    post, path = "/rpc/createContactFormSubmission", tag = "contact",
    request_body = crate::openapi::ContactFormSubmissionDoc,
    responses((status = 200, description = "Stored"), (status = 400, description = "Validation Error"))
)]
pub async fn create_contact_form_submission(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateContactFormSubmissionInput>,
) -> Result<Json<models::contact_form_submission::Model>, JsonApiError> {
    Ok(Json(contact_form::create_contact_form_submission(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getContactFormSubmissions", tag = "contact",
    responses((status = 200, description = "Submissions, newest first"))
)]
pub async fn get_contact_form_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::contact_form_submission::Model>>, JsonApiError> {
    let list = contact_form::list_contact_form_submissions(&state.db).await?;
    info!(count = list.len(), "list contact form submissions");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/rpc/getContactDetails", tag = "contact",
    responses((status = 200, description = "Contact details, or null"))
)]
pub async fn get_contact_details(
    State(state): State<AppState>,
) -> Result<Json<Option<models::contact_details::Model>>, JsonApiError> {
    Ok(Json(contact_details::get_contact_details(&state.db).await?))
}

#[utoipa::path(
    post, path = "/rpc/updateContactDetails", tag = "contact",
    request_body = crate::openapi::UpdateContactDetailsDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "No contact details to update")
    )
)]
pub async fn update_contact_details(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<Option<UpdateContactDetailsInput>>,
) -> Result<Json<models::contact_details::Model>, JsonApiError> {
    let input = input.unwrap_or_default();
    Ok(Json(contact_details::update_contact_details(&state.db, input).await?))
}

#[utoipa::path(
    post, path = "/rpc/getHomePageContent", tag = "home",
    responses((status = 200, description = "Home page content, or null"))
)]
pub async fn get_home_page_content(
    State(state): State<AppState>,
) -> Result<Json<Option<models::home_page_content::Model>>, JsonApiError> {
    Ok(Json(home_page::get_home_page_content(&state.db).await?))
}

#[utoipa::path(
    post, path = "/rpc/updateHomePageContent", tag = "home",
    request_body = crate::openapi::UpdateHomePageContentDoc,
    responses((status = 200, description = "Updated, or created with default copy"), (status = 400, description = "Validation Error"))
)]
pub async fn update_home_page_content(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<Option<UpdateHomePageContentInput>>,
) -> Result<Json<models::home_page_content::Model>, JsonApiError> {
    let input = input.unwrap_or_default();
    Ok(Json(home_page::update_home_page_content(&state.db, input).await?))
}
