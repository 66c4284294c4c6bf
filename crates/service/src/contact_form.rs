use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{clock, contact_form_submission as submission};
use crate::errors::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateContactFormSubmissionInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Append a submission to the inbox.
#[instrument(skip(db, input))]
pub async fn create_contact_form_submission(
    db: &DatabaseConnection,
    input: CreateContactFormSubmissionInput,
) -> Result<submission::Model, ServiceError> {
    submission::validate_fields(&input.name, &input.email, &input.message)?;
    let am = submission::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        email: Set(input.email),
        message: Set(input.message),
        created_at: Set(clock::now()),
    };
    let created = am.insert(db).await?;
    info!(event = "contact_form_submitted", id = created.id);
    Ok(created)
}

/// Whole inbox, newest first.
pub async fn list_contact_form_submissions(db: &DatabaseConnection) -> Result<Vec<submission::Model>, ServiceError> {
    Ok(submission::Entity::find()
        .order_by_desc(submission::Column::CreatedAt)
        .order_by_desc(submission::Column::Id)
        .all(db)
        .await?)
}
