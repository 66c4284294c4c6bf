use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use models::{clock, contact_details, validation::validate_email};
use crate::errors::{update_error, ServiceError};

/// Patch for the contact block. Only `email` is checked; the rest is free text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateContactDetailsInput {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub working_hours_en: Option<String>,
    #[serde(default)]
    pub working_hours_fr: Option<String>,
}

impl UpdateContactDetailsInput {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(email) = self.email.as_deref() {
            validate_email("email", email)?;
        }
        Ok(())
    }

    fn apply(self, am: &mut contact_details::ActiveModel) {
        if let Some(v) = self.email { am.email = Set(v); }
        if let Some(v) = self.phone { am.phone = Set(v); }
        if let Some(v) = self.address { am.address = Set(v); }
        if let Some(v) = self.working_hours_en { am.working_hours_en = Set(v); }
        if let Some(v) = self.working_hours_fr { am.working_hours_fr = Set(v); }
    }
}

/// The first contact details row by id, if any.
pub async fn get_contact_details(db: &DatabaseConnection) -> Result<Option<contact_details::Model>, ServiceError> {
    Ok(contact_details::Entity::find()
        .order_by_asc(contact_details::Column::Id)
        .one(db)
        .await?)
}

/// Patch the first row. Fails with `NotFound` when no row has been seeded.
#[instrument(skip(db, input))]
pub async fn update_contact_details(
    db: &DatabaseConnection,
    input: UpdateContactDetailsInput,
) -> Result<contact_details::Model, ServiceError> {
    input.validate()?;
    let Some(existing) = get_contact_details(db).await? else {
        warn!(event = "contact_details_missing");
        return Err(ServiceError::NotFound("no contact details found to update".into()));
    };
    let id = existing.id;
    let previous = existing.updated_at;
    let mut am: contact_details::ActiveModel = existing.into();
    input.apply(&mut am);
    am.updated_at = Set(clock::touch(previous));
    let updated = am.update(db).await.map_err(|e| update_error(e, "contact details", id))?;
    info!(event = "contact_details_updated", id);
    Ok(updated)
}
