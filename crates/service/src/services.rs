use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{clock, service, validation::require_text_if_present};
use crate::{errors::{update_error, ServiceError}, pagination::ListFilter, types::DeleteOutcome};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateServiceInput {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
}

/// Patch for a service: only the fields that are `Some` are written.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateServiceInput {
    pub id: i32,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_fr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_fr: Option<String>,
}

impl UpdateServiceInput {
    fn validate(&self) -> Result<(), ServiceError> {
        require_text_if_present("title_en", self.title_en.as_deref())?;
        require_text_if_present("title_fr", self.title_fr.as_deref())?;
        require_text_if_present("description_en", self.description_en.as_deref())?;
        require_text_if_present("description_fr", self.description_fr.as_deref())?;
        Ok(())
    }

    fn apply(self, am: &mut service::ActiveModel) {
        if let Some(v) = self.title_en { am.title_en = Set(v); }
        if let Some(v) = self.title_fr { am.title_fr = Set(v); }
        if let Some(v) = self.description_en { am.description_en = Set(v); }
        if let Some(v) = self.description_fr { am.description_fr = Set(v); }
    }
}

/// Create a service.
#[instrument(skip(db, input))]
pub async fn create_service(db: &DatabaseConnection, input: CreateServiceInput) -> Result<service::Model, ServiceError> {
    service::validate_fields(&input.title_en, &input.title_fr, &input.description_en, &input.description_fr)?;
    let now = clock::now();
    let am = service::ActiveModel {
        id: NotSet,
        title_en: Set(input.title_en),
        title_fr: Set(input.title_fr),
        description_en: Set(input.description_en),
        description_fr: Set(input.description_fr),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(db).await?;
    info!(event = "service_created", id = created.id);
    Ok(created)
}

/// Get service by id.
pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<Option<service::Model>, ServiceError> {
    Ok(service::Entity::find_by_id(id).one(db).await?)
}

/// List services in creation order, optionally windowed.
pub async fn list_services(db: &DatabaseConnection, filter: Option<ListFilter>) -> Result<Vec<service::Model>, ServiceError> {
    let filter = filter.unwrap_or_default();
    filter.validate()?;
    let select = service::Entity::find()
        .order_by_asc(service::Column::CreatedAt)
        .order_by_asc(service::Column::Id);
    Ok(filter.apply(select).all(db).await?)
}

/// Update the fields present in `input`; `updated_at` always moves forward.
#[instrument(skip(db, input), fields(id = input.id))]
pub async fn update_service(db: &DatabaseConnection, input: UpdateServiceInput) -> Result<service::Model, ServiceError> {
    input.validate()?;
    let id = input.id;
    let existing = service::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("service", id))?;
    let previous = existing.updated_at;
    let mut am: service::ActiveModel = existing.into();
    input.apply(&mut am);
    am.updated_at = Set(clock::touch(previous));
    let updated = am.update(db).await.map_err(|e| update_error(e, "service", id))?;
    info!(event = "service_updated", id);
    Ok(updated)
}

/// Delete service; `success` is false when no row matched.
#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let res = service::Entity::delete_by_id(id).exec(db).await?;
    info!(event = "service_deleted", id, rows = res.rows_affected);
    Ok(DeleteOutcome::from_rows(res.rows_affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, tick};

    fn sample(title_en: &str) -> CreateServiceInput {
        CreateServiceInput {
            title_en: title_en.into(),
            title_fr: "Y".into(),
            description_en: "A".into(),
            description_fr: "B".into(),
        }
    }

    #[tokio::test]
    async fn service_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_service(&db, sample("X")).await?;
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let found = get_service(&db, created.id).await?.unwrap();
        assert_eq!(found, created);

        tick().await;
        let updated = update_service(&db, UpdateServiceInput { id: created.id, title_en: Some("Z".into()), ..Default::default() }).await?;
        assert_eq!(updated.title_en, "Z");
        assert_eq!(updated.title_fr, "Y");
        assert_eq!(updated.description_en, "A");
        assert_eq!(updated.description_fr, "B");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let refetched = get_service(&db, created.id).await?.unwrap();
        assert_eq!(refetched.title_en, "Z");
        assert_eq!(refetched.title_fr, "Y");

        assert_eq!(delete_service(&db, created.id).await?, DeleteOutcome { success: true });
        assert!(get_service(&db, created.id).await?.is_none());
        assert_eq!(delete_service(&db, created.id).await?, DeleteOutcome { success: false });
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut input = sample("X");
        input.description_fr = "  ".into();
        let err = create_service(&db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("description_fr")));
        assert!(list_services(&db, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_still_bumps_updated_at() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_service(&db, sample("X")).await?;
        let updated = update_service(&db, UpdateServiceInput { id: created.id, ..Default::default() }).await?;
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.title_en, created.title_en);

        let again = update_service(&db, UpdateServiceInput { id: created.id, ..Default::default() }).await?;
        assert!(again.updated_at > updated.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_or_blank() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_service(&db, UpdateServiceInput { id: 999, title_en: Some("Z".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("999")));

        let created = create_service(&db, sample("X")).await?;
        let err = update_service(&db, UpdateServiceInput { id: created.id, title_fr: Some(String::new()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(get_service(&db, created.id).await?.unwrap().title_fr, "Y");
        Ok(())
    }

    #[tokio::test]
    async fn list_in_creation_order_with_window() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for t in ["first", "second", "third"] {
            create_service(&db, sample(t)).await?;
            tick().await;
        }
        let all = list_services(&db, None).await?;
        let titles: Vec<_> = all.iter().map(|s| s.title_en.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);

        let window = list_services(&db, Some(ListFilter::new(Some(2), Some(1)))).await?;
        let titles: Vec<_> = window.iter().map(|s| s.title_en.as_str()).collect();
        assert_eq!(titles, ["second", "third"]);

        assert!(list_services(&db, Some(ListFilter::new(Some(0), None))).await.is_err());
        let err = list_services(&db, Some(ListFilter::new(Some(u64::MAX), None))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("limit")));
        Ok(())
    }
}
