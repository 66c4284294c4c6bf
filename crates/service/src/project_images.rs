use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{clock, project, project_image};
use crate::{errors::{child_insert_error, ServiceError}, types::DeleteOutcome};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProjectImageInput {
    pub project_id: i32,
    pub image_url: String,
    #[serde(default)]
    pub alt_text_en: Option<String>,
    #[serde(default)]
    pub alt_text_fr: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Attach an image to an existing project.
#[instrument(skip(db, input), fields(project_id = input.project_id))]
pub async fn create_project_image(db: &DatabaseConnection, input: CreateProjectImageInput) -> Result<project_image::Model, ServiceError> {
    project_image::validate_image_url(&input.image_url)?;
    let project_id = input.project_id;

    let txn = db.begin().await?;
    if project::Entity::find_by_id(project_id).one(&txn).await?.is_none() {
        return Err(ServiceError::missing_parent("project", project_id));
    }
    let am = project_image::ActiveModel {
        id: NotSet,
        project_id: Set(project_id),
        image_url: Set(input.image_url),
        alt_text_en: Set(input.alt_text_en),
        alt_text_fr: Set(input.alt_text_fr),
        display_order: Set(input.display_order),
        created_at: Set(clock::now()),
    };
    let created = am
        .insert(&txn)
        .await
        .map_err(|e| child_insert_error(e, "project", project_id))?;
    txn.commit().await?;
    info!(event = "project_image_created", id = created.id, project_id);
    Ok(created)
}

/// Images of one project by `display_order`; empty when the project has none or is absent.
pub async fn list_project_images(db: &DatabaseConnection, project_id: i32) -> Result<Vec<project_image::Model>, ServiceError> {
    Ok(project_image::Entity::find()
        .filter(project_image::Column::ProjectId.eq(project_id))
        .order_by_asc(project_image::Column::DisplayOrder)
        .order_by_asc(project_image::Column::Id)
        .all(db)
        .await?)
}

#[instrument(skip(db))]
pub async fn delete_project_image(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let res = project_image::Entity::delete_by_id(id).exec(db).await?;
    info!(event = "project_image_deleted", id, rows = res.rows_affected);
    Ok(DeleteOutcome::from_rows(res.rows_affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{create_project, CreateProjectInput};
    use crate::test_support::get_db;
    use models::ProjectCategory;

    async fn project_id(db: &DatabaseConnection) -> Result<i32, anyhow::Error> {
        let p = create_project(db, CreateProjectInput {
            title_en: "Menu".into(),
            title_fr: "Carte".into(),
            description_en: "Restaurant menu".into(),
            description_fr: "Carte de restaurant".into(),
            category: ProjectCategory::Other,
        }).await?;
        Ok(p.id)
    }

    fn input(project_id: i32, display_order: i32) -> CreateProjectImageInput {
        CreateProjectImageInput {
            project_id,
            image_url: format!("https://cdn.example.com/menu-{display_order}.jpg"),
            alt_text_en: Some("Front".into()),
            alt_text_fr: None,
            display_order,
        }
    }

    #[tokio::test]
    async fn listed_by_display_order() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let pid = project_id(&db).await?;
        let second = create_project_image(&db, input(pid, 2)).await?;
        let first = create_project_image(&db, input(pid, 0)).await?;
        assert_eq!(first.alt_text_en.as_deref(), Some("Front"));
        assert_eq!(first.alt_text_fr, None);

        let listed = list_project_images(&db, pid).await?;
        let orders: Vec<_> = listed.iter().map(|i| i.display_order).collect();
        assert_eq!(orders, [0, 2]);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
        Ok(())
    }

    #[tokio::test]
    async fn missing_parent_is_rejected_without_insert() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_project_image(&db, input(4242, 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ReferentialIntegrity(ref m) if m.contains("4242")));
        assert!(list_project_images(&db, 4242).await?.is_empty());
        assert_eq!(project_image::Entity::find().all(&db).await?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_url_is_a_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let pid = project_id(&db).await?;
        let mut bad = input(pid, 0);
        bad.image_url = "menu.jpg".into();
        let err = create_project_image(&db, bad).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        Ok(())
    }

    #[tokio::test]
    async fn delete_leaves_siblings() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let pid = project_id(&db).await?;
        let a = create_project_image(&db, input(pid, 0)).await?;
        let b = create_project_image(&db, input(pid, 0)).await?;
        assert!(delete_project_image(&db, a.id).await?.success);
        let left = list_project_images(&db, pid).await?;
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);
        assert!(!delete_project_image(&db, a.id).await?.success);
        Ok(())
    }

    #[test]
    fn display_order_defaults_to_zero() {
        let i: CreateProjectImageInput =
            serde_json::from_str(r#"{"project_id":1,"image_url":"https://x.example/a.png"}"#).unwrap();
        assert_eq!(i.display_order, 0);
        assert!(i.alt_text_en.is_none());
    }
}
