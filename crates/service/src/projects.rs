use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{clock, project, project_image, validation::require_text_if_present, ProjectCategory};
use crate::{errors::{update_error, ServiceError}, pagination::ListFilter, types::DeleteOutcome};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
    pub category: ProjectCategory,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateProjectInput {
    pub id: i32,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_fr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_fr: Option<String>,
    #[serde(default)]
    pub category: Option<ProjectCategory>,
}

impl UpdateProjectInput {
    fn validate(&self) -> Result<(), ServiceError> {
        require_text_if_present("title_en", self.title_en.as_deref())?;
        require_text_if_present("title_fr", self.title_fr.as_deref())?;
        require_text_if_present("description_en", self.description_en.as_deref())?;
        require_text_if_present("description_fr", self.description_fr.as_deref())?;
        Ok(())
    }

    fn apply(self, am: &mut project::ActiveModel) {
        if let Some(v) = self.title_en { am.title_en = Set(v); }
        if let Some(v) = self.title_fr { am.title_fr = Set(v); }
        if let Some(v) = self.description_en { am.description_en = Set(v); }
        if let Some(v) = self.description_fr { am.description_fr = Set(v); }
        if let Some(v) = self.category { am.category = Set(v); }
    }
}

/// Project listing filter. `category` narrows the set before the window applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl ProjectFilter {
    fn window(&self) -> ListFilter {
        ListFilter::new(self.limit, self.offset)
    }
}

#[instrument(skip(db, input), fields(category = %input.category))]
pub async fn create_project(db: &DatabaseConnection, input: CreateProjectInput) -> Result<project::Model, ServiceError> {
    project::validate_fields(&input.title_en, &input.title_fr, &input.description_en, &input.description_fr)?;
    let now = clock::now();
    let am = project::ActiveModel {
        id: NotSet,
        title_en: Set(input.title_en),
        title_fr: Set(input.title_fr),
        description_en: Set(input.description_en),
        description_fr: Set(input.description_fr),
        category: Set(input.category),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(db).await?;
    info!(event = "project_created", id = created.id);
    Ok(created)
}

pub async fn get_project(db: &DatabaseConnection, id: i32) -> Result<Option<project::Model>, ServiceError> {
    Ok(project::Entity::find_by_id(id).one(db).await?)
}

/// Projects in creation order, optionally narrowed to one category.
pub async fn list_projects(db: &DatabaseConnection, filter: Option<ProjectFilter>) -> Result<Vec<project::Model>, ServiceError> {
    let filter = filter.unwrap_or_default();
    let window = filter.window();
    window.validate()?;
    let mut select = project::Entity::find();
    if let Some(category) = filter.category {
        select = select.filter(project::Column::Category.eq(category));
    }
    let select = select
        .order_by_asc(project::Column::CreatedAt)
        .order_by_asc(project::Column::Id);
    Ok(window.apply(select).all(db).await?)
}

#[instrument(skip(db, input), fields(id = input.id))]
pub async fn update_project(db: &DatabaseConnection, input: UpdateProjectInput) -> Result<project::Model, ServiceError> {
    input.validate()?;
    let id = input.id;
    let existing = project::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("project", id))?;
    let previous = existing.updated_at;
    let mut am: project::ActiveModel = existing.into();
    input.apply(&mut am);
    am.updated_at = Set(clock::touch(previous));
    let updated = am.update(db).await.map_err(|e| update_error(e, "project", id))?;
    info!(event = "project_updated", id);
    Ok(updated)
}

/// Delete a project and its images in one transaction.
#[instrument(skip(db))]
pub async fn delete_project(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let txn = db.begin().await?;
    let images = project_image::Entity::delete_many()
        .filter(project_image::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    let res = project::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(event = "project_deleted", id, rows = res.rows_affected, images = images.rows_affected);
    Ok(DeleteOutcome::from_rows(res.rows_affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_images::{create_project_image, list_project_images, CreateProjectImageInput};
    use crate::test_support::{get_db, tick};

    fn sample(title_en: &str, category: ProjectCategory) -> CreateProjectInput {
        CreateProjectInput {
            title_en: title_en.into(),
            title_fr: format!("{title_en} (fr)"),
            description_en: "Brochure run".into(),
            description_fr: "Impression de brochures".into(),
            category,
        }
    }

    fn image(project_id: i32, display_order: i32) -> CreateProjectImageInput {
        CreateProjectImageInput {
            project_id,
            image_url: format!("https://cdn.example.com/p{project_id}/{display_order}.png"),
            alt_text_en: None,
            alt_text_fr: None,
            display_order,
        }
    }

    #[tokio::test]
    async fn category_filter_then_window() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_project(&db, sample("box-1", ProjectCategory::Packaging)).await?;
        tick().await;
        create_project(&db, sample("logo", ProjectCategory::GraphicDesign)).await?;
        tick().await;
        create_project(&db, sample("box-2", ProjectCategory::Packaging)).await?;
        tick().await;
        create_project(&db, sample("box-3", ProjectCategory::Packaging)).await?;

        let packaging = list_projects(&db, Some(ProjectFilter { category: Some(ProjectCategory::Packaging), ..Default::default() })).await?;
        let titles: Vec<_> = packaging.iter().map(|p| p.title_en.as_str()).collect();
        assert_eq!(titles, ["box-1", "box-2", "box-3"]);
        assert!(packaging.iter().all(|p| p.category == ProjectCategory::Packaging));

        let window = list_projects(&db, Some(ProjectFilter {
            category: Some(ProjectCategory::Packaging),
            limit: Some(2),
            offset: Some(1),
        })).await?;
        let titles: Vec<_> = window.iter().map(|p| p.title_en.as_str()).collect();
        assert_eq!(titles, ["box-2", "box-3"]);

        assert_eq!(list_projects(&db, None).await?.len(), 4);
        let none = list_projects(&db, Some(ProjectFilter { category: Some(ProjectCategory::Other), ..Default::default() })).await?;
        assert!(none.is_empty());

        let err = list_projects(&db, Some(ProjectFilter { offset: Some(u64::MAX), ..Default::default() })).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("offset")));
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_project(&db, sample("poster", ProjectCategory::DigitalPrinting)).await?;
        let updated = update_project(&db, UpdateProjectInput {
            id: created.id,
            category: Some(ProjectCategory::Other),
            ..Default::default()
        }).await?;
        assert_eq!(updated.category, ProjectCategory::Other);
        assert_eq!(updated.title_en, "poster");
        assert_eq!(updated.description_fr, created.description_fr);
        assert!(updated.updated_at > created.updated_at);

        let err = update_project(&db, UpdateProjectInput { id: created.id + 100, ..Default::default() }).await.unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_own_images_only() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let doomed = create_project(&db, sample("doomed", ProjectCategory::Other)).await?;
        let sibling = create_project(&db, sample("sibling", ProjectCategory::Other)).await?;
        for order in [0, 1, 2] {
            create_project_image(&db, image(doomed.id, order)).await?;
        }
        create_project_image(&db, image(sibling.id, 0)).await?;

        assert!(delete_project(&db, doomed.id).await?.success);
        assert!(get_project(&db, doomed.id).await?.is_none());
        assert!(list_project_images(&db, doomed.id).await?.is_empty());
        assert_eq!(list_project_images(&db, sibling.id).await?.len(), 1);

        assert!(!delete_project(&db, doomed.id).await?.success);
        Ok(())
    }

    #[test]
    fn unknown_category_fails_to_decode() {
        let raw = r#"{"title_en":"a","title_fr":"b","description_en":"c","description_fr":"d","category":"posters"}"#;
        assert!(serde_json::from_str::<CreateProjectInput>(raw).is_err());
        let f: ProjectFilter = serde_json::from_str(r#"{"category":"packaging","limit":2}"#).unwrap();
        assert_eq!(f.category, Some(ProjectCategory::Packaging));
        assert_eq!(f.offset, None);
    }
}
