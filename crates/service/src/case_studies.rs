use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{
    case_study, case_study_image, clock,
    validation::{require_text, require_text_if_present},
};
use crate::{errors::{update_error, ServiceError}, pagination::ListFilter, types::DeleteOutcome};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCaseStudyInput {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
    pub client_name_en: String,
    pub client_name_fr: String,
    pub challenge_description_en: String,
    pub challenge_description_fr: String,
    pub solution_description_en: String,
    pub solution_description_fr: String,
    pub results_description_en: String,
    pub results_description_fr: String,
}

impl CreateCaseStudyInput {
    fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("title_en", self.title_en.as_str()),
            ("title_fr", self.title_fr.as_str()),
            ("description_en", self.description_en.as_str()),
            ("description_fr", self.description_fr.as_str()),
            ("client_name_en", self.client_name_en.as_str()),
            ("client_name_fr", self.client_name_fr.as_str()),
            ("challenge_description_en", self.challenge_description_en.as_str()),
            ("challenge_description_fr", self.challenge_description_fr.as_str()),
            ("solution_description_en", self.solution_description_en.as_str()),
            ("solution_description_fr", self.solution_description_fr.as_str()),
            ("results_description_en", self.results_description_en.as_str()),
            ("results_description_fr", self.results_description_fr.as_str()),
        ]
    }

    fn validate(&self) -> Result<(), ServiceError> {
        for (field, value) in self.fields() {
            require_text(field, value)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateCaseStudyInput {
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
    pub client_name_en: Option<String>,
    #[serde(default)]
    pub client_name_fr: Option<String>,
    #[serde(default)]
    pub challenge_description_en: Option<String>,
    #[serde(default)]
    pub challenge_description_fr: Option<String>,
    #[serde(default)]
    pub solution_description_en: Option<String>,
    #[serde(default)]
    pub solution_description_fr: Option<String>,
    #[serde(default)]
    pub results_description_en: Option<String>,
    #[serde(default)]
    pub results_description_fr: Option<String>,
}

impl UpdateCaseStudyInput {
    fn validate(&self) -> Result<(), ServiceError> {
        let present = [
            ("title_en", &self.title_en),
            ("title_fr", &self.title_fr),
            ("description_en", &self.description_en),
            ("description_fr", &self.description_fr),
            ("client_name_en", &self.client_name_en),
            ("client_name_fr", &self.client_name_fr),
            ("challenge_description_en", &self.challenge_description_en),
            ("challenge_description_fr", &self.challenge_description_fr),
            ("solution_description_en", &self.solution_description_en),
            ("solution_description_fr", &self.solution_description_fr),
            ("results_description_en", &self.results_description_en),
            ("results_description_fr", &self.results_description_fr),
        ];
        for (field, value) in present {
            require_text_if_present(field, value.as_deref())?;
        }
        Ok(())
    }

    fn apply(self, am: &mut case_study::ActiveModel) {
        if let Some(v) = self.title_en { am.title_en = Set(v); }
        if let Some(v) = self.title_fr { am.title_fr = Set(v); }
        if let Some(v) = self.description_en { am.description_en = Set(v); }
        if let Some(v) = self.description_fr { am.description_fr = Set(v); }
        if let Some(v) = self.client_name_en { am.client_name_en = Set(v); }
        if let Some(v) = self.client_name_fr { am.client_name_fr = Set(v); }
        if let Some(v) = self.challenge_description_en { am.challenge_description_en = Set(v); }
        if let Some(v) = self.challenge_description_fr { am.challenge_description_fr = Set(v); }
        if let Some(v) = self.solution_description_en { am.solution_description_en = Set(v); }
        if let Some(v) = self.solution_description_fr { am.solution_description_fr = Set(v); }
        if let Some(v) = self.results_description_en { am.results_description_en = Set(v); }
        if let Some(v) = self.results_description_fr { am.results_description_fr = Set(v); }
    }
}

#[instrument(skip(db, input))]
pub async fn create_case_study(db: &DatabaseConnection, input: CreateCaseStudyInput) -> Result<case_study::Model, ServiceError> {
    input.validate()?;
    let now = clock::now();
    let am = case_study::ActiveModel {
        id: NotSet,
        title_en: Set(input.title_en),
        title_fr: Set(input.title_fr),
        description_en: Set(input.description_en),
        description_fr: Set(input.description_fr),
        client_name_en: Set(input.client_name_en),
        client_name_fr: Set(input.client_name_fr),
        challenge_description_en: Set(input.challenge_description_en),
        challenge_description_fr: Set(input.challenge_description_fr),
        solution_description_en: Set(input.solution_description_en),
        solution_description_fr: Set(input.solution_description_fr),
        results_description_en: Set(input.results_description_en),
        results_description_fr: Set(input.results_description_fr),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = am.insert(db).await?;
    info!(event = "case_study_created", id = created.id);
    Ok(created)
}

pub async fn get_case_study(db: &DatabaseConnection, id: i32) -> Result<Option<case_study::Model>, ServiceError> {
    Ok(case_study::Entity::find_by_id(id).one(db).await?)
}

/// Newest first.
pub async fn list_case_studies(db: &DatabaseConnection, filter: Option<ListFilter>) -> Result<Vec<case_study::Model>, ServiceError> {
    let filter = filter.unwrap_or_default();
    filter.validate()?;
    let select = case_study::Entity::find()
        .order_by_desc(case_study::Column::CreatedAt)
        .order_by_desc(case_study::Column::Id);
    Ok(filter.apply(select).all(db).await?)
}

#[instrument(skip(db, input), fields(id = input.id))]
pub async fn update_case_study(db: &DatabaseConnection, input: UpdateCaseStudyInput) -> Result<case_study::Model, ServiceError> {
    input.validate()?;
    let id = input.id;
    let existing = case_study::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("case study", id))?;
    let previous = existing.updated_at;
    let mut am: case_study::ActiveModel = existing.into();
    input.apply(&mut am);
    am.updated_at = Set(clock::touch(previous));
    let updated = am.update(db).await.map_err(|e| update_error(e, "case study", id))?;
    info!(event = "case_study_updated", id);
    Ok(updated)
}

/// Delete a case study and its images in one transaction.
#[instrument(skip(db))]
pub async fn delete_case_study(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let txn = db.begin().await?;
    let images = case_study_image::Entity::delete_many()
        .filter(case_study_image::Column::CaseStudyId.eq(id))
        .exec(&txn)
        .await?;
    let res = case_study::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(event = "case_study_deleted", id, rows = res.rows_affected, images = images.rows_affected);
    Ok(DeleteOutcome::from_rows(res.rows_affected))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::case_study_images::{create_case_study_image, list_case_study_images, CreateCaseStudyImageInput};
    use crate::test_support::{get_db, tick};

    pub(crate) fn sample(title_en: &str) -> CreateCaseStudyInput {
        CreateCaseStudyInput {
            title_en: title_en.into(),
            title_fr: format!("{title_en} (fr)"),
            description_en: "Rebrand".into(),
            description_fr: "Nouvelle identité".into(),
            client_name_en: "Bakery".into(),
            client_name_fr: "Boulangerie".into(),
            challenge_description_en: "Dated packaging".into(),
            challenge_description_fr: "Emballage vieillot".into(),
            solution_description_en: "New boxes".into(),
            solution_description_fr: "Nouvelles boîtes".into(),
            results_description_en: "Sales up".into(),
            results_description_fr: "Ventes en hausse".into(),
        }
    }

    #[tokio::test]
    async fn newest_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_case_study(&db, sample("A")).await?;
        tick().await;
        create_case_study(&db, sample("B")).await?;
        tick().await;
        create_case_study(&db, sample("C")).await?;

        let all = list_case_studies(&db, None).await?;
        let titles: Vec<_> = all.iter().map(|c| c.title_en.as_str()).collect();
        assert_eq!(titles, ["C", "B", "A"]);

        let page = list_case_studies(&db, Some(ListFilter::new(Some(1), Some(1)))).await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title_en, "B");
        Ok(())
    }

    #[tokio::test]
    async fn every_pair_is_required() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut input = sample("A");
        input.results_description_fr = "\t".into();
        let err = create_case_study(&db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("results_description_fr")));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_missing_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_case_study(&db, sample("A")).await?;
        let updated = update_case_study(&db, UpdateCaseStudyInput {
            id: created.id,
            client_name_fr: Some("Pâtisserie".into()),
            ..Default::default()
        }).await?;
        assert_eq!(updated.client_name_fr, "Pâtisserie");
        assert_eq!(updated.client_name_en, "Bakery");
        assert!(updated.updated_at > created.updated_at);

        let err = update_case_study(&db, UpdateCaseStudyInput { id: 77, ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains("77")));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_images() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let study = create_case_study(&db, sample("A")).await?;
        let other = create_case_study(&db, sample("B")).await?;
        for (cs, order) in [(study.id, 0), (study.id, 1), (other.id, 0)] {
            create_case_study_image(&db, CreateCaseStudyImageInput {
                case_study_id: cs,
                image_url: format!("https://cdn.example.com/cs/{cs}-{order}.webp"),
                alt_text_en: None,
                alt_text_fr: None,
                display_order: order,
            }).await?;
        }
        assert!(delete_case_study(&db, study.id).await?.success);
        assert!(get_case_study(&db, study.id).await?.is_none());
        assert!(list_case_study_images(&db, study.id).await?.is_empty());
        assert_eq!(list_case_study_images(&db, other.id).await?.len(), 1);
        assert!(!delete_case_study(&db, study.id).await?.success);
        Ok(())
    }
}
