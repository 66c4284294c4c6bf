use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{case_study, case_study_image, clock};
use crate::{errors::{child_insert_error, ServiceError}, types::DeleteOutcome};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCaseStudyImageInput {
    pub case_study_id: i32,
    pub image_url: String,
    #[serde(default)]
    pub alt_text_en: Option<String>,
    #[serde(default)]
    pub alt_text_fr: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[instrument(skip(db, input), fields(case_study_id = input.case_study_id))]
pub async fn create_case_study_image(
    db: &DatabaseConnection,
    input: CreateCaseStudyImageInput,
) -> Result<case_study_image::Model, ServiceError> {
    case_study_image::validate_image_url(&input.image_url)?;
    let case_study_id = input.case_study_id;

    let txn = db.begin().await?;
    if case_study::Entity::find_by_id(case_study_id).one(&txn).await?.is_none() {
        return Err(ServiceError::missing_parent("case study", case_study_id));
    }
    let am = case_study_image::ActiveModel {
        id: NotSet,
        case_study_id: Set(case_study_id),
        image_url: Set(input.image_url),
        alt_text_en: Set(input.alt_text_en),
        alt_text_fr: Set(input.alt_text_fr),
        display_order: Set(input.display_order),
        created_at: Set(clock::now()),
    };
    let created = am
        .insert(&txn)
        .await
        .map_err(|e| child_insert_error(e, "case study", case_study_id))?;
    txn.commit().await?;
    info!(event = "case_study_image_created", id = created.id, case_study_id);
    Ok(created)
}

pub async fn list_case_study_images(
    db: &DatabaseConnection,
    case_study_id: i32,
) -> Result<Vec<case_study_image::Model>, ServiceError> {
    Ok(case_study_image::Entity::find()
        .filter(case_study_image::Column::CaseStudyId.eq(case_study_id))
        .order_by_asc(case_study_image::Column::DisplayOrder)
        .order_by_asc(case_study_image::Column::Id)
        .all(db)
        .await?)
}

#[instrument(skip(db))]
pub async fn delete_case_study_image(db: &DatabaseConnection, id: i32) -> Result<DeleteOutcome, ServiceError> {
    let res = case_study_image::Entity::delete_by_id(id).exec(db).await?;
    info!(event = "case_study_image_deleted", id, rows = res.rows_affected);
    Ok(DeleteOutcome::from_rows(res.rows_affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_studies::{create_case_study, tests::sample};
    use crate::test_support::get_db;

    fn input(case_study_id: i32, display_order: i32) -> CreateCaseStudyImageInput {
        CreateCaseStudyImageInput {
            case_study_id,
            image_url: "https://cdn.example.com/cs/hero.png".into(),
            alt_text_en: Some("Hero".into()),
            alt_text_fr: Some("Bannière".into()),
            display_order,
        }
    }

    #[tokio::test]
    async fn ordered_and_scoped_to_parent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_case_study(&db, sample("A")).await?;
        let b = create_case_study(&db, sample("B")).await?;
        create_case_study_image(&db, input(a.id, 5)).await?;
        create_case_study_image(&db, input(a.id, -1)).await?;
        create_case_study_image(&db, input(b.id, 0)).await?;

        let orders: Vec<_> = list_case_study_images(&db, a.id).await?.iter().map(|i| i.display_order).collect();
        assert_eq!(orders, [-1, 5]);
        assert!(list_case_study_images(&db, 999).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_case_study_is_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_case_study_image(&db, input(31, 0)).await.unwrap_err();
        assert_eq!(err.code(), "REFERENTIAL_INTEGRITY");
        assert_eq!(err.to_string(), "referential integrity error: case study with id 31 does not exist");
        assert!(case_study_image::Entity::find().all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_absence() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cs = create_case_study(&db, sample("A")).await?;
        let img = create_case_study_image(&db, input(cs.id, 0)).await?;
        assert_eq!(delete_case_study_image(&db, img.id).await?, DeleteOutcome { success: true });
        assert_eq!(delete_case_study_image(&db, img.id).await?, DeleteOutcome { success: false });
        Ok(())
    }
}
