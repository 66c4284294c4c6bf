use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{case_study, errors::ModelError, validation::validate_url};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_study_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_study_id: i32,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub alt_text_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub alt_text_fr: Option<String>,
    pub display_order: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CaseStudy }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CaseStudy => Entity::belongs_to(case_study::Entity)
                .from(Column::CaseStudyId)
                .to(case_study::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<case_study::Entity> for Entity {
    fn to() -> RelationDef { Relation::CaseStudy.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_image_url(image_url: &str) -> Result<(), ModelError> {
    validate_url("image_url", image_url)
}
