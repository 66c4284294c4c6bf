use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::case_study_image;

/// A client engagement written up as title, description, client, challenge,
/// solution and results, each in English and French.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_studies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title_en: String,
    #[sea_orm(column_type = "Text")]
    pub title_fr: String,
    #[sea_orm(column_type = "Text")]
    pub description_en: String,
    #[sea_orm(column_type = "Text")]
    pub description_fr: String,
    #[sea_orm(column_type = "Text")]
    pub client_name_en: String,
    #[sea_orm(column_type = "Text")]
    pub client_name_fr: String,
    #[sea_orm(column_type = "Text")]
    pub challenge_description_en: String,
    #[sea_orm(column_type = "Text")]
    pub challenge_description_fr: String,
    #[sea_orm(column_type = "Text")]
    pub solution_description_en: String,
    #[sea_orm(column_type = "Text")]
    pub solution_description_fr: String,
    #[sea_orm(column_type = "Text")]
    pub results_description_en: String,
    #[sea_orm(column_type = "Text")]
    pub results_description_fr: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Images }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(case_study_image::Entity).into(),
        }
    }
}

impl Related<case_study_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Images.def() }
}

impl ActiveModelBehavior for ActiveModel {}
