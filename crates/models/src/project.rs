use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, project_image, validation::require_text};

/// Closed set of portfolio categories. Stored as its snake_case name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    #[sea_orm(string_value = "graphic_design")]
    GraphicDesign,
    #[sea_orm(string_value = "digital_printing")]
    DigitalPrinting,
    #[sea_orm(string_value = "packaging")]
    Packaging,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::GraphicDesign,
        ProjectCategory::DigitalPrinting,
        ProjectCategory::Packaging,
        ProjectCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::GraphicDesign => "graphic_design",
            ProjectCategory::DigitalPrinting => "digital_printing",
            ProjectCategory::Packaging => "packaging",
            ProjectCategory::Other => "other",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ProjectCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::validation(format!(
                "category must be one of graphic_design, digital_printing, packaging, other (got '{s}')"
            )))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
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
    pub category: ProjectCategory,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Images }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Images => Entity::has_many(project_image::Entity).into(),
        }
    }
}

impl Related<project_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::Images.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(title_en: &str, title_fr: &str, description_en: &str, description_fr: &str) -> Result<(), ModelError> {
    require_text("title_en", title_en)?;
    require_text("title_fr", title_fr)?;
    require_text("description_en", description_en)?;
    require_text("description_fr", description_fr)?;
    Ok(())
}
