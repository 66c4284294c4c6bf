use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Text used for any field left out when the first home page row is created.
pub const DEFAULT_HERO_TITLE_EN: &str = "Welcome";
pub const DEFAULT_HERO_TITLE_FR: &str = "Bienvenue";
pub const DEFAULT_HERO_SUBTITLE_EN: &str = "Professional printing services";
pub const DEFAULT_HERO_SUBTITLE_FR: &str = "Services d'impression professionnels";
pub const DEFAULT_ABOUT_SECTION_EN: &str = "About our company";
pub const DEFAULT_ABOUT_SECTION_FR: &str = "À propos de notre entreprise";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "home_page_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub hero_title_en: String,
    #[sea_orm(column_type = "Text")]
    pub hero_title_fr: String,
    #[sea_orm(column_type = "Text")]
    pub hero_subtitle_en: String,
    #[sea_orm(column_type = "Text")]
    pub hero_subtitle_fr: String,
    #[sea_orm(column_type = "Text")]
    pub about_section_en: String,
    #[sea_orm(column_type = "Text")]
    pub about_section_fr: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}
