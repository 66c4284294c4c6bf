use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::{clock, home_page_content as home, validation::require_text_if_present};
use crate::errors::{update_error, ServiceError};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateHomePageContentInput {
    #[serde(default)]
    pub hero_title_en: Option<String>,
    #[serde(default)]
    pub hero_title_fr: Option<String>,
    #[serde(default)]
    pub hero_subtitle_en: Option<String>,
    #[serde(default)]
    pub hero_subtitle_fr: Option<String>,
    #[serde(default)]
    pub about_section_en: Option<String>,
    #[serde(default)]
    pub about_section_fr: Option<String>,
}

impl UpdateHomePageContentInput {
    fn validate(&self) -> Result<(), ServiceError> {
        require_text_if_present("hero_title_en", self.hero_title_en.as_deref())?;
        require_text_if_present("hero_title_fr", self.hero_title_fr.as_deref())?;
        require_text_if_present("hero_subtitle_en", self.hero_subtitle_en.as_deref())?;
        require_text_if_present("hero_subtitle_fr", self.hero_subtitle_fr.as_deref())?;
        require_text_if_present("about_section_en", self.about_section_en.as_deref())?;
        require_text_if_present("about_section_fr", self.about_section_fr.as_deref())?;
        Ok(())
    }

    fn apply(self, am: &mut home::ActiveModel) {
        if let Some(v) = self.hero_title_en { am.hero_title_en = Set(v); }
        if let Some(v) = self.hero_title_fr { am.hero_title_fr = Set(v); }
        if let Some(v) = self.hero_subtitle_en { am.hero_subtitle_en = Set(v); }
        if let Some(v) = self.hero_subtitle_fr { am.hero_subtitle_fr = Set(v); }
        if let Some(v) = self.about_section_en { am.about_section_en = Set(v); }
        if let Some(v) = self.about_section_fr { am.about_section_fr = Set(v); }
    }

    fn into_new_row(self) -> home::ActiveModel {
        home::ActiveModel {
            id: NotSet,
            hero_title_en: Set(self.hero_title_en.unwrap_or_else(|| home::DEFAULT_HERO_TITLE_EN.into())),
            hero_title_fr: Set(self.hero_title_fr.unwrap_or_else(|| home::DEFAULT_HERO_TITLE_FR.into())),
            hero_subtitle_en: Set(self.hero_subtitle_en.unwrap_or_else(|| home::DEFAULT_HERO_SUBTITLE_EN.into())),
            hero_subtitle_fr: Set(self.hero_subtitle_fr.unwrap_or_else(|| home::DEFAULT_HERO_SUBTITLE_FR.into())),
            about_section_en: Set(self.about_section_en.unwrap_or_else(|| home::DEFAULT_ABOUT_SECTION_EN.into())),
            about_section_fr: Set(self.about_section_fr.unwrap_or_else(|| home::DEFAULT_ABOUT_SECTION_FR.into())),
            updated_at: Set(clock::now()),
        }
    }
}

pub async fn get_home_page_content(db: &DatabaseConnection) -> Result<Option<home::Model>, ServiceError> {
    Ok(home::Entity::find().order_by_asc(home::Column::Id).one(db).await?)
}

/// Patch the first row, or create it from the input plus default copy when none exists.
#[instrument(skip(db, input))]
pub async fn update_home_page_content(
    db: &DatabaseConnection,
    input: UpdateHomePageContentInput,
) -> Result<home::Model, ServiceError> {
    input.validate()?;
    match get_home_page_content(db).await? {
        None => {
            let created = input.into_new_row().insert(db).await?;
            info!(event = "home_page_content_created", id = created.id);
            Ok(created)
        }
        Some(existing) => {
            let id = existing.id;
            let previous = existing.updated_at;
            let mut am: home::ActiveModel = existing.into();
            input.apply(&mut am);
            am.updated_at = Set(clock::touch(previous));
            let updated = am.update(db).await.map_err(|e| update_error(e, "home page content", id))?;
            info!(event = "home_page_content_updated", id);
            Ok(updated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn first_update_creates_with_defaults() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(get_home_page_content(&db).await?.is_none());

        let created = update_home_page_content(&db, UpdateHomePageContentInput {
            hero_title_en: Some("Print with us".into()),
            ..Default::default()
        }).await?;
        assert_eq!(created.hero_title_en, "Print with us");
        assert_eq!(created.hero_title_fr, home::DEFAULT_HERO_TITLE_FR);
        assert_eq!(created.hero_subtitle_en, home::DEFAULT_HERO_SUBTITLE_EN);
        assert_eq!(created.about_section_fr, home::DEFAULT_ABOUT_SECTION_FR);
        assert_eq!(get_home_page_content(&db).await?.unwrap(), created);
        Ok(())
    }

    #[tokio::test]
    async fn later_updates_patch_the_same_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = update_home_page_content(&db, UpdateHomePageContentInput::default()).await?;
        assert_eq!(created.hero_title_en, home::DEFAULT_HERO_TITLE_EN);

        let updated = update_home_page_content(&db, UpdateHomePageContentInput {
            about_section_en: Some("Family studio since 1998".into()),
            ..Default::default()
        }).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.about_section_en, "Family studio since 1998");
        assert_eq!(updated.hero_title_en, home::DEFAULT_HERO_TITLE_EN);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(home::Entity::find().all(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn blank_field_is_rejected_before_create() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_home_page_content(&db, UpdateHomePageContentInput {
            hero_subtitle_fr: Some(" ".into()),
            ..Default::default()
        }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(get_home_page_content(&db).await?.is_none());
        Ok(())
    }
}
