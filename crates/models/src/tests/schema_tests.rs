use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    NotSet, PaginatorTrait, QueryFilter, Set, Statement,
};

use crate::{clock, db, project, project_image, case_study, case_study_image, ProjectCategory};
use configs::DatabaseConfig;

/// Fresh in-memory database with every migration applied
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = db::connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_project(db: &DatabaseConnection, category: ProjectCategory) -> Result<project::Model> {
    let now = clock::now();
    let am = project::ActiveModel {
        id: NotSet,
        title_en: Set("Poster".into()),
        title_fr: Set("Affiche".into()),
        description_en: Set("A poster".into()),
        description_fr: Set("Une affiche".into()),
        category: Set(category),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn test_connection_and_ping() -> Result<()> {
    let db = setup_test_db().await?;
    db::test_connection(&db).await?;
    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS one".to_string()))
        .await?
        .expect("one row");
    let one: i32 = row.try_get("", "one")?;
    assert_eq!(one, 1);
    Ok(())
}

#[tokio::test]
async fn test_category_is_stored_as_snake_case_text() -> Result<()> {
    let db = setup_test_db().await?;
    let p = insert_project(&db, ProjectCategory::DigitalPrinting).await?;

    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT category FROM projects WHERE id = ?",
            [p.id.into()],
        ))
        .await?
        .expect("row");
    let raw: String = row.try_get("", "category")?;
    assert_eq!(raw, "digital_printing");

    let found = project::Entity::find()
        .filter(project::Column::Category.eq(ProjectCategory::DigitalPrinting))
        .one(&db)
        .await?;
    assert_eq!(found.map(|m| m.id), Some(p.id));
    Ok(())
}

#[tokio::test]
async fn test_display_order_defaults_to_zero() -> Result<()> {
    let db = setup_test_db().await?;
    let p = insert_project(&db, ProjectCategory::Other).await?;

    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO project_images (project_id, image_url, created_at) VALUES (?, ?, ?)",
        [p.id.into(), "https://cdn.example.com/a.png".into(), clock::now().into()],
    ))
    .await?;

    let img = project_image::Entity::find()
        .filter(project_image::Column::ProjectId.eq(p.id))
        .one(&db)
        .await?
        .expect("image");
    assert_eq!(img.display_order, 0);
    assert_eq!(img.alt_text_en, None);
    assert_eq!(img.alt_text_fr, None);
    Ok(())
}

#[tokio::test]
async fn test_foreign_key_cascade_removes_project_images() -> Result<()> {
    let db = setup_test_db().await?;
    let keep = insert_project(&db, ProjectCategory::Packaging).await?;
    let doomed = insert_project(&db, ProjectCategory::Packaging).await?;

    for (parent, order) in [(doomed.id, 0), (doomed.id, 1), (keep.id, 0)] {
        project_image::ActiveModel {
            id: NotSet,
            project_id: Set(parent),
            image_url: Set(format!("https://cdn.example.com/{parent}/{order}.png")),
            alt_text_en: Set(None),
            alt_text_fr: Set(Some("image".into())),
            display_order: Set(order),
            created_at: Set(clock::now()),
        }
        .insert(&db)
        .await?;
    }

    // Plain DELETE on the parent; the database removes the children.
    project::Entity::delete_by_id(doomed.id).exec(&db).await?;

    let orphans = project_image::Entity::find()
        .filter(project_image::Column::ProjectId.eq(doomed.id))
        .count(&db)
        .await?;
    assert_eq!(orphans, 0);
    let siblings = project_image::Entity::find()
        .filter(project_image::Column::ProjectId.eq(keep.id))
        .count(&db)
        .await?;
    assert_eq!(siblings, 1);
    Ok(())
}

#[tokio::test]
async fn test_image_with_missing_parent_violates_foreign_key() -> Result<()> {
    let db = setup_test_db().await?;
    let res = case_study_image::ActiveModel {
        id: NotSet,
        case_study_id: Set(4242),
        image_url: Set("https://cdn.example.com/x.png".into()),
        alt_text_en: Set(None),
        alt_text_fr: Set(None),
        display_order: Set(0),
        created_at: Set(clock::now()),
    }
    .insert(&db)
    .await;
    assert!(res.is_err());
    assert_eq!(case_study_image::Entity::find().count(&db).await?, 0);
    assert_eq!(case_study::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_migrations_roll_back_cleanly() -> Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::down(&db, None).await?;
    assert!(project::Entity::find().all(&db).await.is_err());
    migration::Migrator::up(&db, None).await?;
    assert!(project::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
