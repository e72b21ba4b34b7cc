use super::*;

/// Tests a partial update that only changes the body.
///
/// Expected: Ok(Some) with new body, untouched title and tags
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::note::NoteFactory::new(db)
        .title("Groceries")
        .body("milk, eggs")
        .tags(["home"])
        .build()
        .await?;
    let updated_at = seeded.created_at + Duration::seconds(5);

    let repo = DatabaseNoteRepository::new(db.clone());
    let note = repo
        .update(
            &seeded.id,
            NoteChanges {
                title: None,
                body: Some("milk, eggs, bread".to_string()),
                tags: None,
                updated_at,
            },
        )
        .await?
        .unwrap();

    assert_eq!(note.id, seeded.id);
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.body, "milk, eggs, bread");
    assert_eq!(note.tags, vec!["home".to_string()]);
    assert_eq!(note.created_at, seeded.created_at);
    assert!(note.updated_at > note.created_at);

    Ok(())
}

/// Tests an update that replaces the tags.
///
/// Expected: Ok(Some) with the new tag list stored
#[tokio::test]
async fn updates_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::note::NoteFactory::new(db).tags(["old"]).build().await?;

    let repo = DatabaseNoteRepository::new(db.clone());
    repo.update(
        &seeded.id,
        NoteChanges {
            title: None,
            body: None,
            tags: Some(vec!["new".to_string(), "other".to_string()]),
            updated_at: Utc::now(),
        },
    )
    .await?;

    let stored = entity::prelude::Note::find_by_id(seeded.id).one(db).await?.unwrap();
    assert_eq!(stored.tags, serde_json::json!(["new", "other"]));

    Ok(())
}

/// Tests updating a note that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());
    let result = repo
        .update(
            "does-not-exist",
            NoteChanges {
                title: Some("Title".to_string()),
                body: None,
                tags: None,
                updated_at: Utc::now(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests writing back a note that was deleted after it was read.
///
/// Expected: Ok(None) rather than a database error
#[tokio::test]
async fn treats_row_deleted_after_read_as_absent() -> Result<(), DbErr> {
    use sea_orm::{ActiveValue, ModelTrait};

    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_note(db).await?;
    let read = entity::prelude::Note::find_by_id(seeded.id.clone())
        .one(db)
        .await?
        .unwrap();
    seeded.delete(db).await?;

    let mut active_model: entity::note::ActiveModel = read.into();
    active_model.title = ActiveValue::Set("Changed".to_string());
    let result = update_if_exists(db, active_model).await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Note::find().count(db).await?, 0);

    Ok(())
}

/// Tests an update stamped earlier than the note's creation time.
///
/// Expected: Ok(Some) with updated_at raised to created_at
#[tokio::test]
async fn never_stores_updated_at_before_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_note(db).await?;

    let repo = DatabaseNoteRepository::new(db.clone());
    let note = repo
        .update(
            &seeded.id,
            NoteChanges {
                title: Some("Changed".to_string()),
                body: None,
                tags: None,
                updated_at: seeded.created_at - Duration::minutes(5),
            },
        )
        .await?
        .unwrap();

    assert_eq!(note.title, "Changed");
    assert_eq!(note.updated_at, seeded.created_at);

    Ok(())
}
