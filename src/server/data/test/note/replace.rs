use super::*;

/// Tests replacing every editable field of a note.
///
/// Expected: Ok(Some) with new content, same id and creation time
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::note::NoteFactory::new(db)
        .title("Draft")
        .body("first")
        .tags(["work"])
        .build()
        .await?;
    let updated_at = seeded.created_at + Duration::seconds(30);

    let repo = DatabaseNoteRepository::new(db.clone());
    let note = repo
        .replace(&seeded.id, content("Final", "", &[]), updated_at)
        .await?
        .unwrap();

    assert_eq!(note.id, seeded.id);
    assert_eq!(note.title, "Final");
    assert_eq!(note.body, "");
    assert!(note.tags.is_empty());
    assert_eq!(note.created_at, seeded.created_at);
    assert_eq!(note.updated_at, updated_at);

    let stored = entity::prelude::Note::find_by_id(seeded.id).one(db).await?.unwrap();
    assert_eq!(stored.title, "Final");

    Ok(())
}

/// Tests replacing a note that does not exist.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());
    let result = repo
        .replace("does-not-exist", content("Final", "", &[]), Utc::now())
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Note::find().count(db).await?, 0);

    Ok(())
}

/// Tests a replace stamped earlier than the note's creation time.
///
/// Expected: Ok(Some) with updated_at raised to created_at
#[tokio::test]
async fn never_stores_updated_at_before_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_note(db).await?;

    let repo = DatabaseNoteRepository::new(db.clone());
    let note = repo
        .replace(
            &seeded.id,
            content("Final", "", &[]),
            seeded.created_at - Duration::minutes(5),
        )
        .await?
        .unwrap();

    assert_eq!(note.updated_at, seeded.created_at);

    Ok(())
}
