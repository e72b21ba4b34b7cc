use super::*;

/// Tests deleting a note by ID.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_note(db).await?;
    let other = factory::create_note(db).await?;

    let repo = DatabaseNoteRepository::new(db.clone());
    let deleted = repo.delete(&seeded.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Note::find_by_id(seeded.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Note::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a note that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());

    assert!(!repo.delete("does-not-exist").await?);

    Ok(())
}
