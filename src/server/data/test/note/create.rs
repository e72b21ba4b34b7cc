use super::*;

/// Tests creating a new note.
///
/// Verifies that the repository stores the note with a generated id and uses the
/// provided creation time for both timestamps.
///
/// Expected: Ok with note created
#[tokio::test]
async fn creates_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());
    let created_at = Utc::now();
    let note = repo
        .create(NewNote {
            content: content("Groceries", "milk, eggs", &["home"]),
            created_at,
        })
        .await?;

    assert!(!note.id.is_empty());
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.body, "milk, eggs");
    assert_eq!(note.tags, vec!["home".to_string()]);
    assert_eq!(note.created_at, note.updated_at);

    // Verify note exists in database
    let db_note = entity::prelude::Note::find_by_id(note.id.clone())
        .one(db)
        .await?;
    assert!(db_note.is_some());
    assert_eq!(db_note.unwrap().title, "Groceries");

    Ok(())
}

/// Tests that every created note receives a distinct id.
///
/// Expected: Ok with 10 distinct ids and 10 rows
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());
    let mut ids = std::collections::HashSet::new();
    for i in 0..10 {
        let note = repo
            .create(NewNote {
                content: content(&format!("Note {}", i), "", &[]),
                created_at: Utc::now(),
            })
            .await?;
        ids.insert(note.id);
    }

    assert_eq!(ids.len(), 10);
    assert_eq!(entity::prelude::Note::find().count(db).await?, 10);

    Ok(())
}
