use super::*;

/// Tests that pagination returns notes oldest first with the total count.
///
/// Expected: Ok with the requested window and total of all notes
#[tokio::test]
async fn returns_window_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now();
    // Insert out of order to make sure ordering comes from created_at
    for (title, offset) in [("third", 3), ("first", 1), ("second", 2), ("fourth", 4)] {
        factory::note::NoteFactory::new(db)
            .title(title)
            .created_at(base + Duration::seconds(offset))
            .build()
            .await?;
    }

    let repo = DatabaseNoteRepository::new(db.clone());
    let (notes, total) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 4);
    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "third"]);

    Ok(())
}

/// Tests that listing after N creates returns exactly N notes.
///
/// Expected: Ok with 5 notes and total 5
#[tokio::test]
async fn returns_all_created_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseNoteRepository::new(db.clone());
    for i in 0..5 {
        repo.create(NewNote {
            content: content(&format!("Note {}", i), "", &[]),
            created_at: Utc::now(),
        })
        .await?;
    }

    let (notes, total) = repo.get_paginated(0, 100).await?;

    assert_eq!(notes.len(), 5);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests an offset past the end of the table.
///
/// Expected: Ok with no notes but the full total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_note(db).await?;
    factory::create_note(db).await?;

    let repo = DatabaseNoteRepository::new(db.clone());
    let (notes, total) = repo.get_paginated(10, 20).await?;

    assert!(notes.is_empty());
    assert_eq!(total, 2);

    Ok(())
}

/// Tests offsets and limits outside the signed 64-bit range SQL can bind.
///
/// Expected: Ok with an empty page for `u64::MAX` offset, every note for `u64::MAX` limit
#[tokio::test]
async fn handles_offsets_and_limits_past_i64_max() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_note_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_note(db).await?;
    factory::create_note(db).await?;

    let repo = DatabaseNoteRepository::new(db.clone());

    let (notes, total) = repo.get_paginated(u64::MAX, 20).await?;
    assert!(notes.is_empty());
    assert_eq!(total, 2);

    let (notes, total) = repo.get_paginated(i64::MAX as u64, 20).await?;
    assert!(notes.is_empty());
    assert_eq!(total, 2);

    let (notes, _) = repo.get_paginated(0, u64::MAX).await?;
    assert_eq!(notes.len(), 2);

    Ok(())
}
