use shelfmark::db;
use shelfmark::domain::{
    Book, CreateAuthorInput, CreateBookInput, CreateBookInstanceInput, DomainError,
    UpdateBookInstanceInput,
};
use shelfmark::infrastructure::AppState;

// Helper to create a test state over an in-memory database
async fn setup_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

// Helper to create a test book
async fn create_book(
    state: &AppState,
    title: &str,
    genre_id: Option<i32>,
    language_id: Option<i32>,
) -> Book {
    state
        .book_repo
        .create(CreateBookInput {
            title: title.to_string(),
            author: "Test Author".to_string(),
            summary: "A test book".to_string(),
            isbn: "0000000000000".to_string(),
            genre_id,
            language_id,
        })
        .await
        .expect("Failed to create book")
}

fn assert_conflict(err: DomainError, expected: &str) {
    match err {
        DomainError::Conflict(msg) => assert_eq!(msg, expected),
        other => panic!("expected conflict, got: {other}"),
    }
}

fn assert_validation(err: DomainError) {
    match err {
        DomainError::Validation(_) => {}
        other => panic!("expected validation error, got: {other}"),
    }
}

#[tokio::test]
async fn genre_name_is_unique_case_insensitively() {
    let state = setup_state().await;

    state
        .genre_repo
        .create("Fantasy".to_string())
        .await
        .expect("first insert should succeed");

    for duplicate in ["fantasy", "FANTASY", "Fantasy"] {
        let err = state
            .genre_repo
            .create(duplicate.to_string())
            .await
            .unwrap_err();
        assert_conflict(err, "Genre already exists (case insensitive match)");
    }

    // A genuinely different name is fine.
    state
        .genre_repo
        .create("French Poetry".to_string())
        .await
        .expect("distinct name should succeed");
}

#[tokio::test]
async fn renaming_genre_into_existing_name_is_rejected() {
    let state = setup_state().await;

    let fantasy = state
        .genre_repo
        .create("Fantasy".to_string())
        .await
        .expect("create");
    let poetry = state
        .genre_repo
        .create("Poetry".to_string())
        .await
        .expect("create");

    let err = state
        .genre_repo
        .rename(poetry.id, "FANTASY".to_string())
        .await
        .unwrap_err();
    assert_conflict(err, "Genre already exists (case insensitive match)");

    // Re-casing a genre's own name is not a collision.
    let renamed = state
        .genre_repo
        .rename(fantasy.id, "fantasy".to_string())
        .await
        .expect("self re-case should succeed");
    assert_eq!(renamed.name, "fantasy");
}

#[tokio::test]
async fn deleting_genre_clears_book_references() {
    let state = setup_state().await;

    let genre = state
        .genre_repo
        .create("Science Fiction".to_string())
        .await
        .expect("create genre");
    let book = create_book(&state, "Foundation", Some(genre.id), None).await;

    state
        .genre_repo
        .delete(genre.id)
        .await
        .expect("delete genre");

    let book = state
        .book_repo
        .find_by_id(book.id)
        .await
        .expect("find book")
        .expect("book should survive the genre delete");
    assert_eq!(book.genre_id, None);
    assert_eq!(book.title, "Foundation");
}

#[tokio::test]
async fn deleting_language_clears_book_references() {
    let state = setup_state().await;

    let language = state
        .language_repo
        .create("English".to_string())
        .await
        .expect("create language");
    let book = create_book(&state, "Foundation", None, Some(language.id)).await;

    state
        .language_repo
        .delete(language.id)
        .await
        .expect("delete language");

    let book = state
        .book_repo
        .find_by_id(book.id)
        .await
        .expect("find book")
        .expect("book should survive the language delete");
    assert_eq!(book.language_id, None);
}

#[tokio::test]
async fn deleting_book_with_instances_is_blocked() {
    let state = setup_state().await;

    let book = create_book(&state, "Dune", None, None).await;

    let first = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(book.id),
            imprint: "Ace Books, 1990".to_string(),
            due_back: None,
        })
        .await
        .expect("create instance");
    let second = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(book.id),
            imprint: "Hodder, 2015".to_string(),
            due_back: Some("2026-09-01".to_string()),
        })
        .await
        .expect("create instance");

    let err = state.book_repo.delete(book.id).await.unwrap_err();
    match err {
        DomainError::Conflict(msg) => assert!(msg.contains("2 instance(s)"), "message: {msg}"),
        other => panic!("expected conflict, got: {other}"),
    }

    // The book is still there.
    assert!(
        state
            .book_repo
            .find_by_id(book.id)
            .await
            .expect("find book")
            .is_some()
    );

    // Removing the instances unblocks the delete.
    state
        .instance_repo
        .delete(first.id)
        .await
        .expect("delete instance");
    state
        .instance_repo
        .delete(second.id)
        .await
        .expect("delete instance");

    state
        .book_repo
        .delete(book.id)
        .await
        .expect("delete should succeed once no instances remain");
    assert!(
        state
            .book_repo
            .find_by_id(book.id)
            .await
            .expect("find book")
            .is_none()
    );
}

#[tokio::test]
async fn reassigning_instances_also_unblocks_the_book() {
    let state = setup_state().await;

    let first = create_book(&state, "Dune", None, None).await;
    let second = create_book(&state, "Dune Messiah", None, None).await;

    let instance = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(first.id),
            imprint: "Ace Books, 1990".to_string(),
            due_back: None,
        })
        .await
        .expect("create instance");

    state.book_repo.delete(first.id).await.unwrap_err();

    state
        .instance_repo
        .update(
            instance.id,
            UpdateBookInstanceInput {
                book_id: Some(Some(second.id)),
                ..Default::default()
            },
        )
        .await
        .expect("reassign instance");

    state
        .book_repo
        .delete(first.id)
        .await
        .expect("delete should succeed after reassignment");
}

#[tokio::test]
async fn book_round_trip_preserves_fields_and_null_references() {
    let state = setup_state().await;

    let created = state
        .book_repo
        .create(CreateBookInput {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            summary: "Melange, sandworms, and the fall of an empire.".to_string(),
            isbn: "9780441013593".to_string(),
            genre_id: None,
            language_id: None,
        })
        .await
        .expect("create book");

    let book = state
        .book_repo
        .find_by_id(created.id)
        .await
        .expect("find book")
        .expect("book present");

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.isbn, "9780441013593");
    assert_eq!(book.summary, "Melange, sandworms, and the fall of an empire.");
    assert_eq!(book.genre_id, None);
    assert_eq!(book.language_id, None);
}

#[tokio::test]
async fn declared_column_widths_are_enforced() {
    let state = setup_state().await;

    assert_validation(state.genre_repo.create("g".repeat(201)).await.unwrap_err());
    assert_validation(
        state
            .language_repo
            .create("l".repeat(101))
            .await
            .unwrap_err(),
    );
    assert_validation(
        state
            .author_repo
            .create(CreateAuthorInput {
                first_name: "f".repeat(101),
                last_name: "Herbert".to_string(),
            })
            .await
            .unwrap_err(),
    );
    assert_validation(
        state
            .book_repo
            .create(CreateBookInput {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                summary: String::new(),
                isbn: "9".repeat(14),
                genre_id: None,
                language_id: None,
            })
            .await
            .unwrap_err(),
    );
    assert_validation(
        state
            .instance_repo
            .create(CreateBookInstanceInput {
                book_id: None,
                imprint: "i".repeat(201),
                due_back: None,
            })
            .await
            .unwrap_err(),
    );

    // Exactly at the bound is fine.
    state
        .genre_repo
        .create("g".repeat(200))
        .await
        .expect("200 chars should pass");
}

#[tokio::test]
async fn due_back_must_be_an_iso_date() {
    let state = setup_state().await;
    let book = create_book(&state, "Dune", None, None).await;

    let err = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(book.id),
            imprint: "Ace Books".to_string(),
            due_back: Some("June 1st".to_string()),
        })
        .await
        .unwrap_err();
    assert_validation(err);

    let instance = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(book.id),
            imprint: "Ace Books".to_string(),
            due_back: Some("2026-09-01".to_string()),
        })
        .await
        .expect("valid date accepted");
    assert_eq!(instance.due_back.as_deref(), Some("2026-09-01"));
}

#[tokio::test]
async fn references_to_missing_rows_are_rejected() {
    let state = setup_state().await;

    let err = state
        .book_repo
        .create(CreateBookInput {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            summary: String::new(),
            isbn: "9780441013593".to_string(),
            genre_id: Some(42),
            language_id: None,
        })
        .await
        .unwrap_err();
    assert_validation(err);

    let err = state
        .instance_repo
        .create(CreateBookInstanceInput {
            book_id: Some(42),
            imprint: "Ace Books".to_string(),
            due_back: None,
        })
        .await
        .unwrap_err();
    assert_validation(err);
}

#[tokio::test]
async fn book_author_stays_free_text() {
    let state = setup_state().await;

    // An author record and a book naming the same person are unrelated rows.
    let author = state
        .author_repo
        .create(CreateAuthorInput {
            first_name: "Frank".to_string(),
            last_name: "Herbert".to_string(),
        })
        .await
        .expect("create author");

    let book = create_book(&state, "Dune", None, None).await;

    state
        .author_repo
        .delete(author.id)
        .await
        .expect("delete author");

    let book = state
        .book_repo
        .find_by_id(book.id)
        .await
        .expect("find book")
        .expect("book untouched by author delete");
    assert_eq!(book.author, "Test Author");
}
