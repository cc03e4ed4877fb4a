//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// Genre data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Canonical detail URL for this genre.
    pub fn detail_path(&self) -> String {
        format!("/genres/{}", self.id)
    }
}

/// Language data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

/// Author data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Book data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
}

/// Book instance data for API responses
#[derive(Debug, Clone, serde::Serialize)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<String>,
}

/// Filter criteria for book queries
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
}

/// Input for creating a book
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookInput {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
}

/// Input for updating a book. `None` leaves a field unchanged; for the
/// nullable references, `Some(None)` clears the reference.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub isbn: Option<String>,
    pub genre_id: Option<Option<i32>>,
    pub language_id: Option<Option<i32>>,
}

/// Input for creating an author
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateAuthorInput {
    pub first_name: String,
    pub last_name: String,
}

/// Input for updating an author
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateAuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Input for creating a book instance
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookInstanceInput {
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<String>,
}

/// Input for updating a book instance
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateBookInstanceInput {
    pub book_id: Option<Option<i32>>,
    pub imprint: Option<String>,
    pub due_back: Option<Option<String>>,
}

/// Repository trait for Genre entity
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find all genres
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError>;

    /// Find a genre by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DomainError>;

    /// Create a new genre. Fails with `Conflict` when the name collides
    /// case-insensitively with an existing genre.
    async fn create(&self, name: String) -> Result<Genre, DomainError>;

    /// Rename a genre, under the same uniqueness rule as `create`.
    async fn rename(&self, id: i32, name: String) -> Result<Genre, DomainError>;

    /// Delete a genre. Books referencing it survive with the reference
    /// cleared.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Language entity
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Language>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Language>, DomainError>;

    async fn create(&self, name: String) -> Result<Language, DomainError>;

    async fn rename(&self, id: i32, name: String) -> Result<Language, DomainError>;

    /// Delete a language. Books referencing it survive with the reference
    /// cleared.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    async fn create(&self, input: CreateAuthorInput) -> Result<Author, DomainError>;

    async fn update(&self, id: i32, input: UpdateAuthorInput) -> Result<Author, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books matching the filter criteria
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    async fn create(&self, input: CreateBookInput) -> Result<Book, DomainError>;

    async fn update(&self, id: i32, input: UpdateBookInput) -> Result<Book, DomainError>;

    /// Delete a book. Fails with `Conflict` while any instance still
    /// references it.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for BookInstance entity
#[async_trait]
pub trait BookInstanceRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<BookInstance>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<BookInstance>, DomainError>;

    /// Find instances of a specific book
    async fn find_by_book_id(&self, book_id: i32) -> Result<Vec<BookInstance>, DomainError>;

    async fn create(&self, input: CreateBookInstanceInput) -> Result<BookInstance, DomainError>;

    async fn update(
        &self,
        id: i32,
        input: UpdateBookInstanceInput,
    ) -> Result<BookInstance, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
