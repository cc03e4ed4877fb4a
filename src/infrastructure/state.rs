//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    AuthorRepository, BookInstanceRepository, BookRepository, GenreRepository, LanguageRepository,
};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookInstanceRepository, SeaOrmBookRepository,
    SeaOrmGenreRepository, SeaOrmLanguageRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub genre_repo: Arc<dyn GenreRepository>,
    pub language_repo: Arc<dyn LanguageRepository>,
    pub author_repo: Arc<dyn AuthorRepository>,
    pub book_repo: Arc<dyn BookRepository>,
    pub instance_repo: Arc<dyn BookInstanceRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let genre_repo = Arc::new(SeaOrmGenreRepository::new(db.clone()));
        let language_repo = Arc::new(SeaOrmLanguageRepository::new(db.clone()));
        let author_repo = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let instance_repo = Arc::new(SeaOrmBookInstanceRepository::new(db.clone()));

        Self {
            db,
            genre_repo,
            language_repo,
            author_repo,
            book_repo,
            instance_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
