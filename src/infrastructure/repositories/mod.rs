//! Repository implementations using SeaORM

pub mod author_repository;
pub mod book_instance_repository;
pub mod book_repository;
pub mod genre_repository;
pub mod language_repository;

pub use author_repository::SeaOrmAuthorRepository;
pub use book_instance_repository::SeaOrmBookInstanceRepository;
pub use book_repository::SeaOrmBookRepository;
pub use genre_repository::SeaOrmGenreRepository;
pub use language_repository::SeaOrmLanguageRepository;

use chrono::NaiveDate;

use crate::domain::DomainError;

/// Rejects values longer than the column's declared width. SQLite does not
/// enforce VARCHAR bounds, so the check lives here at the persistence
/// boundary.
fn ensure_max_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// `due_back` is stored as an ISO-8601 date string (`YYYY-MM-DD`).
fn ensure_iso_date(field: &str, value: &str) -> Result<(), DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        DomainError::Validation(format!("{field} `{value}` is not a valid ISO date"))
    })?;
    Ok(())
}
