//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};

use super::ensure_max_len;
use crate::domain::{
    Book, BookFilter, BookRepository, CreateBookInput, DomainError, UpdateBookInput,
};
use crate::models::book::{
    self, ActiveModel, AUTHOR_MAX_LEN, Entity as BookEntity, ISBN_MAX_LEN, TITLE_MAX_LEN,
};
use crate::models::{book_instance, genre, language};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts and updates must not point at rows that do not exist; SQLite
    /// only rejects these itself when foreign keys are enabled on the
    /// connection.
    async fn ensure_genre_exists(&self, id: i32) -> Result<(), DomainError> {
        if genre::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(DomainError::Validation(format!("genre {id} does not exist")));
        }
        Ok(())
    }

    async fn ensure_language_exists(&self, id: i32) -> Result<(), DomainError> {
        if language::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "language {id} does not exist"
            )));
        }
        Ok(())
    }
}

fn to_domain(model: book::Model) -> Book {
    Book {
        id: model.id,
        title: model.title,
        author: model.author,
        summary: model.summary,
        isbn: model.isbn,
        genre_id: model.genre_id,
        language_id: model.language_id,
    }
}

fn validate_fields(title: &str, author: &str, isbn: &str) -> Result<(), DomainError> {
    ensure_max_len("title", title, TITLE_MAX_LEN)?;
    ensure_max_len("author", author, AUTHOR_MAX_LEN)?;
    ensure_max_len("isbn", isbn, ISBN_MAX_LEN)?;
    Ok(())
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut condition = Condition::all();

        if let Some(title) = filter.title
            && !title.is_empty()
        {
            condition = condition.add(book::Column::Title.contains(&title));
        }

        if let Some(author) = filter.author
            && !author.is_empty()
        {
            condition = condition.add(book::Column::Author.contains(&author));
        }

        if let Some(genre_id) = filter.genre_id {
            condition = condition.add(book::Column::GenreId.eq(genre_id));
        }

        if let Some(language_id) = filter.language_id {
            condition = condition.add(book::Column::LanguageId.eq(language_id));
        }

        let books = BookEntity::find().filter(condition).all(&self.db).await?;

        Ok(books.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;

        Ok(book.map(to_domain))
    }

    async fn create(&self, input: CreateBookInput) -> Result<Book, DomainError> {
        validate_fields(&input.title, &input.author, &input.isbn)?;

        if let Some(genre_id) = input.genre_id {
            self.ensure_genre_exists(genre_id).await?;
        }
        if let Some(language_id) = input.language_id {
            self.ensure_language_exists(language_id).await?;
        }

        let book = ActiveModel {
            title: Set(input.title),
            author: Set(input.author),
            summary: Set(input.summary),
            isbn: Set(input.isbn),
            genre_id: Set(input.genre_id),
            language_id: Set(input.language_id),
            ..Default::default()
        };

        let result = book.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn update(&self, id: i32, input: UpdateBookInput) -> Result<Book, DomainError> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(title) = input.title {
            ensure_max_len("title", &title, TITLE_MAX_LEN)?;
            active.title = Set(title);
        }
        if let Some(author) = input.author {
            ensure_max_len("author", &author, AUTHOR_MAX_LEN)?;
            active.author = Set(author);
        }
        if let Some(summary) = input.summary {
            active.summary = Set(summary);
        }
        if let Some(isbn) = input.isbn {
            ensure_max_len("isbn", &isbn, ISBN_MAX_LEN)?;
            active.isbn = Set(isbn);
        }
        if let Some(genre_id) = input.genre_id {
            if let Some(id) = genre_id {
                self.ensure_genre_exists(id).await?;
            }
            active.genre_id = Set(genre_id);
        }
        if let Some(language_id) = input.language_id {
            if let Some(id) = language_id {
                self.ensure_language_exists(id).await?;
            }
            active.language_id = Set(language_id);
        }

        let result = active.update(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Restricted delete: the book stays while instances reference it.
        let instances = book_instance::Entity::find()
            .filter(book_instance::Column::BookId.eq(id))
            .count(&txn)
            .await?;

        if instances > 0 {
            return Err(DomainError::Conflict(format!(
                "Book still has {instances} instance(s); delete or reassign them before deleting the book"
            )));
        }

        let result = BookEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
