//! SeaORM implementation of GenreRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::ensure_max_len;
use crate::domain::{DomainError, Genre, GenreRepository};
use crate::models::book;
use crate::models::genre::{self, ActiveModel, Entity as GenreEntity, NAME_MAX_LEN};

const DUPLICATE_NAME: &str = "Genre already exists (case insensitive match)";

/// SeaORM-based implementation of GenreRepository
pub struct SeaOrmGenreRepository {
    db: DatabaseConnection,
}

impl SeaOrmGenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Normalized name lookup backing the case-insensitive uniqueness rule.
    /// `exclude_id` lets a genre keep (or re-case) its own name on rename.
    async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DomainError> {
        let mut query = GenreEntity::find().filter(
            Expr::expr(Func::lower(Expr::col(genre::Column::Name))).eq(name.to_lowercase()),
        );

        if let Some(id) = exclude_id {
            query = query.filter(genre::Column::Id.ne(id));
        }

        Ok(query.one(&self.db).await?.is_some())
    }
}

fn to_domain(model: genre::Model) -> Genre {
    Genre {
        id: model.id,
        name: model.name,
    }
}

/// A constraint failure here means a concurrent writer won the race the
/// pre-insert check did not see; the NOCASE unique index is the backstop.
fn conflict_on_unique(err: sea_orm::DbErr) -> DomainError {
    if err.to_string().contains("UNIQUE constraint failed") {
        DomainError::Conflict(DUPLICATE_NAME.to_string())
    } else {
        DomainError::Database(err.to_string())
    }
}

#[async_trait]
impl GenreRepository for SeaOrmGenreRepository {
    async fn find_all(&self) -> Result<Vec<Genre>, DomainError> {
        let genres = GenreEntity::find().all(&self.db).await?;

        Ok(genres.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DomainError> {
        let genre = GenreEntity::find_by_id(id).one(&self.db).await?;

        Ok(genre.map(to_domain))
    }

    async fn create(&self, name: String) -> Result<Genre, DomainError> {
        ensure_max_len("name", &name, NAME_MAX_LEN)?;

        if self.name_taken(&name, None).await? {
            return Err(DomainError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let genre = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let result = genre.insert(&self.db).await.map_err(conflict_on_unique)?;

        Ok(to_domain(result))
    }

    async fn rename(&self, id: i32, name: String) -> Result<Genre, DomainError> {
        ensure_max_len("name", &name, NAME_MAX_LEN)?;

        if self.name_taken(&name, Some(id)).await? {
            return Err(DomainError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let existing = GenreEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);

        let result = active.update(&self.db).await.map_err(conflict_on_unique)?;

        Ok(to_domain(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Dependent books survive with the reference cleared.
        book::Entity::update_many()
            .col_expr(book::Column::GenreId, Expr::value(Option::<i32>::None))
            .filter(book::Column::GenreId.eq(id))
            .exec(&txn)
            .await?;

        let result = GenreEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
