//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::ensure_max_len;
use crate::domain::{Author, AuthorRepository, CreateAuthorInput, DomainError, UpdateAuthorInput};
use crate::models::author::{
    self, ActiveModel, Entity as AuthorEntity, FIRST_NAME_MAX_LEN, LAST_NAME_MAX_LEN,
};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: author::Model) -> Author {
    Author {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find().all(&self.db).await?;

        Ok(authors.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id).one(&self.db).await?;

        Ok(author.map(to_domain))
    }

    async fn create(&self, input: CreateAuthorInput) -> Result<Author, DomainError> {
        ensure_max_len("first_name", &input.first_name, FIRST_NAME_MAX_LEN)?;
        ensure_max_len("last_name", &input.last_name, LAST_NAME_MAX_LEN)?;

        let author = ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            ..Default::default()
        };

        let result = author.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn update(&self, id: i32, input: UpdateAuthorInput) -> Result<Author, DomainError> {
        let existing = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(first_name) = input.first_name {
            ensure_max_len("first_name", &first_name, FIRST_NAME_MAX_LEN)?;
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            ensure_max_len("last_name", &last_name, LAST_NAME_MAX_LEN)?;
            active.last_name = Set(last_name);
        }

        let result = active.update(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // Nothing references authors; book.author is free text by design.
        let result = AuthorEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
