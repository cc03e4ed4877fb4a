//! SeaORM implementation of BookInstanceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::{ensure_iso_date, ensure_max_len};
use crate::domain::{
    BookInstance, BookInstanceRepository, CreateBookInstanceInput, DomainError,
    UpdateBookInstanceInput,
};
use crate::models::book;
use crate::models::book_instance::{
    self, ActiveModel, Entity as BookInstanceEntity, IMPRINT_MAX_LEN,
};

/// SeaORM-based implementation of BookInstanceRepository
pub struct SeaOrmBookInstanceRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookInstanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_book_exists(&self, id: i32) -> Result<(), DomainError> {
        if book::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(DomainError::Validation(format!("book {id} does not exist")));
        }
        Ok(())
    }
}

fn to_domain(model: book_instance::Model) -> BookInstance {
    BookInstance {
        id: model.id,
        book_id: model.book_id,
        imprint: model.imprint,
        due_back: model.due_back,
    }
}

#[async_trait]
impl BookInstanceRepository for SeaOrmBookInstanceRepository {
    async fn find_all(&self) -> Result<Vec<BookInstance>, DomainError> {
        let instances = BookInstanceEntity::find().all(&self.db).await?;

        Ok(instances.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BookInstance>, DomainError> {
        let instance = BookInstanceEntity::find_by_id(id).one(&self.db).await?;

        Ok(instance.map(to_domain))
    }

    async fn find_by_book_id(&self, book_id: i32) -> Result<Vec<BookInstance>, DomainError> {
        let instances = BookInstanceEntity::find()
            .filter(book_instance::Column::BookId.eq(book_id))
            .all(&self.db)
            .await?;

        Ok(instances.into_iter().map(to_domain).collect())
    }

    async fn create(&self, input: CreateBookInstanceInput) -> Result<BookInstance, DomainError> {
        ensure_max_len("imprint", &input.imprint, IMPRINT_MAX_LEN)?;

        if let Some(due_back) = &input.due_back {
            ensure_iso_date("due_back", due_back)?;
        }
        if let Some(book_id) = input.book_id {
            self.ensure_book_exists(book_id).await?;
        }

        let instance = ActiveModel {
            book_id: Set(input.book_id),
            imprint: Set(input.imprint),
            due_back: Set(input.due_back),
            ..Default::default()
        };

        let result = instance.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateBookInstanceInput,
    ) -> Result<BookInstance, DomainError> {
        let existing = BookInstanceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(book_id) = input.book_id {
            if let Some(id) = book_id {
                self.ensure_book_exists(id).await?;
            }
            active.book_id = Set(book_id);
        }
        if let Some(imprint) = input.imprint {
            ensure_max_len("imprint", &imprint, IMPRINT_MAX_LEN)?;
            active.imprint = Set(imprint);
        }
        if let Some(due_back) = input.due_back {
            if let Some(date) = &due_back {
                ensure_iso_date("due_back", date)?;
            }
            active.due_back = Set(due_back);
        }

        let result = active.update(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BookInstanceEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
