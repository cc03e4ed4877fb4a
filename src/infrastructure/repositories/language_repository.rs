//! SeaORM implementation of LanguageRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::ensure_max_len;
use crate::domain::{DomainError, Language, LanguageRepository};
use crate::models::book;
use crate::models::language::{self, ActiveModel, Entity as LanguageEntity, NAME_MAX_LEN};

/// SeaORM-based implementation of LanguageRepository
pub struct SeaOrmLanguageRepository {
    db: DatabaseConnection,
}

impl SeaOrmLanguageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: language::Model) -> Language {
    Language {
        id: model.id,
        name: model.name,
    }
}

#[async_trait]
impl LanguageRepository for SeaOrmLanguageRepository {
    async fn find_all(&self) -> Result<Vec<Language>, DomainError> {
        let languages = LanguageEntity::find().all(&self.db).await?;

        Ok(languages.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Language>, DomainError> {
        let language = LanguageEntity::find_by_id(id).one(&self.db).await?;

        Ok(language.map(to_domain))
    }

    async fn create(&self, name: String) -> Result<Language, DomainError> {
        ensure_max_len("name", &name, NAME_MAX_LEN)?;

        let language = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let result = language.insert(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn rename(&self, id: i32, name: String) -> Result<Language, DomainError> {
        ensure_max_len("name", &name, NAME_MAX_LEN)?;

        let existing = LanguageEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);

        let result = active.update(&self.db).await?;

        Ok(to_domain(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Dependent books survive with the reference cleared.
        book::Entity::update_many()
            .col_expr(book::Column::LanguageId, Expr::value(Option::<i32>::None))
            .filter(book::Column::LanguageId.eq(id))
            .exec(&txn)
            .await?;

        let result = LanguageEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
