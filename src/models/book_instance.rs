use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const IMPRINT_MAX_LEN: usize = 200;

/// A physical copy of a book. The referenced book cannot be deleted while
/// any of its instances remain.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookinstance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_id: Option<i32>,
    pub imprint: String,
    /// ISO-8601 date (`YYYY-MM-DD`), or NULL when the copy is on the shelf.
    pub due_back: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_delete = "Restrict"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
