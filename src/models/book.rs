use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 200;
pub const AUTHOR_MAX_LEN: usize = 100;
pub const ISBN_MAX_LEN: usize = 13;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Free-text author name; not a foreign key into the `author` table.
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id",
        on_delete = "SetNull"
    )]
    Genre,
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id",
        on_delete = "SetNull"
    )]
    Language,
    #[sea_orm(has_many = "super::book_instance::Entity")]
    BookInstances,
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::book_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookInstances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
