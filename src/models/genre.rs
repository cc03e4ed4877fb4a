use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Column width for `name`. SQLite does not enforce VARCHAR bounds, so the
/// repository layer checks this before every write.
pub const NAME_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genre")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique under case-insensitive comparison (NOCASE index).
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
