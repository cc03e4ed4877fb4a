use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const FIRST_NAME_MAX_LEN: usize = 100;
pub const LAST_NAME_MAX_LEN: usize = 100;

/// Author records stand alone: `book.author` is a plain text column, not a
/// reference to this table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
