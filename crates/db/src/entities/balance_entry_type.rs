//! `SeaORM` Entity for balance_entry_type table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "balance_entry_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub account_no: String,
    pub page: Option<String>,
    pub line: Option<String>,
    pub balance_entry_category_type_id_fk: i32,
    pub date_created: DateTime,
    pub date_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::balance_entry_category_type::Entity",
        from = "Column::BalanceEntryCategoryTypeIdFk",
        to = "super::balance_entry_category_type::Column::Id"
    )]
    Category,
}

impl Related<super::balance_entry_category_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
