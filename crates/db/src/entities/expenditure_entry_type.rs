//! `SeaORM` Entity for expenditure_entry_type table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenditure_entry_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub account_no: String,
    pub page: Option<String>,
    pub line: Option<String>,
    pub expenditure_entry_category_type_id_fk: i32,
    pub date_created: DateTime,
    pub date_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expenditure_entry_category_type::Entity",
        from = "Column::ExpenditureEntryCategoryTypeIdFk",
        to = "super::expenditure_entry_category_type::Column::Id"
    )]
    Category,
}

impl Related<super::expenditure_entry_category_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
