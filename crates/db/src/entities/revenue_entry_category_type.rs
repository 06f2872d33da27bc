//! `SeaORM` Entity for revenue_entry_category_type table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "revenue_entry_category_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub revenue_entry_super_category_id_fk: i32,
    pub date_created: DateTime,
    pub date_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::revenue_entry_super_category_type::Entity",
        from = "Column::RevenueEntrySuperCategoryIdFk",
        to = "super::revenue_entry_super_category_type::Column::Id"
    )]
    SuperCategory,
}

impl Related<super::revenue_entry_super_category_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SuperCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
