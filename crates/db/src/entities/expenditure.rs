//! `SeaORM` Entity for expenditure table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenditure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub doe_form_id_fk: i32,
    pub expenditure_entry_type_id_fk: i32,
    pub expenditure_fund_type_id_fk: i32,
    pub value: Option<Decimal>,
    pub date_created: DateTime,
    pub date_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doe_form::Entity",
        from = "Column::DoeFormIdFk",
        to = "super::doe_form::Column::Id"
    )]
    DoeForm,
    #[sea_orm(
        belongs_to = "super::expenditure_entry_type::Entity",
        from = "Column::ExpenditureEntryTypeIdFk",
        to = "super::expenditure_entry_type::Column::Id"
    )]
    EntryType,
    #[sea_orm(
        belongs_to = "super::expenditure_fund_type::Entity",
        from = "Column::ExpenditureFundTypeIdFk",
        to = "super::expenditure_fund_type::Column::Id"
    )]
    FundType,
}

impl Related<super::doe_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoeForm.def()
    }
}

impl Related<super::expenditure_entry_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryType.def()
    }
}

impl Related<super::expenditure_fund_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FundType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
