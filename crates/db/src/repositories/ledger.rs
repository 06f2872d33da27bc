//! Per-domain entity bindings.
//!
//! Balance sheets, revenues and expenditures are stored in parallel table
//! sets with identical shapes but distinct column names. `FinanceLedger`
//! binds one such set so the repositories can be written once, generically,
//! instead of three times.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use schoolfin_core::{
    FinanceDomain,
    finance::{EntryType, FundType, LineRecord},
    taxonomy::{Category, SuperCategory},
};

use crate::entities::{
    balance_entry_category_type, balance_entry_super_category_type, balance_entry_type,
    balance_fund_type, balance_sheet, expenditure, expenditure_entry_category_type,
    expenditure_entry_super_category_type, expenditure_entry_type, expenditure_fund_type,
    revenue, revenue_entry_category_type, revenue_entry_super_category_type, revenue_entry_type,
    revenue_fund_type,
};

/// The table set of one financial domain.
pub trait FinanceLedger {
    /// Domain served by this table set.
    const DOMAIN: FinanceDomain;

    /// Monetary lines owned by a DOE form.
    type Line: EntityTrait;
    /// Entry types referenced by lines.
    type EntryType: EntityTrait;
    /// Categories referenced by entry types.
    type Category: EntityTrait;
    /// Super categories referenced by categories.
    type SuperCategory: EntityTrait;
    /// Fund types referenced by lines.
    type FundType: EntityTrait;

    /// Primary key of the line table.
    fn line_key() -> <Self::Line as EntityTrait>::Column;
    /// Foreign key from a line to its DOE form.
    fn line_form_column() -> <Self::Line as EntityTrait>::Column;
    /// Primary key of the entry type table.
    fn entry_type_key() -> <Self::EntryType as EntityTrait>::Column;
    /// Primary key of the category table.
    fn category_key() -> <Self::Category as EntityTrait>::Column;
    /// Primary key of the super category table.
    fn super_category_key() -> <Self::SuperCategory as EntityTrait>::Column;
    /// Primary key of the fund type table.
    fn fund_type_key() -> <Self::FundType as EntityTrait>::Column;

    /// Maps a line row.
    fn line_record(model: <Self::Line as EntityTrait>::Model) -> LineRecord;
    /// Maps an entry type row.
    fn entry_type(model: <Self::EntryType as EntityTrait>::Model) -> EntryType;
    /// Maps a category row.
    fn category(model: <Self::Category as EntityTrait>::Model) -> Category;
    /// Maps a super category row.
    fn super_category(model: <Self::SuperCategory as EntityTrait>::Model) -> SuperCategory;
    /// Maps a fund type row.
    fn fund_type(model: <Self::FundType as EntityTrait>::Model) -> FundType;
}

/// Fetches the rows of `E` whose key is in `keys`, ordered by key.
///
/// An empty key list short-circuits without touching the database.
pub(crate) async fn find_by_keys<E, C>(
    db: &C,
    key: E::Column,
    keys: Vec<i32>,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    E::find()
        .filter(key.is_in(keys))
        .order_by_asc(key)
        .all(db)
        .await
}

/// Balance sheet tables.
#[derive(Debug, Clone, Copy)]
pub struct BalanceLedger;

impl FinanceLedger for BalanceLedger {
    const DOMAIN: FinanceDomain = FinanceDomain::Balance;

    type Line = balance_sheet::Entity;
    type EntryType = balance_entry_type::Entity;
    type Category = balance_entry_category_type::Entity;
    type SuperCategory = balance_entry_super_category_type::Entity;
    type FundType = balance_fund_type::Entity;

    fn line_key() -> balance_sheet::Column {
        balance_sheet::Column::Id
    }

    fn line_form_column() -> balance_sheet::Column {
        balance_sheet::Column::DoeFormIdFk
    }

    fn entry_type_key() -> balance_entry_type::Column {
        balance_entry_type::Column::Id
    }

    fn category_key() -> balance_entry_category_type::Column {
        balance_entry_category_type::Column::Id
    }

    fn super_category_key() -> balance_entry_super_category_type::Column {
        balance_entry_super_category_type::Column::Id
    }

    fn fund_type_key() -> balance_fund_type::Column {
        balance_fund_type::Column::Id
    }

    fn line_record(model: balance_sheet::Model) -> LineRecord {
        LineRecord {
            id: model.id,
            value: model.value,
            entry_type_id: model.balance_entry_type_id_fk,
            fund_type_id: model.balance_fund_type_id_fk,
        }
    }

    fn entry_type(model: balance_entry_type::Model) -> EntryType {
        EntryType {
            id: model.id,
            name: model.name,
            account_no: model.account_no,
            page: model.page,
            line: model.line,
            category_id: model.balance_entry_category_type_id_fk,
        }
    }

    fn category(model: balance_entry_category_type::Model) -> Category {
        Category {
            id: model.id,
            name: model.name,
            super_category_id: model.balance_entry_super_category_id_fk,
        }
    }

    fn super_category(model: balance_entry_super_category_type::Model) -> SuperCategory {
        SuperCategory {
            id: model.id,
            name: model.name,
        }
    }

    fn fund_type(model: balance_fund_type::Model) -> FundType {
        FundType {
            id: model.id,
            state_id: model.state_id,
            state_name: model.state_name,
        }
    }
}

/// Revenue tables.
#[derive(Debug, Clone, Copy)]
pub struct RevenueLedger;

impl FinanceLedger for RevenueLedger {
    const DOMAIN: FinanceDomain = FinanceDomain::Revenue;

    type Line = revenue::Entity;
    type EntryType = revenue_entry_type::Entity;
    type Category = revenue_entry_category_type::Entity;
    type SuperCategory = revenue_entry_super_category_type::Entity;
    type FundType = revenue_fund_type::Entity;

    fn line_key() -> revenue::Column {
        revenue::Column::Id
    }

    fn line_form_column() -> revenue::Column {
        revenue::Column::DoeFormIdFk
    }

    fn entry_type_key() -> revenue_entry_type::Column {
        revenue_entry_type::Column::Id
    }

    fn category_key() -> revenue_entry_category_type::Column {
        revenue_entry_category_type::Column::Id
    }

    fn super_category_key() -> revenue_entry_super_category_type::Column {
        revenue_entry_super_category_type::Column::Id
    }

    fn fund_type_key() -> revenue_fund_type::Column {
        revenue_fund_type::Column::Id
    }

    fn line_record(model: revenue::Model) -> LineRecord {
        LineRecord {
            id: model.id,
            value: model.value,
            entry_type_id: model.revenue_entry_type_id_fk,
            fund_type_id: model.revenue_fund_type_id_fk,
        }
    }

    fn entry_type(model: revenue_entry_type::Model) -> EntryType {
        EntryType {
            id: model.id,
            name: model.name,
            account_no: model.account_no,
            page: model.page,
            line: model.line,
            category_id: model.revenue_entry_category_type_id_fk,
        }
    }

    fn category(model: revenue_entry_category_type::Model) -> Category {
        Category {
            id: model.id,
            name: model.name,
            super_category_id: model.revenue_entry_super_category_id_fk,
        }
    }

    fn super_category(model: revenue_entry_super_category_type::Model) -> SuperCategory {
        SuperCategory {
            id: model.id,
            name: model.name,
        }
    }

    fn fund_type(model: revenue_fund_type::Model) -> FundType {
        FundType {
            id: model.id,
            state_id: model.state_id,
            state_name: model.state_name,
        }
    }
}

/// Expenditure tables.
#[derive(Debug, Clone, Copy)]
pub struct ExpenditureLedger;

impl FinanceLedger for ExpenditureLedger {
    const DOMAIN: FinanceDomain = FinanceDomain::Expenditure;

    type Line = expenditure::Entity;
    type EntryType = expenditure_entry_type::Entity;
    type Category = expenditure_entry_category_type::Entity;
    type SuperCategory = expenditure_entry_super_category_type::Entity;
    type FundType = expenditure_fund_type::Entity;

    fn line_key() -> expenditure::Column {
        expenditure::Column::Id
    }

    fn line_form_column() -> expenditure::Column {
        expenditure::Column::DoeFormIdFk
    }

    fn entry_type_key() -> expenditure_entry_type::Column {
        expenditure_entry_type::Column::Id
    }

    fn category_key() -> expenditure_entry_category_type::Column {
        expenditure_entry_category_type::Column::Id
    }

    fn super_category_key() -> expenditure_entry_super_category_type::Column {
        expenditure_entry_super_category_type::Column::Id
    }

    fn fund_type_key() -> expenditure_fund_type::Column {
        expenditure_fund_type::Column::Id
    }

    fn line_record(model: expenditure::Model) -> LineRecord {
        LineRecord {
            id: model.id,
            value: model.value,
            entry_type_id: model.expenditure_entry_type_id_fk,
            fund_type_id: model.expenditure_fund_type_id_fk,
        }
    }

    fn entry_type(model: expenditure_entry_type::Model) -> EntryType {
        EntryType {
            id: model.id,
            name: model.name,
            account_no: model.account_no,
            page: model.page,
            line: model.line,
            category_id: model.expenditure_entry_category_type_id_fk,
        }
    }

    fn category(model: expenditure_entry_category_type::Model) -> Category {
        Category {
            id: model.id,
            name: model.name,
            super_category_id: model.expenditure_entry_super_category_id_fk,
        }
    }

    fn super_category(model: expenditure_entry_super_category_type::Model) -> SuperCategory {
        SuperCategory {
            id: model.id,
            name: model.name,
        }
    }

    fn fund_type(model: expenditure_fund_type::Model) -> FundType {
        FundType {
            id: model.id,
            state_id: model.state_id,
            state_name: model.state_name,
        }
    }
}
