//! Taxonomy repository for entry types and fund types.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use schoolfin_core::{
    finance::FundType,
    lookup::{index_by_key, referenced_keys},
    taxonomy::{AllEntryTypes, AllFundTypes, EntryTypeNode, TaxonomyService},
};
use tracing::debug;

use super::ledger::{BalanceLedger, ExpenditureLedger, FinanceLedger, RevenueLedger, find_by_keys};

/// Taxonomy repository for listing entry types and fund types.
#[derive(Debug)]
pub struct TaxonomyRepository {
    db: Arc<DatabaseConnection>,
}

impl TaxonomyRepository {
    /// Creates a new taxonomy repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists every entry type of one domain with its category ancestry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn entry_types<L: FinanceLedger>(&self) -> Result<Vec<EntryTypeNode>, DbErr> {
        let entry_types: Vec<_> = L::EntryType::find()
            .order_by_asc(L::entry_type_key())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(L::entry_type)
            .collect();

        let category_ids = referenced_keys(entry_types.iter().map(|et| et.category_id));
        let categories: Vec<_> =
            find_by_keys::<L::Category, _>(self.db.as_ref(), L::category_key(), category_ids)
                .await?
                .into_iter()
                .map(L::category)
                .collect();

        let super_category_ids = referenced_keys(categories.iter().map(|c| c.super_category_id));
        let super_categories = find_by_keys::<L::SuperCategory, _>(
            self.db.as_ref(),
            L::super_category_key(),
            super_category_ids,
        )
        .await?
        .into_iter()
        .map(L::super_category);

        debug!(
            domain = %L::DOMAIN,
            entry_types = entry_types.len(),
            "Loaded entry types"
        );

        Ok(TaxonomyService::build_entry_types(
            entry_types,
            &index_by_key(categories),
            &index_by_key(super_categories),
        ))
    }

    /// Lists every fund type of one domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn fund_types<L: FinanceLedger>(&self) -> Result<Vec<FundType>, DbErr> {
        let fund_types = L::FundType::find()
            .order_by_asc(L::fund_type_key())
            .all(self.db.as_ref())
            .await?;

        Ok(fund_types.into_iter().map(L::fund_type).collect())
    }

    /// Lists the entry types of all three domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all_entry_types(&self) -> Result<AllEntryTypes, DbErr> {
        Ok(AllEntryTypes {
            balance_entry_types: self.entry_types::<BalanceLedger>().await?,
            revenue_entry_types: self.entry_types::<RevenueLedger>().await?,
            expenditure_entry_types: self.entry_types::<ExpenditureLedger>().await?,
        })
    }

    /// Lists the fund types of all three domains.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all_fund_types(&self) -> Result<AllFundTypes, DbErr> {
        Ok(AllFundTypes {
            balance_fund_types: self.fund_types::<BalanceLedger>().await?,
            revenue_fund_types: self.fund_types::<RevenueLedger>().await?,
            expenditure_fund_types: self.fund_types::<ExpenditureLedger>().await?,
        })
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
