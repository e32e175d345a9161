//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "quotes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub codein: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub high: String,
    #[sea_orm(column_type = "Text")]
    pub low: String,
    #[sea_orm(column_type = "Text")]
    pub var_bid: String,
    #[sea_orm(column_type = "Text")]
    pub pct_change: String,
    #[sea_orm(column_type = "Text")]
    pub bid: String,
    #[sea_orm(column_type = "Text")]
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
