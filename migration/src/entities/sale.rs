//! Sales row entity, one record per sale

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "Date", column_type = "Text", nullable)]
    pub date: Option<String>,
    #[sea_orm(column_name = "Product", column_type = "Text", nullable)]
    pub product: Option<String>,
    #[sea_orm(column_name = "Revenue", nullable)]
    pub revenue: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
