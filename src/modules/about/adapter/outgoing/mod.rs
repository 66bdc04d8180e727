mod about_store_postgres;
pub mod sea_orm_entity;

pub use about_store_postgres::AboutStorePostgres;
