mod skill_query_postgres;
pub mod sea_orm_entity;

pub use skill_query_postgres::SkillQueryPostgres;
