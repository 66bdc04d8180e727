pub mod skill_query;
