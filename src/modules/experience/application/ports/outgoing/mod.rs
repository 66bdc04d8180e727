pub mod experience_query;
