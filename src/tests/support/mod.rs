pub mod app_state_builder;
pub mod contact_fixtures;
pub mod project_fixtures;
pub mod stubs;
