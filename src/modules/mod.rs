pub mod about;
pub mod contact;
pub mod experience;
pub mod project;
pub mod site;
pub mod skill;
