pub mod slug;
pub mod tags;
