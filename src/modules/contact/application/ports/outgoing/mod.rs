pub mod contact_message_repository;
