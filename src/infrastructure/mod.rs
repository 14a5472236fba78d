pub mod database;
pub mod dto;
pub mod in_memory_user_repository;
pub mod mysql_user_repository;
pub mod repository;
pub mod sqlite_user_repository;
