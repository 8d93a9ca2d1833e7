pub mod list;
pub mod show;
pub mod table;
pub mod verify;
