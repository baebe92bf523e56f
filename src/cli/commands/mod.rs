pub mod add;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod show;
pub mod start;
pub mod stop;
