pub mod account;
pub mod config;
pub mod craving;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
