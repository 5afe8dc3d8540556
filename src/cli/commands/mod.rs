pub mod boxes;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod obs;
pub mod resource;
