pub mod config;
pub mod init_config;
pub mod replay;
