pub mod audit;
pub mod init_config;
