pub mod init;
pub mod suffix;
