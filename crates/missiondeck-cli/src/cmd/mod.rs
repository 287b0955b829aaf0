pub mod add;
pub mod export;
pub mod init;
pub mod latest;
pub mod list;
pub mod show;
pub mod terms;
pub mod validate;
