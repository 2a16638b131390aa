pub mod init;
pub mod preview;
pub mod projects;
pub mod root;
pub mod run;
