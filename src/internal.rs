pub mod config;
pub mod entrance;
pub mod remote_file;
pub mod states;
pub mod transport;
pub mod webdav;
