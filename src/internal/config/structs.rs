pub mod remote_config;
