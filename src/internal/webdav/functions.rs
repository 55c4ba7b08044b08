pub mod build_full_path;
pub mod clean_revision;
pub mod http_date;
pub mod validate_content;
