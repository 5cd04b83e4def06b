pub mod document;
pub mod markdown;
pub mod record;
pub mod user;
