pub mod redact;
pub mod time;
