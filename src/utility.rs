#[cfg(test)]
pub(crate) mod capture_log;
pub mod encoding;
pub mod str;
