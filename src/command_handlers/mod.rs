pub mod dispatch;
pub mod exec;
pub mod files;
pub mod http;

#[cfg(test)]
pub(crate) mod fakes;
