pub mod client;
pub mod error;
pub mod lookup;
pub mod request;
pub mod response;
pub mod retry;

#[cfg(test)]
pub mod stub;
