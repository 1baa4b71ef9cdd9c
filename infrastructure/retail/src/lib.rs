pub mod amazon;
pub mod client;
pub mod ebay;
pub mod rate_limit;
