mod client;

pub use client::RipeClient;
