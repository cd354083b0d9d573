mod config;
mod frame_limit;
mod parse_rle;

pub use config::Config;
pub use frame_limit::FrameLimiter;
pub use parse_rle::parse_rle;
