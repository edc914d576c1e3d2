// Wed Aug 26 2026 - Alex

pub mod banner;

pub use banner::{Banner, BannerStyle};
