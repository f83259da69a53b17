pub mod calculator;
pub mod config;
pub mod error;
pub mod faq;
pub mod feedback;
pub mod nav;
pub mod profile;
pub mod render;
pub mod tasks;

#[cfg(test)]
mod tests;

pub const APP_DIRECTORY_NAME: &str = "widget-showcase";
pub const RANDOM_USER_HOST: &str = "randomuser.me";
pub const RANDOM_USER_ENDPOINT: &str =
    const_format::concatcp!("https://", RANDOM_USER_HOST, "/api/");
