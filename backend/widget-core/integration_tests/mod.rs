mod config;
mod error;
mod profile;
