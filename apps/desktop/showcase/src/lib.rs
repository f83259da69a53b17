// Library exports for testing
// The binary (main.rs) imports these as well

pub mod dom;
pub mod error;
pub mod event;
pub mod logger;
pub mod page;

#[cfg(test)]
mod tests;
