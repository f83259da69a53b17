mod client;
mod generator;
