mod calculator;
mod faq;
mod profile;
mod tasks;
