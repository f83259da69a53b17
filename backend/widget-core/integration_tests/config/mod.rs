mod faq;
mod page;
