mod profile;
mod widget;
