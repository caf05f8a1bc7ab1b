pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod notifications;
pub mod ui;
