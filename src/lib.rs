#![forbid(unsafe_code)]

pub mod notification;

pub use notification::Notification;
