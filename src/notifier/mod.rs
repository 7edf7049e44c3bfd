pub mod email;

pub use email::Notifier;
