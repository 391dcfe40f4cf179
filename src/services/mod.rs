pub mod icon;
pub mod interpreter;
pub mod link;
pub mod request;
pub mod reveal;
pub mod settings;
pub mod shortcut;
