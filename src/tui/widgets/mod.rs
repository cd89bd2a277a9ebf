pub mod daily;
pub mod habits;
pub mod header;
pub mod prayers;
pub mod statusbar;
pub mod tasbeeh;
pub mod virtue;
