pub mod collision;
pub mod gamestate;
pub mod notify;
