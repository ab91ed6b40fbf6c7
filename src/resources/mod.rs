pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod notify;
pub mod playfield;
pub mod scheduler;
pub mod stepclock;
pub mod worldsignals;
pub mod worldtime;
