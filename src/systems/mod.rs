pub mod bounds;
pub mod cleanup;
pub mod collision;
pub mod gamestate;
pub mod movement;
pub mod playercontrol;
pub mod spawn;
pub mod time;
pub mod weapon;
