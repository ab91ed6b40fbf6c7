pub mod boxcollider;
pub mod facing;
pub mod faction;
pub mod health;
pub mod kind;
pub mod mapposition;
pub mod rigidbody;
pub mod shipcontrolled;
pub mod weapon;
