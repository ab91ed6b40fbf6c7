//! Skyraid simulation core.
//!
//! A deterministic, headless core for a vertical-scrolling shooter:
//! - **bevy_ecs** for entity-component-system architecture
//! - fixed-timestep accumulator loop with a bounded catch-up cap
//! - timed wave scheduler realizing JSON spawn patterns into enemies
//! - AABB collision detection with an observer-based damage policy
//!
//! Rendering, audio, and real input devices are collaborator concerns.
//! The core exposes [`game::render_snapshot`] for renderers, the
//! [`resources::input::InputState`] resource for input drivers, and a
//! channel-backed notification bridge for audio/UI consumers.
//!
//! # Module layout
//!
//! - [`components`] – ECS components (kind, physics, collision, health, weapon)
//! - [`events`] – Event types (collision, game state, notifications)
//! - [`game`] – World setup, schedule wiring, and the frame driver
//! - [`resources`] – ECS resources (config, clock, scheduler, signals)
//! - [`systems`] – ECS systems (input, movement, collision, spawn, cleanup)

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
