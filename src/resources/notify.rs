//! ECS resource that bridges the simulation with collaborator threads.
//!
//! Use [`setup_notifications`] once during initialization to spawn the
//! logging collaborator thread (the stand-in for audio/UI consumers) and
//! insert the [`NotifyBridge`] resource. Call [`shutdown_notifications`]
//! during teardown to gracefully stop the thread.

use crate::events::notify::Notification;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::info;

/// Shared bridge between the ECS world and collaborator threads.
///
/// Systems push notifications via [`NotifyBridge::send`]; delivery is
/// best-effort and never blocks the simulation.
#[derive(Resource)]
pub struct NotifyBridge {
    tx: Sender<Notification>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl NotifyBridge {
    /// Fire-and-forget send. A closed channel is silently ignored.
    pub fn send(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }

    /// Create a bridge without a consumer thread, returning the receiver.
    /// Used by tests and by embedders that bring their own consumer.
    pub fn detached() -> (Self, Receiver<Notification>) {
        let (tx, rx) = unbounded::<Notification>();
        (Self { tx, handle: None }, rx)
    }
}

/// Spawn the collaborator thread and register the bridge resource.
pub fn setup_notifications(world: &mut World) {
    let (tx, rx) = unbounded::<Notification>();
    let handle = std::thread::spawn(move || notify_thread(rx));
    world.insert_resource(NotifyBridge {
        tx,
        handle: Some(handle),
    });
}

/// Gracefully request shutdown of the collaborator thread and join it.
///
/// If the bridge resource exists, sends [`Notification::Shutdown`], waits
/// for the thread to exit, and removes the resource from the world.
pub fn shutdown_notifications(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<NotifyBridge>() {
        let _ = bridge.tx.send(Notification::Shutdown);
        if let Some(handle) = bridge.handle {
            let _ = handle.join();
        }
    }
}

/// Logging collaborator: consumes notifications until shutdown.
fn notify_thread(rx: Receiver<Notification>) {
    while let Ok(notification) = rx.recv() {
        match notification {
            Notification::Shutdown => break,
            Notification::WaveSpawned { count } => info!("Wave spawned: {} enemies", count),
            Notification::EnemyDestroyed { entity } => info!("Enemy destroyed: {:?}", entity),
            Notification::PlayerHit { remaining } => info!("Player hit, {} hp left", remaining),
            Notification::PlayerDied => info!("Player died"),
            Notification::StageComplete => info!("Stage complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_bridge_delivers() {
        let (bridge, rx) = NotifyBridge::detached();
        bridge.send(Notification::PlayerDied);
        assert_eq!(rx.try_recv(), Ok(Notification::PlayerDied));
    }

    #[test]
    fn test_send_after_receiver_drop_is_ignored() {
        let (bridge, rx) = NotifyBridge::detached();
        drop(rx);
        // Must not panic or block.
        bridge.send(Notification::StageComplete);
    }

    #[test]
    fn test_setup_and_shutdown_joins_thread() {
        let mut world = World::new();
        setup_notifications(&mut world);
        {
            let bridge = world.resource::<NotifyBridge>();
            bridge.send(Notification::WaveSpawned { count: 3 });
        }
        shutdown_notifications(&mut world);
        assert!(world.get_resource::<NotifyBridge>().is_none());
    }
}
