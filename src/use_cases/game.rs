use super::types::{FrameUpdate, RunSummary};
use crate::domain::systems::player_movement;
use crate::domain::{
    FollowCamera, InputIntent, InputSource, MotionState, PlayerBody, PlayerSnapshot, Tuning,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// The two simulated objects, owned by the loop and passed by reference into each step.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub player: PlayerBody,
    pub camera: FollowCamera,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tick: input, then player physics, then camera follow.
    pub fn step(&mut self, keys: &InputIntent, tuning: &Tuning) -> PlayerSnapshot {
        player_movement::apply_input(&mut self.player, keys, &tuning.player);
        player_movement::advance(&mut self.player, &tuning.player);

        let snapshot = PlayerSnapshot::from(&self.player);
        self.camera.update(&snapshot, &tuning.camera);
        snapshot
    }

    pub fn summary(&self, ticks: u64) -> RunSummary {
        RunSummary {
            ticks,
            player: PlayerSnapshot::from(&self.player),
            camera: self.camera.position,
        }
    }
}

pub async fn world_task<I: InputSource>(
    mut input: I,
    frame_tx: broadcast::Sender<FrameUpdate>,
    tuning: Tuning,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
    max_ticks: Option<u64>,
) -> RunSummary {
    let mut tick: u64 = 0;
    let mut world = World::new();

    // Drive the fixed-step loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(tick_ms = tick_interval.as_millis() as u64, ?max_ticks, "world loop started");

    loop {
        if max_ticks.is_some_and(|limit| tick >= limit) {
            break;
        }
        if input.is_exhausted() {
            debug!(tick, "input exhausted");
            break;
        }

        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                info!(tick, "shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        let keys = input.held_keys();
        let before = world.player.motion_state;
        let player = world.step(&keys, &tuning);
        tick += 1;

        if before != player.motion_state {
            match player.motion_state {
                MotionState::Grounded => {
                    debug!(tick, x = player.position.x, y = player.position.y, "landed")
                }
                MotionState::Airborne => {
                    debug!(tick, x = player.position.x, y = player.position.y, "jumped")
                }
            }
        }

        // No receivers is fine; the shell may only want the summary.
        let _ = frame_tx.send(FrameUpdate {
            tick,
            player,
            camera: world.camera.position,
        });
    }

    let summary = world.summary(tick);
    info!(
        ticks = summary.ticks,
        x = summary.player.position.x,
        y = summary.player.position.y,
        "world loop stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Facing, Key, Vec2};

    // Replays a fixed list of intents, then reports exhaustion.
    struct FixedInput {
        frames: Vec<InputIntent>,
        cursor: usize,
    }

    impl FixedInput {
        fn new(frames: Vec<InputIntent>) -> Self {
            Self { frames, cursor: 0 }
        }
    }

    impl InputSource for FixedInput {
        fn held_keys(&mut self) -> InputIntent {
            let keys = self.frames.get(self.cursor).copied().unwrap_or_default();
            self.cursor += 1;
            keys
        }

        fn is_exhausted(&self) -> bool {
            self.cursor >= self.frames.len()
        }
    }

    // Never runs out.
    struct Idle;

    impl InputSource for Idle {
        fn held_keys(&mut self) -> InputIntent {
            InputIntent::NONE
        }
    }

    #[test]
    fn when_stepping_then_camera_sees_the_advanced_player() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let right: InputIntent = [Key::MoveRight].into_iter().collect();

        let snapshot = world.step(&right, &tuning);

        // 3.0 from input minus 0.25 friction
        assert_eq!(snapshot.position, Vec2::new(2.75, 0.25));
        assert_eq!(snapshot.facing, Facing::Right);
        let dest = FollowCamera::target(&snapshot, &tuning.camera);
        assert_eq!(world.camera.position.x, dest.x / tuning.camera.damping);
        assert_eq!(world.camera.position.y, dest.y / tuning.camera.damping);
    }

    #[tokio::test]
    async fn when_input_runs_out_then_loop_stops_and_publishes_every_tick() {
        let (frame_tx, mut frame_rx) = broadcast::channel(64);
        let right: InputIntent = [Key::MoveRight].into_iter().collect();
        let input = FixedInput::new(vec![right; 5]);

        let summary = world_task(
            input,
            frame_tx,
            Tuning::default(),
            Duration::from_millis(1),
            Arc::new(Notify::new()),
            None,
        )
        .await;

        assert_eq!(summary.ticks, 5);
        let mut expected = World::new();
        for tick in 1..=5 {
            let frame = frame_rx.recv().await.expect("frame should be published");
            let player = expected.step(&right, &Tuning::default());
            assert_eq!(frame.tick, tick);
            assert_eq!(frame.player, player);
            assert_eq!(frame.camera, expected.camera.position);
        }
        assert_eq!(summary.player, PlayerSnapshot::from(&expected.player));
    }

    #[tokio::test]
    async fn when_max_ticks_reached_then_loop_stops() {
        let (frame_tx, _frame_rx) = broadcast::channel(16);

        let summary = world_task(
            Idle,
            frame_tx,
            Tuning::default(),
            Duration::from_millis(1),
            Arc::new(Notify::new()),
            Some(3),
        )
        .await;

        assert_eq!(summary.ticks, 3);
    }

    #[tokio::test]
    async fn when_shutdown_is_pending_then_loop_exits_before_ticking() {
        let (frame_tx, _frame_rx) = broadcast::channel(16);
        let shutdown = Arc::new(Notify::new());
        shutdown.notify_one();

        let summary = world_task(
            Idle,
            frame_tx,
            Tuning::default(),
            Duration::from_millis(1),
            shutdown,
            None,
        )
        .await;

        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.camera, Vec2::ZERO);
    }
}
