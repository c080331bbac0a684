//! Frame-counted spawn bursts. A wave arms the spawner with its quota and the
//! spawner then emits one enemy every `interval` frames until the quota is
//! used up, at which point it goes back to idle on its own.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spawner {
    #[default]
    Idle,
    Spawning {
        remaining: u32,
        frames_until_next: u32,
        interval: u32,
    },
}

/// Coarse wave state as seen by the HUD and the wave clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// No enemies left, waiting out the inter-wave delay.
    Idle,
    /// Burst still emitting.
    Spawning,
    /// Burst finished, enemies still on the field.
    Active,
}

impl Spawner {
    /// Arms a new burst. A zero quota leaves the spawner idle.
    pub fn begin_burst(quota: u32, interval: u32) -> Self {
        if quota == 0 {
            return Spawner::Idle;
        }
        let interval = interval.max(1);
        Spawner::Spawning { remaining: quota, frames_until_next: interval, interval }
    }

    pub fn is_spawning(&self) -> bool {
        matches!(self, Spawner::Spawning { .. })
    }

    /// Advances one frame. Returns true when an enemy should be spawned on
    /// this frame.
    pub fn step(&mut self) -> bool {
        let Spawner::Spawning { remaining, frames_until_next, interval } = self else {
            return false;
        };
        *frames_until_next -= 1;
        if *frames_until_next > 0 {
            return false;
        }
        *remaining -= 1;
        *frames_until_next = *interval;
        if *remaining == 0 {
            *self = Spawner::Idle;
        }
        true
    }

    pub fn phase(&self, enemies_alive: usize) -> WavePhase {
        if self.is_spawning() {
            WavePhase::Spawning
        } else if enemies_alive > 0 {
            WavePhase::Active
        } else {
            WavePhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_burst(quota: u32, interval: u32) -> Vec<u32> {
        let mut sp = Spawner::begin_burst(quota, interval);
        let mut frames = Vec::new();
        let mut frame = 0;
        while sp.is_spawning() {
            frame += 1;
            if sp.step() {
                frames.push(frame);
            }
        }
        frames
    }

    #[test]
    fn wave_quota_spawns_exactly_one_per_interval() {
        for wave in 1..=4 {
            let frames = run_burst(5 * wave, 30);
            assert_eq!(frames.len() as u32, 5 * wave);
            let expected: Vec<u32> = (1..=5 * wave).map(|k| k * 30).collect();
            assert_eq!(frames, expected);
        }
    }

    #[test]
    fn idle_never_spawns() {
        let mut sp = Spawner::Idle;
        for _ in 0..100 {
            assert!(!sp.step());
        }
        assert_eq!(Spawner::begin_burst(0, 30), Spawner::Idle);
    }

    #[test]
    fn zero_interval_is_treated_as_every_frame() {
        assert_eq!(run_burst(3, 0), vec![1, 2, 3]);
    }

    #[test]
    fn phase_tracks_burst_and_field() {
        let mut sp = Spawner::begin_burst(1, 2);
        assert_eq!(sp.phase(0), WavePhase::Spawning);
        assert!(!sp.step());
        assert!(sp.step());
        assert_eq!(sp, Spawner::Idle);
        assert_eq!(sp.phase(1), WavePhase::Active);
        assert_eq!(sp.phase(0), WavePhase::Idle);
    }
}
