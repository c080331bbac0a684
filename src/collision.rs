//! Projectile vs enemy hit resolution.
//!
//! Every (projectile, enemy) pair is tested in order. Removals are recorded
//! in alive masks and applied with `retain` once the pass is over, so a
//! removal never shifts the elements still to be visited. A projectile is
//! spent on its first hit and a dead enemy takes no further hits.

use crate::model::{Enemy, Projectile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitReport {
    pub hits: u32,
    pub kills: u32,
}

pub fn resolve_hits(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>, damage: u32) -> HitReport {
    let mut report = HitReport::default();
    let mut projectile_alive = vec![true; projectiles.len()];
    let mut enemy_alive = vec![true; enemies.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        let p_rect = projectile.rect();
        for (ei, enemy) in enemies.iter_mut().enumerate() {
            if !enemy_alive[ei] || !p_rect.overlaps(&enemy.rect()) {
                continue;
            }
            enemy.take_hit(damage);
            report.hits += 1;
            projectile_alive[pi] = false;
            if enemy.is_dead() {
                enemy_alive[ei] = false;
                report.kills += 1;
            }
            break;
        }
    }

    let mut keep = projectile_alive.into_iter();
    projectiles.retain(|_| keep.next().unwrap_or(true));
    let mut keep = enemy_alive.into_iter();
    enemies.retain(|_| keep.next().unwrap_or(true));
    report
}
