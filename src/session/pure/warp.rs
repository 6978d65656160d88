//! Level index to warp coordinates
//!
//! Level indices come straight from the level lists in `catalog`, so index 0
//! is the "NONE" entry for every list except the Master Levels.

use crate::catalog::MASTER_WARPS;
use crate::session::types::Warp;

/// Flat index to (episode, map) for ExMy numbered games: 1 is E1M1, 10 is E2M1
pub fn episodic_warp(level: usize) -> Warp {
    if level == 0 {
        return Warp::MENU;
    }
    let i = (level - 1) as u32;
    Warp::episode(i / 9 + 1, i % 9 + 1)
}

/// MAPxx numbered games warp to the index itself
pub fn map_warp(level: usize) -> Warp {
    Warp::map(level as u32)
}

/// No Rest for the Living never starts at the menu
pub fn nrftl_warp(level: usize) -> Warp {
    Warp::map(level.max(1) as u32)
}

/// Master Levels are one map per WAD, each stored in a fixed map slot
pub fn master_warp(level: usize) -> Option<Warp> {
    MASTER_WARPS.get(level).map(|&slot| Warp::map(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episodic_warp_boundaries() {
        assert_eq!(episodic_warp(0), Warp::MENU);
        assert_eq!(episodic_warp(1), Warp::episode(1, 1));
        assert_eq!(episodic_warp(9), Warp::episode(1, 9));
        assert_eq!(episodic_warp(10), Warp::episode(2, 1));
        assert_eq!(episodic_warp(27), Warp::episode(3, 9));
        assert_eq!(episodic_warp(36), Warp::episode(4, 9));
    }

    #[test]
    fn map_warp_is_identity() {
        assert!(map_warp(0).is_menu());
        assert_eq!(map_warp(32), Warp::map(32));
    }

    #[test]
    fn nrftl_forces_a_level() {
        assert_eq!(nrftl_warp(0), Warp::map(1));
        assert_eq!(nrftl_warp(9), Warp::map(9));
    }

    #[test]
    fn master_warp_uses_lookup_table() {
        assert_eq!(master_warp(0), Some(Warp::map(1)));
        assert_eq!(master_warp(1), Some(Warp::map(25)));
        assert_eq!(master_warp(16), Some(Warp::map(31)));
        assert_eq!(master_warp(17), Some(Warp::map(32)));
        assert_eq!(master_warp(20), Some(Warp::map(3)));
        assert_eq!(master_warp(21), None);
    }
}
