//! FlameShard levels: a static ladder of named tiers keyed by the student's
//! cumulative shard total.

/// Upper edge of a level's shard range. Only the top tier is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardCeiling {
    Bounded(u32),
    Unbounded,
}

impl ShardCeiling {
    pub fn admits(&self, shards: u32) -> bool {
        match self {
            ShardCeiling::Bounded(max) => shards <= *max,
            ShardCeiling::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlameShardLevel {
    pub level: u8,
    pub name: &'static str,
    pub min_shards: u32,
    pub max_shards: ShardCeiling,
    pub color: &'static str,
    pub description: &'static str,
}

impl FlameShardLevel {
    pub fn contains(&self, shards: u32) -> bool {
        shards >= self.min_shards && self.max_shards.admits(shards)
    }

    pub fn range_label(&self) -> String {
        match self.max_shards {
            ShardCeiling::Bounded(max) => format!("{} – {}", self.min_shards, max),
            ShardCeiling::Unbounded => format!("{}+", self.min_shards),
        }
    }
}

pub static FLAMESHARD_LEVELS: [FlameShardLevel; 6] = [
    FlameShardLevel {
        level: 1,
        name: "Spark",
        min_shards: 0,
        max_shards: ShardCeiling::Bounded(99),
        color: "#F6C177",
        description: "You have struck the first flint. Every forge starts here.",
    },
    FlameShardLevel {
        level: 2,
        name: "Ember",
        min_shards: 100,
        max_shards: ShardCeiling::Bounded(249),
        color: "#F4A261",
        description: "A steady glow. Your first rituals are becoming habits.",
    },
    FlameShardLevel {
        level: 3,
        name: "Kindling",
        min_shards: 250,
        max_shards: ShardCeiling::Bounded(499),
        color: "#E76F51",
        description: "The fire catches. You can carry a scroll without a guide.",
    },
    FlameShardLevel {
        level: 4,
        name: "Blaze",
        min_shards: 500,
        max_shards: ShardCeiling::Bounded(999),
        color: "#E63946",
        description: "Others can see your light. Challenges bend to you.",
    },
    FlameShardLevel {
        level: 5,
        name: "Inferno",
        min_shards: 1000,
        max_shards: ShardCeiling::Bounded(1999),
        color: "#B5179E",
        description: "Raw power, tempered by practice.",
    },
    FlameShardLevel {
        level: 6,
        name: "Phoenix",
        min_shards: 2000,
        max_shards: ShardCeiling::Unbounded,
        color: "#7209B7",
        description: "Reborn from every failure. The ladder ends, the craft doesn't.",
    },
];

/// Level containing `shards`. The ladder covers every `u32`, so the first
/// level fallback never fires in practice.
pub fn level_for_shards(shards: u32) -> &'static FlameShardLevel {
    FLAMESHARD_LEVELS
        .iter()
        .find(|level| level.contains(shards))
        .unwrap_or(&FLAMESHARD_LEVELS[0])
}

pub fn next_level(current: &FlameShardLevel) -> Option<&'static FlameShardLevel> {
    FLAMESHARD_LEVELS
        .iter()
        .find(|level| level.level == current.level + 1)
}

/// Shards still needed to reach the next tier, `None` at the top.
pub fn shards_to_next_level(shards: u32) -> Option<u32> {
    next_level(level_for_shards(shards)).map(|next| next.min_shards.saturating_sub(shards))
}

/// How far through the current tier `shards` is, 0 to 100.
pub fn level_progress_percent(shards: u32) -> u8 {
    let level = level_for_shards(shards);
    match level.max_shards {
        ShardCeiling::Unbounded => 100,
        ShardCeiling::Bounded(max) => {
            let span = (max - level.min_shards + 1) as u64;
            let into = (shards - level.min_shards) as u64;
            ((into * 100) / span) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_first_level() {
        assert_eq!(level_for_shards(0).level, 1);
    }

    #[test]
    fn min_boundary_is_inclusive() {
        assert_eq!(level_for_shards(99).name, "Spark");
        assert_eq!(level_for_shards(100).level, 2);
        assert_eq!(level_for_shards(2000).name, "Phoenix");
    }

    #[test]
    fn every_total_has_exactly_one_level() {
        for shards in (0..5_000).chain([u32::MAX - 1, u32::MAX]) {
            let matches = FLAMESHARD_LEVELS
                .iter()
                .filter(|level| level.contains(shards))
                .count();
            assert_eq!(matches, 1, "shards = {}", shards);

            let level = level_for_shards(shards);
            assert!(level.min_shards <= shards);
            assert!(level.max_shards.admits(shards));
        }
    }

    #[test]
    fn ladder_is_contiguous() {
        assert_eq!(FLAMESHARD_LEVELS[0].min_shards, 0);
        for pair in FLAMESHARD_LEVELS.windows(2) {
            match pair[0].max_shards {
                ShardCeiling::Bounded(max) => assert_eq!(max + 1, pair[1].min_shards),
                ShardCeiling::Unbounded => panic!("only the last level may be unbounded"),
            }
        }
        assert_eq!(
            FLAMESHARD_LEVELS.last().map(|level| level.max_shards),
            Some(ShardCeiling::Unbounded)
        );
    }

    #[test]
    fn progress_within_level() {
        assert_eq!(level_progress_percent(0), 0);
        assert_eq!(level_progress_percent(50), 50);
        assert_eq!(level_progress_percent(175), 50);
        assert_eq!(level_progress_percent(10_000), 100);
    }

    #[test]
    fn shards_to_next() {
        assert_eq!(shards_to_next_level(0), Some(100));
        assert_eq!(shards_to_next_level(240), Some(10));
        assert_eq!(shards_to_next_level(2000), None);
    }

    #[test]
    fn range_labels() {
        assert_eq!(FLAMESHARD_LEVELS[0].range_label(), "0 – 99");
        assert_eq!(FLAMESHARD_LEVELS[5].range_label(), "2000+");
    }
}
