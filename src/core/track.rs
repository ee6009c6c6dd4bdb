use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Half-day marker for hour-block styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Alternating shade applied to consecutive hour blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockShade {
    Primary,
    Secondary,
}

/// One shaded hour slot on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBlock {
    pub hour_of_day: u32,
    pub meridiem: Meridiem,
    pub shade: BlockShade,
}

/// The 13-slot primary variant fits inline.
pub type HourBlocks = SmallVec<[HourBlock; 13]>;

/// Builds the fixed hour grid for a track anchored at `anchor_hour`.
///
/// The grid never changes for the life of an instance; an hour rollover
/// invalidates the whole widget instead (see the engine's tick handling).
#[must_use]
pub fn build_hour_blocks(anchor_hour: u32, total_hours: u32) -> HourBlocks {
    (0..total_hours)
        .map(|slot| {
            let hour = (anchor_hour + slot) % 24;
            HourBlock {
                hour_of_day: hour,
                meridiem: if hour < 12 { Meridiem::Am } else { Meridiem::Pm },
                shade: if slot % 2 == 0 {
                    BlockShade::Primary
                } else {
                    BlockShade::Secondary
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BlockShade, Meridiem, build_hour_blocks};

    #[test]
    fn grid_wraps_past_midnight_and_alternates_shades() {
        let blocks = build_hour_blocks(22, 13);
        assert_eq!(blocks.len(), 13);

        assert_eq!(blocks[0].hour_of_day, 22);
        assert_eq!(blocks[0].meridiem, Meridiem::Pm);
        assert_eq!(blocks[0].shade, BlockShade::Primary);

        assert_eq!(blocks[2].hour_of_day, 0);
        assert_eq!(blocks[2].meridiem, Meridiem::Am);

        assert_eq!(blocks[12].hour_of_day, 10);
        assert_eq!(blocks[12].shade, BlockShade::Primary);
        assert_eq!(blocks[11].shade, BlockShade::Secondary);
    }
}
