/// Which of the two teams a robot plays for.
///
/// The first team views the field rotated by 180°, so every transform
/// between the raw simulator frame and its canonical frame flips the
/// horizontal axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TeamSide {
    #[default]
    First,
    Second,
}

impl TeamSide {
    pub const ALL: [TeamSide; 2] = [TeamSide::First, TeamSide::Second];

    /// Raw scene numbers `1..=robots_per_team` are first team, the rest second team.
    #[must_use]
    pub const fn from_number(number: u32, robots_per_team: u32) -> Self {
        if number <= robots_per_team {
            Self::First
        } else {
            Self::Second
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::First)
    }

    /// Maps a raw scene number to the number reported for this side, starting at 1.
    ///
    /// `number` must belong to this side.
    #[must_use]
    pub const fn normalize_number(self, number: u32, robots_per_team: u32) -> u32 {
        match self {
            Self::First => number,
            Self::Second => {
                debug_assert!(
                    number > robots_per_team,
                    "Second team number is not above robots_per_team"
                );
                number - robots_per_team
            }
        }
    }
}
