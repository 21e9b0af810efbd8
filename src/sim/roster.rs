use ahash::AHashSet;
use log::{debug, info, warn};

use crate::{BodyHandle, PlayerNumberResolver, Scene, SyncConfig, TeamSide};

#[derive(Clone)]
pub struct RosterEntry {
    pub body: BodyHandle,
    /// Raw scene number, not yet normalized for the second team
    pub number: u32,
}

/// The other robots in the scene, split by team.
///
/// Entries keep the scene's enumeration order, they are not sorted by number.
#[derive(Clone, Default)]
pub struct Roster {
    first_team: Vec<RosterEntry>,
    second_team: Vec<RosterEntry>,
    /// Numbers seen more than once, in the order they repeated
    duplicates: Vec<u32>,
}

impl Roster {
    /// Collects every robot of the configured scene groups except `own_number`.
    ///
    /// Panics if one of the groups does not exist in the scene.
    pub fn build(
        scene: &dyn Scene,
        resolver: &dyn PlayerNumberResolver,
        config: &SyncConfig,
        own_number: u32,
    ) -> Self {
        let mut roster = Self::default();
        let mut seen = AHashSet::new();

        for group_path in [config.robots_group, config.extras_group] {
            let Some(group) = scene.resolve_group(group_path) else {
                panic!("Scene group \"{group_path}\" does not exist");
            };

            for i in 0..scene.child_count(group) {
                let body = scene.child(group, i);
                let number = resolver.player_number_of(&*body.borrow());
                if number == own_number {
                    continue;
                }

                if !seen.insert(number) {
                    warn!("Player number {number} appears more than once in the scene");
                    roster.duplicates.push(number);
                }

                let side = TeamSide::from_number(number, config.robots_per_team);
                debug!("Roster: robot {number} in \"{group_path}\" is on the {side:?} team");

                let entry = RosterEntry { body, number };
                match side {
                    TeamSide::First => roster.first_team.push(entry),
                    TeamSide::Second => roster.second_team.push(entry),
                }
            }
        }

        info!(
            "Roster for robot {own_number}: {} first team, {} second team",
            roster.first_team.len(),
            roster.second_team.len()
        );

        roster
    }

    #[must_use]
    pub fn team(&self, side: TeamSide) -> &[RosterEntry] {
        match side {
            TeamSide::First => &self.first_team,
            TeamSide::Second => &self.second_team,
        }
    }

    /// Player numbers that more than one scene body resolved to. Both bodies stay in the roster.
    #[must_use]
    pub fn duplicate_numbers(&self) -> &[u32] {
        &self.duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.first_team.len() + self.second_team.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
