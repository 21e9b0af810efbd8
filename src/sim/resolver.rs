use crate::{SimBody, consts};

/// Extracts the player number from a scene name of the form `<group>.<prefix>NN`.
///
/// Returns `None` if the name does not end in a number after the prefix.
#[must_use]
pub fn parse_player_number(full_name: &str, prefix_len: usize) -> Option<u32> {
    let leaf = full_name.rsplit_once('.').map_or(full_name, |(_, leaf)| leaf);
    leaf.get(prefix_len..)?.parse().ok()
}

/// Derives a robot's player number from its scene body.
///
/// Numbers are 1-based; `1..=robots_per_team` is the first team and
/// `robots_per_team + 1..=2 * robots_per_team` the second team.
pub trait PlayerNumberResolver {
    fn player_number_of(&self, body: &dyn SimBody) -> u32;
}

/// Reads the number from the trailing digits of the body's scene name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameSuffixResolver {
    pub prefix_len: usize,
}

impl Default for NameSuffixResolver {
    fn default() -> Self {
        Self {
            prefix_len: consts::scene::NAME_PREFIX_LEN,
        }
    }
}

impl PlayerNumberResolver for NameSuffixResolver {
    fn player_number_of(&self, body: &dyn SimBody) -> u32 {
        let name = body.full_name();
        let Some(number) = parse_player_number(name, self.prefix_len) else {
            panic!("Scene body \"{name}\" does not end in a player number");
        };
        number
    }
}
