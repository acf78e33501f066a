//! Connection topologies for common landmark models.

use crate::landmark::Connection;
use std::fmt;
use std::str::FromStr;

/// Number of landmarks in the full-body pose model.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Number of landmarks in the hand model.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Edges of the 33-landmark body pose skeleton.
pub const POSE_CONNECTIONS: &[Connection] = &[
    // Face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    // Upper body
    (11, 12),
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    // Torso
    (11, 23),
    (12, 24),
    (23, 24),
    // Lower body
    (23, 25),
    (24, 26),
    (25, 27),
    (26, 28),
    (27, 29),
    (28, 30),
    (29, 31),
    (30, 32),
    (27, 31),
    (28, 32),
];

/// Edges of the 21-landmark hand skeleton.
pub const HAND_CONNECTIONS: &[Connection] = &[
    // Palm
    (0, 1),
    (0, 5),
    (9, 13),
    (13, 17),
    (5, 9),
    (0, 17),
    // Thumb
    (1, 2),
    (2, 3),
    (3, 4),
    // Index finger
    (5, 6),
    (6, 7),
    (7, 8),
    // Middle finger
    (9, 10),
    (10, 11),
    (11, 12),
    // Ring finger
    (13, 14),
    (14, 15),
    (15, 16),
    // Pinky
    (17, 18),
    (18, 19),
    (19, 20),
];

/// A named connection topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionPreset {
    /// Points only.
    #[default]
    None,
    Pose,
    Hand,
}

impl ConnectionPreset {
    pub fn connections(&self) -> &'static [Connection] {
        match self {
            ConnectionPreset::None => &[],
            ConnectionPreset::Pose => POSE_CONNECTIONS,
            ConnectionPreset::Hand => HAND_CONNECTIONS,
        }
    }
}

impl FromStr for ConnectionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ConnectionPreset::None),
            "pose" => Ok(ConnectionPreset::Pose),
            "hand" => Ok(ConnectionPreset::Hand),
            _ => Err(format!(
                "Unsupported connection preset '{s}'. Expected one of: none, pose, hand"
            )),
        }
    }
}

impl fmt::Display for ConnectionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionPreset::None => "none",
            ConnectionPreset::Pose => "pose",
            ConnectionPreset::Hand => "hand",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pose_connections_in_range() {
        assert_eq!(POSE_CONNECTIONS.len(), 35);
        assert!(POSE_CONNECTIONS
            .iter()
            .all(|&(a, b)| a < POSE_LANDMARK_COUNT && b < POSE_LANDMARK_COUNT));
    }

    #[test]
    fn test_hand_connections_in_range() {
        assert_eq!(HAND_CONNECTIONS.len(), 21);
        assert!(HAND_CONNECTIONS
            .iter()
            .all(|&(a, b)| a < HAND_LANDMARK_COUNT && b < HAND_LANDMARK_COUNT));
    }

    #[test]
    fn test_no_duplicate_edges() {
        for preset in [ConnectionPreset::Pose, ConnectionPreset::Hand] {
            let unique: HashSet<_> = preset.connections().iter().collect();
            assert_eq!(unique.len(), preset.connections().len());
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Pose".parse::<ConnectionPreset>(), Ok(ConnectionPreset::Pose));
        assert_eq!("none".parse::<ConnectionPreset>(), Ok(ConnectionPreset::None));
        assert!("face".parse::<ConnectionPreset>().is_err());
        assert_eq!(ConnectionPreset::Hand.to_string(), "hand");
    }
}
