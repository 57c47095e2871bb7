//! Motion data model: motion types, grid locations, orientations, turns and beats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// The two independent props animated in every beat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropId {
    First,
    Second,
}

impl PropId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed motion taxonomy. `Unknown` catches anything the notation does not
/// define so that malformed beats degrade instead of failing to load.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Static,
    Dash,
    Float,
    #[serde(other)]
    Unknown,
}

impl MotionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Anti => "anti",
            Self::Static => "static",
            Self::Dash => "dash",
            Self::Float => "float",
            Self::Unknown => "unknown",
        }
    }
}

/// Canonical positions on the notation grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::Ne,
        Location::E,
        Location::Se,
        Location::S,
        Location::Sw,
        Location::W,
        Location::Nw,
    ];
}

impl FromStr for Location {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Self::N),
            "ne" => Ok(Self::Ne),
            "e" => Ok(Self::E),
            "se" => Ok(Self::Se),
            "s" => Ok(Self::S),
            "sw" => Ok(Self::Sw),
            "w" => Ok(Self::W),
            "nw" => Ok(Self::Nw),
            _ => Err(MotionError::UnknownLocation {
                value: s.to_string(),
            }),
        }
    }
}

/// Orientation of a prop relative to the grid center.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl FromStr for Orientation {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "clock" => Ok(Self::Clock),
            "counter" => Ok(Self::Counter),
            _ => Err(MotionError::UnknownOrientation {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw", alias = "clockwise")]
    Cw,
    #[serde(rename = "ccw", alias = "counter_clockwise")]
    Ccw,
    #[serde(rename = "none", alias = "norotation")]
    NoRotation,
}

impl RotationDirection {
    /// `-1` for counter-clockwise, `+1` otherwise.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Self::Ccw => -1.0,
            Self::Cw | Self::NoRotation => 1.0,
        }
    }
}

/// Number of turns in a motion. One turn is half a revolution (π radians).
///
/// `Float` is the `"fl"` placeholder for unspecified continuous rotation and
/// contributes nothing to rotation math.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTurns", into = "RawTurns")]
pub enum Turns {
    Count(f64),
    Float,
}

impl Turns {
    pub const FLOAT_PLACEHOLDER: &'static str = "fl";

    /// Numeric turn count used for delta math.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Self::Count(n) => *n,
            Self::Float => 0.0,
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value() > 0.0
    }
}

impl Default for Turns {
    fn default() -> Self {
        Self::Count(0.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTurns {
    Count(f64),
    Text(String),
}

impl TryFrom<RawTurns> for Turns {
    type Error = MotionError;

    fn try_from(raw: RawTurns) -> Result<Self, Self::Error> {
        match raw {
            RawTurns::Count(n) if n.is_finite() => Ok(Turns::Count(n)),
            RawTurns::Count(n) => Err(MotionError::InvalidTurns {
                value: n.to_string(),
            }),
            RawTurns::Text(s) if s == Turns::FLOAT_PLACEHOLDER => Ok(Turns::Float),
            RawTurns::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Turns::Count(n)),
                _ => Err(MotionError::InvalidTurns { value: s }),
            },
        }
    }
}

impl From<Turns> for RawTurns {
    fn from(turns: Turns) -> Self {
        match turns {
            Turns::Count(n) => RawTurns::Count(n),
            Turns::Float => RawTurns::Text(Turns::FLOAT_PLACEHOLDER.to_string()),
        }
    }
}

/// One prop's movement during a beat. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub motion_type: MotionType,
    pub start_location: Location,
    pub end_location: Location,
    pub start_orientation: Orientation,
    pub end_orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_direction: Option<RotationDirection>,
    #[serde(default)]
    pub turns: Turns,
}

impl Motion {
    pub fn new(
        motion_type: MotionType,
        start_location: Location,
        end_location: Location,
        start_orientation: Orientation,
        end_orientation: Orientation,
    ) -> Self {
        Self {
            motion_type,
            start_location,
            end_location,
            start_orientation,
            end_orientation,
            rotation_direction: None,
            turns: Turns::default(),
        }
    }

    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_direction(mut self, direction: RotationDirection) -> Self {
        self.rotation_direction = Some(direction);
        self
    }

    /// Rotation direction after applying the per-type default for motions
    /// that do not specify one.
    pub fn effective_direction(&self) -> RotationDirection {
        self.rotation_direction.unwrap_or(match self.motion_type {
            MotionType::Pro | MotionType::Anti | MotionType::Dash => RotationDirection::Cw,
            MotionType::Static | MotionType::Float | MotionType::Unknown => {
                RotationDirection::NoRotation
            }
        })
    }
}

/// A single beat: one motion per prop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BeatData {
    #[serde(default)]
    pub beat: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Motion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<Motion>,
}

impl BeatData {
    pub fn new(beat: u32, first: Motion, second: Motion) -> Self {
        Self {
            beat,
            first: Some(first),
            second: Some(second),
        }
    }

    pub fn motion(&self, prop: PropId) -> Option<&Motion> {
        match prop {
            PropId::First => self.first.as_ref(),
            PropId::Second => self.second.as_ref(),
        }
    }

    /// Motion for `prop`, or a precondition error naming the beat.
    pub fn require(&self, prop: PropId) -> Result<&Motion, MotionError> {
        self.motion(prop).ok_or(MotionError::MissingMotion {
            beat: self.beat,
            prop,
        })
    }
}
