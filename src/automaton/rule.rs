//! The registry of supported automata and their transition functions.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// Index into a rule's ordered state list. State 0 is the background state.
pub type CellState = u8;

/// Largest state count of any registered rule. Histograms are sized to this.
pub const MAX_STATES: usize = 4;

/// Display metadata for one state: a label and a color hint for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateLabel {
    pub name: &'static str,
    pub color: &'static str,
}

const DEAD: StateLabel = StateLabel {
    name: "Dead",
    color: "#1e1e1e",
};
const ALIVE: StateLabel = StateLabel {
    name: "Alive",
    color: "#ce9178",
};

const TWO_STATE: [StateLabel; 2] = [DEAD, ALIVE];

const BRAIN_STATES: [StateLabel; 3] = [
    DEAD,
    ALIVE,
    StateLabel {
        name: "Dying",
        color: "#9cdcfe",
    },
];

const WIREWORLD_STATES: [StateLabel; 4] = [
    StateLabel {
        name: "Empty",
        color: "#1e1e1e",
    },
    StateLabel {
        name: "Electron Head",
        color: "#ce9178",
    },
    StateLabel {
        name: "Electron Tail",
        color: "#9cdcfe",
    },
    StateLabel {
        name: "Conductor",
        color: "#6a9955",
    },
];

/// One of the supported automata.
///
/// Every variant is a pure parameter table: the transition reads only the
/// neighbor histogram and the cell's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// B3/S23.
    #[default]
    GameOfLife,
    /// B3678/S34678.
    DayAndNight,
    /// B2/S (no survival).
    Seeds,
    /// Firing cells always move to dying, dying cells always turn off.
    BriansBrain,
    /// Electron heads travel along conductors.
    Wireworld,
}

impl Rule {
    /// All rules in registry order.
    pub const ALL: [Rule; 5] = [
        Rule::GameOfLife,
        Rule::DayAndNight,
        Rule::Seeds,
        Rule::BriansBrain,
        Rule::Wireworld,
    ];

    /// Look up a rule by its registry position.
    pub fn from_index(index: usize) -> Result<Rule> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::RuleIndex(index))
    }

    /// Position of this rule in [`Rule::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a rule by display name or slug, ignoring case.
    pub fn from_name(name: &str) -> Result<Rule> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rule| {
                rule.name().eq_ignore_ascii_case(wanted)
                    || rule.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| EngineError::UnknownRule(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::GameOfLife => "Game of Life",
            Rule::DayAndNight => "Day and Night",
            Rule::Seeds => "Seeds",
            Rule::BriansBrain => "Brian's Brain",
            Rule::Wireworld => "Wireworld",
        }
    }

    /// Lowercase, hyphen-separated name, e.g. `brian's-brain`.
    pub fn slug(self) -> String {
        self.name().replace(' ', "-").to_lowercase()
    }

    /// Ordered state labels. Index in this slice is the state value.
    pub fn states(self) -> &'static [StateLabel] {
        match self {
            Rule::GameOfLife | Rule::DayAndNight | Rule::Seeds => &TWO_STATE,
            Rule::BriansBrain => &BRAIN_STATES,
            Rule::Wireworld => &WIREWORLD_STATES,
        }
    }

    #[inline]
    pub fn num_states(self) -> usize {
        self.states().len()
    }

    /// Compute the next state of a cell.
    ///
    /// `histogram[s]` is the number of the cell's eight neighbors in state `s`;
    /// it must hold at least [`Rule::num_states`] entries. `current` must be a
    /// valid state for this rule. The result is always a valid state.
    #[inline]
    pub fn transition(self, histogram: &[u8], current: CellState) -> CellState {
        let alive = histogram[1];
        match self {
            Rule::GameOfLife => match alive {
                3 => 1,
                2 => current,
                _ => 0,
            },
            Rule::DayAndNight => match alive {
                3 | 6 | 7 | 8 => 1,
                4 => current,
                _ => 0,
            },
            Rule::Seeds => (alive == 2) as CellState,
            Rule::BriansBrain => match current {
                0 => (alive == 2) as CellState,
                1 => 2,
                _ => 0,
            },
            // histogram[1] counts electron heads
            Rule::Wireworld => match current {
                0 => 0,
                1 => 2,
                2 => 3,
                _ => {
                    if alive == 1 || alive == 2 {
                        1
                    } else {
                        3
                    }
                }
            },
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Rule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Rule::from_name(s)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Rule::from_name(&name).map_err(de::Error::custom)
    }
}
