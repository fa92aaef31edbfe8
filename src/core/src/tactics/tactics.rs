use serde::Serialize;

pub const TACTIC_MIN: f64 = 0.05;
pub const TACTIC_MAX: f64 = 0.95;

/// Minute after which a trailing side chases the game and a leading side
/// sits back.
pub const LATE_GAME_MINUTE: u32 = 70;
/// Minutes before this count as the cautious opening spell.
pub const OPENING_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TacticsProfile {
    pub attack: f64,
    pub press: f64,
    pub long_ball: f64,
}

impl TacticsProfile {
    /// Builds a profile with every dial clamped into `[0.05, 0.95]`
    pub fn new(attack: f64, press: f64, long_ball: f64) -> Self {
        TacticsProfile {
            attack: clamp_dial(attack),
            press: clamp_dial(press),
            long_ball: clamp_dial(long_ball),
        }
    }

    /// Baseline bias for a formation code such as `"433"`. Unknown codes get
    /// the 4-4-2 baseline.
    pub fn formation_bias(code: &str) -> Self {
        Formation::from_code(code).bias()
    }

    pub fn with_modifiers(&self, modifiers: MentalityModifiers) -> Self {
        TacticsProfile::new(
            self.attack + modifiers.attack,
            self.press + modifiers.press,
            self.long_ball + modifiers.long_ball,
        )
    }

    /// Re-derives the profile for the current game situation.
    /// `score_diff` is own goals minus opponent goals.
    pub fn dynamic(&self, minute: u32, score_diff: i32) -> Self {
        let mut attack = self.attack;
        let mut press = self.press;
        let mut long_ball = self.long_ball;

        if minute > LATE_GAME_MINUTE && score_diff < 0 {
            attack += 0.15;
            press += 0.10;
            long_ball += 0.05;
        }

        if minute > LATE_GAME_MINUTE && score_diff > 0 {
            attack -= 0.10;
            press -= 0.10;
        }

        if minute < OPENING_MINUTES {
            attack -= 0.05;
        }

        TacticsProfile::new(attack, press, long_ball)
    }

    pub fn description(&self) -> String {
        let mut labels = vec![if self.attack > 0.6 {
            "Offensive"
        } else if self.attack < 0.4 {
            "Defensive"
        } else {
            "Balanced"
        }];

        if self.press > 0.6 {
            labels.push("High Press");
        }

        if self.long_ball > 0.3 {
            labels.push("Long Ball");
        }

        labels.join(", ")
    }
}

impl Default for TacticsProfile {
    fn default() -> Self {
        Formation::T442.bias()
    }
}

fn clamp_dial(value: f64) -> f64 {
    if value.is_nan() {
        return TACTIC_MIN;
    }

    value.clamp(TACTIC_MIN, TACTIC_MAX)
}

pub fn formation_bias(code: &str) -> TacticsProfile {
    TacticsProfile::formation_bias(code)
}

pub fn mentality_modifiers(mentality: &str) -> MentalityModifiers {
    Mentality::from_code(mentality).modifiers()
}

pub fn dynamic_tactics(base: &TacticsProfile, minute: u32, score_diff: i32) -> TacticsProfile {
    base.dynamic(minute, score_diff)
}

pub fn tactic_description(profile: &TacticsProfile) -> String {
    profile.description()
}

#[derive(Copy, Debug, Eq, PartialEq, Clone, Hash, Serialize)]
pub enum Formation {
    T442,
    T433,
    T352,
    T451,
    T541,
    T343,
}

pub const FORMATION_BIAS: &[(Formation, TacticsProfile)] = &[
    (
        Formation::T442,
        TacticsProfile {
            attack: 0.50,
            press: 0.50,
            long_ball: 0.25,
        },
    ),
    (
        Formation::T433,
        TacticsProfile {
            attack: 0.65,
            press: 0.60,
            long_ball: 0.20,
        },
    ),
    (
        Formation::T352,
        TacticsProfile {
            attack: 0.55,
            press: 0.55,
            long_ball: 0.30,
        },
    ),
    (
        Formation::T451,
        TacticsProfile {
            attack: 0.40,
            press: 0.45,
            long_ball: 0.25,
        },
    ),
    (
        Formation::T541,
        TacticsProfile {
            attack: 0.30,
            press: 0.35,
            long_ball: 0.35,
        },
    ),
    (
        Formation::T343,
        TacticsProfile {
            attack: 0.70,
            press: 0.65,
            long_ball: 0.20,
        },
    ),
];

impl Formation {
    pub fn all() -> Vec<Formation> {
        vec![
            Formation::T442,
            Formation::T433,
            Formation::T352,
            Formation::T451,
            Formation::T541,
            Formation::T343,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "433" | "4-3-3" => Formation::T433,
            "352" | "3-5-2" => Formation::T352,
            "451" | "4-5-1" => Formation::T451,
            "541" | "5-4-1" => Formation::T541,
            "343" | "3-4-3" => Formation::T343,
            _ => Formation::T442,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Formation::T442 => "442",
            Formation::T433 => "433",
            Formation::T352 => "352",
            Formation::T451 => "451",
            Formation::T541 => "541",
            Formation::T343 => "343",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Formation::T442 => "4-4-2",
            Formation::T433 => "4-3-3",
            Formation::T352 => "3-5-2",
            Formation::T451 => "4-5-1",
            Formation::T541 => "5-4-1",
            Formation::T343 => "3-4-3",
        }
    }

    pub fn bias(&self) -> TacticsProfile {
        let (_, profile) = FORMATION_BIAS
            .iter()
            .find(|(formation, _)| formation == self)
            .unwrap_or(&FORMATION_BIAS[0]);

        *profile
    }
}

/// Additive offsets applied on top of a formation's bias
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MentalityModifiers {
    pub attack: f64,
    pub press: f64,
    pub long_ball: f64,
}

#[derive(Copy, Debug, Eq, PartialEq, Clone, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mentality {
    Defensive,
    Balanced,
    Attacking,
    AllOutAttack,
}

impl Mentality {
    pub fn all() -> Vec<Mentality> {
        vec![
            Mentality::Defensive,
            Mentality::Balanced,
            Mentality::Attacking,
            Mentality::AllOutAttack,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "defensive" => Mentality::Defensive,
            "attacking" => Mentality::Attacking,
            "all_out_attack" => Mentality::AllOutAttack,
            _ => Mentality::Balanced,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Mentality::Defensive => "defensive",
            Mentality::Balanced => "balanced",
            Mentality::Attacking => "attacking",
            Mentality::AllOutAttack => "all_out_attack",
        }
    }

    pub fn modifiers(&self) -> MentalityModifiers {
        match self {
            Mentality::Defensive => MentalityModifiers {
                attack: -0.15,
                press: -0.10,
                long_ball: 0.05,
            },
            Mentality::Balanced => MentalityModifiers::default(),
            Mentality::Attacking => MentalityModifiers {
                attack: 0.10,
                press: 0.05,
                long_ball: 0.0,
            },
            Mentality::AllOutAttack => MentalityModifiers {
                attack: 0.20,
                press: 0.15,
                long_ball: 0.10,
            },
        }
    }
}

/// A side's tactical choice before kick-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamTactics {
    pub formation: Formation,
    pub mentality: Mentality,
}

impl TeamTactics {
    pub fn new(formation: Formation, mentality: Mentality) -> Self {
        TeamTactics {
            formation,
            mentality,
        }
    }

    pub fn from_codes(formation: &str, mentality: &str) -> Self {
        TeamTactics::new(Formation::from_code(formation), Mentality::from_code(mentality))
    }

    pub fn base_profile(&self) -> TacticsProfile {
        self.formation.bias().with_modifiers(self.mentality.modifiers())
    }
}

impl Default for TeamTactics {
    fn default() -> Self {
        TeamTactics::new(Formation::T442, Mentality::Balanced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchTactics {
    pub home: TeamTactics,
    pub away: TeamTactics,
}

impl MatchTactics {
    pub fn new(home: TeamTactics, away: TeamTactics) -> Self {
        MatchTactics { home, away }
    }
}
