use std::fmt;
use std::str::FromStr;

/// PRCA event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BarebackRiding,
    SteerWrestling,
    TeamRoping,
    SaddleBroncRiding,
    TieDownRoping,
    BarrelRacing,
    BullRiding,
    BreakawayRoping,
    AllAround,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::BarebackRiding,
        Category::SteerWrestling,
        Category::TeamRoping,
        Category::SaddleBroncRiding,
        Category::TieDownRoping,
        Category::BarrelRacing,
        Category::BullRiding,
        Category::BreakawayRoping,
        Category::AllAround,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::BarebackRiding => "Bareback Riding",
            Category::SteerWrestling => "Steer Wrestling",
            Category::TeamRoping => "Team Roping",
            Category::SaddleBroncRiding => "Saddle Bronc Riding",
            Category::TieDownRoping => "Tie-Down Roping",
            Category::BarrelRacing => "Barrel Racing",
            Category::BullRiding => "Bull Riding",
            Category::BreakawayRoping => "Breakaway Roping",
            Category::AllAround => "All-Around",
        }
    }

    /// Timed events are scored in seconds, roughstock events in points
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            Category::SteerWrestling
                | Category::TeamRoping
                | Category::TieDownRoping
                | Category::BarrelRacing
                | Category::BreakawayRoping
        )
    }

    /// All-Around is an earnings title across events, not a scored event
    pub fn is_scored(self) -> bool {
        self != Category::AllAround
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.label()) == wanted)
            .ok_or_else(|| format!("Unknown event category: '{}'", s.trim()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
