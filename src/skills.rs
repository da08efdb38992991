pub const SKILL_PROGRESS_CLASS: &str = "skill-progress";
pub const LEVEL_ATTRIBUTE: &str = "data-level";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillLevel(f64);

impl SkillLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| Self(value.clamp(0.0, 100.0)))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn width(self) -> String {
        format!("{}%", self.0)
    }
}

/// Progress bar that grows to its level once enough of it is visible.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    level: Option<SkillLevel>,
    threshold: f64,
    applied: Option<String>,
}

impl SkillBar {
    pub fn new(data_level: &str, threshold: f64) -> Self {
        Self {
            level: SkillLevel::parse(data_level),
            threshold,
            applied: None,
        }
    }

    pub fn level(&self) -> Option<SkillLevel> {
        self.level
    }

    pub fn applied_width(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Feeds one observer entry; returns the width the bar should have.
    pub fn observe(&mut self, intersection_ratio: f64, is_intersecting: bool) -> Option<String> {
        if self.applied.is_none() && is_intersecting && intersection_ratio >= self.threshold {
            self.applied = self.level.map(SkillLevel::width);
        }

        self.applied.clone()
    }
}
