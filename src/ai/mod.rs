// Scripted opponents for the CPU paddle

mod chase_bot;
mod opponent;
mod step_bot;

pub use chase_bot::ChaseBot;
pub use opponent::Opponent;
pub use step_bot::StepBot;

use crate::config::AiConfig;

/// Tracking style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    /// Proportional chase - closes a fraction of the gap every tick
    Chase,
    /// Constant-speed stepper with a dead-zone around the ball
    Step,
}

impl OpponentKind {
    pub fn display_name(&self) -> &str {
        match self {
            OpponentKind::Chase => "Chase",
            OpponentKind::Step => "Step",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            OpponentKind::Chase => "Smooth pursuit - always drifting toward the ball",
            OpponentKind::Step => "Marches at fixed speed, ignores near misses",
        }
    }

    pub fn all() -> Vec<OpponentKind> {
        vec![OpponentKind::Chase, OpponentKind::Step]
    }

    /// Resolve the config `style` string; unknown names fall back to Chase.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "chase" => OpponentKind::Chase,
            "step" => OpponentKind::Step,
            other => {
                tracing::debug!(style = other, "unknown opponent style, using chase");
                OpponentKind::Chase
            }
        }
    }
}

/// Create an opponent instance from a kind and the AI config section
pub fn create_opponent(kind: OpponentKind, config: &AiConfig) -> Box<dyn Opponent> {
    match kind {
        OpponentKind::Chase => Box::new(ChaseBot::new(config.chase_gain)),
        OpponentKind::Step => Box::new(StepBot::new(config.step_speed, config.dead_zone)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_resolve_with_fallback() {
        assert_eq!(OpponentKind::from_name("chase"), OpponentKind::Chase);
        assert_eq!(OpponentKind::from_name("Step"), OpponentKind::Step);
        assert_eq!(OpponentKind::from_name("nonsense"), OpponentKind::Chase);
    }

    #[test]
    fn factory_builds_the_requested_tracker() {
        let config = AiConfig::default();
        assert_eq!(create_opponent(OpponentKind::Chase, &config).name(), "Chase");
        assert_eq!(create_opponent(OpponentKind::Step, &config).name(), "Step");
    }
}
