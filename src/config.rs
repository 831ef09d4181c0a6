//! Engine configuration and colour assignment

use crate::board::Cell;
use crate::error::EngineError;

/// How the coordinator picks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Score every candidate with alpha-beta and play the best
    #[default]
    AlphaBeta,
    /// Uniformly random legal move (baseline opponent)
    Random,
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Dedicated worker threads. Zero means the coordinator searches alone.
    pub workers: usize,
    pub strategy: Strategy,
    /// Optional ceiling on the adaptive search depth
    pub max_depth: Option<u8>,
}

impl EngineConfig {
    /// Coordinator-only configuration.
    #[must_use]
    pub fn serial() -> Self {
        Self {
            workers: 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u8>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EngineConfig {
    /// One worker per core, keeping a core for the coordinator.
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get().saturating_sub(1))
            .unwrap_or(0);
        Self {
            workers,
            strategy: Strategy::AlphaBeta,
            max_depth: None,
        }
    }
}

/// Parse the colour handed out by the referee environment.
///
/// A missing or blank assignment means black for the whole match.
pub fn parse_colour(value: Option<&str>) -> Result<Cell, EngineError> {
    let value = value.map(str::trim).unwrap_or_default();
    match value.to_ascii_lowercase().as_str() {
        "" | "b" | "black" => Ok(Cell::Black),
        "w" | "white" => Ok(Cell::White),
        _ => Err(EngineError::InvalidColour(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colour() {
        assert_eq!(parse_colour(Some("white")).unwrap(), Cell::White);
        assert_eq!(parse_colour(Some("W")).unwrap(), Cell::White);
        assert_eq!(parse_colour(Some("black")).unwrap(), Cell::Black);
        assert!(matches!(
            parse_colour(Some("green")),
            Err(EngineError::InvalidColour(_))
        ));
    }

    #[test]
    fn test_unassigned_colour_defaults_to_black() {
        assert_eq!(parse_colour(None).unwrap(), Cell::Black);
        assert_eq!(parse_colour(Some("")).unwrap(), Cell::Black);
        assert_eq!(parse_colour(Some("  ")).unwrap(), Cell::Black);
    }

    #[test]
    fn test_config_builders() {
        let config = EngineConfig::serial()
            .with_strategy(Strategy::Random)
            .with_max_depth(Some(3));
        assert_eq!(config.workers, 0);
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.max_depth, Some(3));

        assert_eq!(EngineConfig::serial().with_workers(4).workers, 4);
    }
}
