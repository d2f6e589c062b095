//! Configuration file loading
//!
//! A config file is TOML when its name ends in `.toml` and YAML otherwise.
//! Every section and field is optional; missing values fall back to the
//! defaults of the interactive visualizer.

use std::path::Path;

use algoviz_core::error::{AlgovizError, AlgovizResult};
use algoviz_library::{Grid, PathfindingAlgorithm, Position, SortingAlgorithm, MAX_GRID_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Seed for obstacle generation and shuffles; random when absent
    pub seed: Option<u64>,
    pub pathfinding: PathfindingConfig,
    pub sorting: SortingConfig,
    pub render: RenderConfig,
}

/// Pathfinding session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathfindingConfig {
    pub grid_size: usize,
    /// `[row, col]`; the board's default Start when absent
    pub start: Option<[usize; 2]>,
    /// `[row, col]`; the board's default End when absent
    pub end: Option<[usize; 2]>,
    pub algorithm: PathfindingAlgorithm,
    pub random_barriers: bool,
    pub barrier_density: f64,
    pub clearance_radius: usize,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            grid_size: 80,
            start: None,
            end: None,
            algorithm: PathfindingAlgorithm::AStar,
            random_barriers: false,
            barrier_density: 0.13,
            clearance_radius: 4,
        }
    }
}

impl PathfindingConfig {
    /// Start and End resolved against the board's defaults
    pub fn endpoints(&self) -> AlgovizResult<(Position, Position)> {
        let (start, end) = Grid::default_endpoints(self.grid_size)?;
        Ok((
            self.start.map(Position::from).unwrap_or(start),
            self.end.map(Position::from).unwrap_or(end),
        ))
    }

    /// Empty grid with the configured endpoints
    pub fn build_grid(&self) -> AlgovizResult<Grid> {
        let (start, end) = self.endpoints()?;
        Grid::with_endpoints(self.grid_size, start, end)
    }
}

/// Sorting session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingConfig {
    /// Number of bars, holding the values `1..=length`
    pub length: u32,
    pub algorithm: SortingAlgorithm,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            length: 500,
            algorithm: SortingAlgorithm::Merge,
        }
    }
}

/// Terminal rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Pause after each drawn frame
    pub frame_delay_ms: u64,
    /// Draw every N-th step
    pub frames_every: usize,
    /// Skip drawing entirely, only report the outcome
    pub headless: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 0,
            frames_every: 1,
            headless: false,
        }
    }
}

impl AppConfig {
    /// Load a config file, TOML by extension and YAML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        // Auto-detect format from file extension
        let config: AppConfig = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config {}", path.display()))?
        } else {
            // Default to YAML for .yaml, .yml, or no extension
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config {}", path.display()))?
        };
        Ok(config)
    }

    /// Reject settings no session could run with
    pub fn validate(&self) -> AlgovizResult<()> {
        let pathfinding = &self.pathfinding;
        if !(2..=MAX_GRID_SIZE).contains(&pathfinding.grid_size) {
            return Err(AlgovizError::config(format!(
                "pathfinding.grid_size must be within [2, {}], got {}",
                MAX_GRID_SIZE, pathfinding.grid_size
            )));
        }

        let (start, end) = pathfinding.endpoints()?;
        for (name, position) in [("start", start), ("end", end)] {
            if position.row >= pathfinding.grid_size || position.col >= pathfinding.grid_size {
                return Err(AlgovizError::config(format!(
                    "pathfinding.{} [{}, {}] is outside the {}x{} grid",
                    name, position.row, position.col, pathfinding.grid_size, pathfinding.grid_size
                )));
            }
        }
        if start == end {
            return Err(AlgovizError::config(
                "pathfinding.start and pathfinding.end must differ",
            ));
        }

        if !(0.0..=1.0).contains(&pathfinding.barrier_density) {
            return Err(AlgovizError::config(format!(
                "pathfinding.barrier_density must be within [0, 1], got {}",
                pathfinding.barrier_density
            )));
        }
        if self.sorting.length == 0 {
            return Err(AlgovizError::config("sorting.length must be at least 1"));
        }
        if self.render.frames_every == 0 {
            return Err(AlgovizError::config("render.frames_every must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.pathfinding.endpoints().unwrap(),
            (Position::new(6, 6), Position::new(73, 73))
        );
        assert_eq!(config.sorting.length, 500);
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            r#"
seed = 9

[pathfinding]
grid_size = 20
start = [0, 0]
algorithm = "bfs"

[sorting]
algorithm = "heap"
"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pathfinding.grid_size, 20);
        assert_eq!(config.pathfinding.algorithm, PathfindingAlgorithm::BreadthFirst);
        assert_eq!(config.sorting.algorithm, SortingAlgorithm::Heap);
        // untouched fields keep their defaults
        assert_eq!(config.sorting.length, 500);
        assert_eq!(config.render, RenderConfig::default());

        let (start, end) = config.pathfinding.endpoints().unwrap();
        assert_eq!(start, Position::new(0, 0));
        assert_eq!(end, Position::new(14, 14));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(
            ".yaml",
            "pathfinding:\n  algorithm: dijkstra\n  random_barriers: true\nrender:\n  headless: true\n  frames_every: 10\n",
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.pathfinding.algorithm, PathfindingAlgorithm::Dijkstra);
        assert!(config.pathfinding.random_barriers);
        assert!(config.render.headless);
        assert_eq!(config.render.frames_every, 10);
    }

    #[test]
    fn test_unknown_algorithm_fails_to_load() {
        let file = write_config(".toml", "[sorting]\nalgorithm = \"bogo\"\n");
        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/algoviz.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validation_rules() {
        let mut config = AppConfig::default();
        config.pathfinding.end = Some([80, 3]);
        assert!(matches!(config.validate(), Err(AlgovizError::Config(_))));

        let mut config = AppConfig::default();
        config.pathfinding.start = Some([73, 73]);
        assert!(matches!(config.validate(), Err(AlgovizError::Config(_))));

        let mut config = AppConfig::default();
        config.pathfinding.barrier_density = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sorting.length = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.render.frames_every = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pathfinding.grid_size = 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pathfinding.grid_size = 5_000_000;
        assert!(matches!(config.validate(), Err(AlgovizError::Config(_))));
    }

    #[test]
    fn test_huge_clearance_builds_a_board() {
        let file = write_config(
            ".yaml",
            "pathfinding:\n  grid_size: 12\n  random_barriers: true\n  clearance_radius: 18446744073709551615\n",
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.validate().is_ok());

        let mut grid = config.pathfinding.build_grid().unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let barriers = grid.generate_obstacles(
            &mut rng,
            config.pathfinding.barrier_density,
            config.pathfinding.clearance_radius,
        );
        assert_eq!(barriers, 0);
    }

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = toml::from_str(include_str!("../algoviz.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.render.frames_every, 4);
    }
}
