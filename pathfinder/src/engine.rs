// engine.rs - Path search lifecycle over an editable grid

use crate::config::{MAX_SPEED, PathConfig};
use crate::error::{PathError, Result};
use crate::heuristic::{Algorithm, Heuristic, SearchOptions};
use crate::node::PathNode;
use crate::search::{Search, SearchStep};
use grid::{Grid, GridNode, NodeColor, Point};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathingState {
    NotStarted,
    Running,
    Paused,
    PathFound,
    PathNotFound,
}

impl PathingState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::PathFound | Self::PathNotFound)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted   => "State: Not Started",
            Self::Running      => "State: Running...",
            Self::Paused       => "State: Paused",
            Self::PathFound    => "State: Path found",
            Self::PathNotFound => "State: No path found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PathOutcome {
    Found { path: Vec<Point>, cost: f64, expansions: usize },
    NotFound { expansions: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathStep {
    Expanded(Point),
    Finished(PathOutcome),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSnapshot {
    pub state      : PathingState,
    pub dimension  : i32,
    pub start      : Option<Point>,
    pub goal       : Option<Point>,
    pub walls      : Vec<Point>,
    pub frontier   : Vec<GridNode>,   // Open nodes tagged Open/Closed
    pub closed     : Vec<Point>,
    pub path       : Vec<Point>,
    pub expansions : usize,
}

pub struct PathEngine {
    config     : PathConfig,
    grid       : Grid,
    options    : SearchOptions,
    show_steps : bool,
    speed      : u32,
    state      : PathingState,
    search     : Option<Search>,
    path       : Vec<PathNode>,
    outcome    : Option<PathOutcome>,
}

impl PathEngine {
    /// Creates an engine with the default layout: start in the top-left
    /// corner, goal in the bottom-right one.
    pub fn new(config: PathConfig) -> Result<Self> {
        let grid = Grid::with_bounds(config.dimension, config.min_dimension, config.max_dimension)?;
        let mut engine = Self::with_grid(grid, config);
        engine.place_default_markers();
        Ok(engine)
    }

    /// Wraps an already populated grid.
    pub fn with_grid(grid: Grid, config: PathConfig) -> Self {
        Self {
            options: config.search_options(),
            show_steps: config.show_steps,
            speed: config.speed.min(MAX_SPEED),
            config,
            grid,
            state: PathingState::NotStarted,
            search: None,
            path: Vec::new(),
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn state(&self) -> PathingState {
        self.state
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    // Option changes take effect at the next search setup.

    pub fn set_allow_diagonals(&mut self, allow: bool) {
        self.options.allow_diagonals = allow;
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.options.heuristic = heuristic;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.options.algorithm = algorithm;
    }

    pub fn set_show_steps(&mut self, show_steps: bool) {
        self.show_steps = show_steps;
    }

    pub fn set_speed(&mut self, speed: u32) -> u32 {
        self.speed = speed.min(MAX_SPEED);
        self.speed
    }

    /// Pause between expansions; zero when steps are not shown.
    pub fn step_delay(&self) -> Duration {
        if self.show_steps {
            Duration::from_millis(u64::from(MAX_SPEED - self.speed))
        } else {
            Duration::ZERO
        }
    }

    /// Moves the start marker to `(x, y)`.
    pub fn place_start(&mut self, x: i32, y: i32) -> bool {
        self.place_unique(x, y, NodeColor::Start)
    }

    /// Moves the goal marker to `(x, y)`.
    pub fn place_goal(&mut self, x: i32, y: i32) -> bool {
        self.place_unique(x, y, NodeColor::Goal)
    }

    pub fn add_wall(&mut self, x: i32, y: i32) -> bool {
        self.grid.add_node(x, y, NodeColor::Wall)
    }

    pub fn remove_node(&mut self, x: i32, y: i32) -> bool {
        self.grid.remove_node(x, y)
    }

    /// Wipes walls and markers, restores the default dimension, options and layout.
    pub fn clear_grid(&mut self) {
        self.reset();
        self.grid.clear();
        self.grid.set_dimension(self.config.dimension);
        self.options = self.config.search_options();
        self.show_steps = self.config.show_steps;
        self.speed = self.config.speed.min(MAX_SPEED);
        self.place_default_markers();
    }

    /// Checks there is exactly one start and one goal.
    pub fn validate(&self) -> Result<(Point, Point)> {
        let start = single_marker(&self.grid, NodeColor::Start)
            .map_err(|count| if count == 0 { PathError::MissingStart } else { PathError::MultipleStarts(count) })?;
        let goal = single_marker(&self.grid, NodeColor::Goal)
            .map_err(|count| if count == 0 { PathError::MissingGoal } else { PathError::MultipleGoals(count) })?;
        Ok((start, goal))
    }

    /// Reads walls, start and goal from the grid and seeds the open queue.
    pub fn search_setup(&mut self) -> Result<()> {
        let (start, goal) = self.validate()?;

        self.path.clear();
        self.outcome = None;
        self.search = Some(Search::new(&self.grid, start, goal, self.options));
        Ok(())
    }

    /// Sets up a fresh search and marks it running.
    pub fn start(&mut self) -> Result<()> {
        self.search_setup()?;
        self.state = PathingState::Running;

        log::info!("path search started with {:?}", self.options);
        Ok(())
    }

    pub fn pause(&mut self) -> bool {
        if self.state != PathingState::Running {
            return false;
        }
        self.state = PathingState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != PathingState::Paused {
            return false;
        }
        self.state = PathingState::Running;
        true
    }

    /// Performs one expansion. Stepping without a valid start and goal ends
    /// the search as not found.
    pub fn step(&mut self) -> PathStep {
        if let Some(outcome) = &self.outcome {
            return PathStep::Finished(outcome.clone());
        }

        if self.search.is_none() {
            if let Err(err) = self.search_setup() {
                log::info!("no path: {err}");
                return self.finish(PathOutcome::NotFound { expansions: 0 });
            }
        }

        let Some(search) = self.search.as_mut() else {
            return self.finish(PathOutcome::NotFound { expansions: 0 });
        };

        match search.step() {
            SearchStep::Expanded(point) => PathStep::Expanded(point),
            SearchStep::Found(path) => {
                let expansions = search.expansions();
                let cost = path.last().map_or(0.0, |node| node.g);
                let points = path.iter().map(|node| node.point).collect();
                self.path = path;
                self.finish(PathOutcome::Found { path: points, cost, expansions })
            }
            SearchStep::Exhausted => {
                let expansions = search.expansions();
                self.finish(PathOutcome::NotFound { expansions })
            }
        }
    }

    /// Forgets the current search; the grid is kept.
    pub fn reset(&mut self) {
        self.state = PathingState::NotStarted;
        self.search = None;
        self.path.clear();
        self.outcome = None;

        log::info!("path search reset");
    }

    /// The reconstructed path, start and goal included. Empty until found.
    pub fn path(&self) -> &[PathNode] {
        &self.path
    }

    pub fn outcome(&self) -> Option<&PathOutcome> {
        self.outcome.as_ref()
    }

    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn snapshot(&self) -> PathSnapshot {
        let mut closed: Vec<Point> = self
            .search
            .as_ref()
            .map(|search| search.closed().iter().copied().collect())
            .unwrap_or_default();
        closed.sort();

        PathSnapshot {
            state: self.state,
            dimension: self.grid.dimension(),
            start: self.grid.nodes_of_color(NodeColor::Start).first().map(GridNode::point),
            goal: self.grid.nodes_of_color(NodeColor::Goal).first().map(GridNode::point),
            walls: self.grid.nodes_of_color(NodeColor::Wall).iter().map(GridNode::point).collect(),
            frontier: self.search.as_ref().map(Search::frontier).unwrap_or_default(),
            closed,
            path: self.path.iter().map(|node| node.point).collect(),
            expansions: self.search.as_ref().map_or(0, Search::expansions),
        }
    }

    fn finish(&mut self, outcome: PathOutcome) -> PathStep {
        self.state = match outcome {
            PathOutcome::Found { .. } => PathingState::PathFound,
            PathOutcome::NotFound { .. } => PathingState::PathNotFound,
        };
        log::info!("{}: {:?}", self.state.label(), outcome);

        self.outcome = Some(outcome.clone());
        PathStep::Finished(outcome)
    }

    fn place_unique(&mut self, x: i32, y: i32, color: NodeColor) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        for node in self.grid.nodes_of_color(color) {
            self.grid.remove_node(node.x, node.y);
        }
        self.grid.add_node(x, y, color)
    }

    fn place_default_markers(&mut self) {
        let last = self.grid.dimension() - 1;
        self.place_start(0, 0);
        self.place_goal(last, last);
    }
}

fn single_marker(grid: &Grid, color: NodeColor) -> std::result::Result<Point, usize> {
    match grid.nodes_of_color(color).as_slice() {
        [node] => Ok(node.point()),
        nodes => Err(nodes.len()),
    }
}
