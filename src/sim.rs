use crate::{BoundaryPolicy, FillMode, GameOfLife, Grid, LifeError, Pos2, Viewport, patterns};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// How the pause key behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseMode {
    /// Paused only while the key is held down
    #[default]
    Hold,
    /// Each press flips between paused and running
    Toggle,
}
impl PauseMode {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "hold" => Some(Self::Hold),
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Frontend-independent user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    PauseDown,
    PauseUp,
    Reset,
    Randomize,
    /// Pointer moved to this surface pixel
    PointerMoved(Pos2),
    Pressed(PointerButton),
    Released(PointerButton),
}

#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub pause_mode: PauseMode,
    pub boundary: BoundaryPolicy,
    pub fill: FillMode,
    /// Built-in pattern name or inline run-length pattern, replaces the fill
    pub pattern: Option<String>,
    pub seed: Option<u64>,
    /// Step on the rayon pool instead of the frame loop thread
    pub parallel: bool,
}

/// The state threaded through the frame loop
#[derive(Debug)]
pub struct Simulation {
    engine: GameOfLife,
    viewport: Viewport,
    pause_mode: PauseMode,
    paused: bool,
    reset_pending: bool,
    randomize_pending: bool,
    /// Cell under the pointer
    pointer: Pos2,
    left_held: bool,
    right_held: bool,
    parallel: bool,
    rng: StdRng,
}

impl Simulation {
    pub fn new(viewport: &Viewport, config: SimConfig) -> Result<Self, LifeError> {
        let (n_x, n_y) = viewport.grid_size();
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut grid = Grid::new(n_x, n_y)?;
        grid.fill(config.fill, &mut rng);
        if let Some(pattern) = &config.pattern {
            let cells = patterns::resolve(pattern, patterns::interior(&grid))?;
            patterns::place_centered(&mut grid, &cells)?;
        }

        info!(
            n_x,
            n_y,
            scale = viewport.scale(),
            seed,
            boundary = ?config.boundary,
            pause_mode = ?config.pause_mode,
            fill = ?config.fill,
            pattern = config.pattern.as_deref(),
            alive = grid.alive_count(),
            "simulation created"
        );

        Ok(Self {
            engine: GameOfLife::new(grid, config.boundary),
            viewport: *viewport,
            pause_mode: config.pause_mode,
            paused: false,
            reset_pending: false,
            randomize_pending: false,
            pointer: Pos2::zero(),
            left_held: false,
            right_held: false,
            parallel: config.parallel,
            rng,
        })
    }

    /// Applies one input event. Grid changes wait for [`Simulation::tick`].
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Quit => {}
            Input::PauseDown => {
                self.paused = match self.pause_mode {
                    PauseMode::Hold => true,
                    PauseMode::Toggle => !self.paused,
                };
                debug!(paused = self.paused, "pause key pressed");
            }
            Input::PauseUp => {
                if self.pause_mode == PauseMode::Hold {
                    self.paused = false;
                    debug!("pause key released");
                }
            }
            Input::Reset => self.reset_pending = true,
            Input::Randomize => self.randomize_pending = true,
            Input::PointerMoved(px) => self.pointer = self.viewport.cell_at(px),
            Input::Pressed(PointerButton::Left) => self.left_held = true,
            Input::Pressed(PointerButton::Right) => self.right_held = true,
            Input::Released(PointerButton::Left) => self.left_held = false,
            Input::Released(PointerButton::Right) => self.right_held = false,
        }
    }

    /// Runs one frame of simulation
    ///
    /// Steps the grid when running, or paints the hovered cell when paused.
    /// Pending reset and randomize requests are applied afterwards, in that
    /// order. Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        let stepped = if self.paused {
            self.paint();
            false
        } else {
            if self.parallel {
                self.engine.next_generation_parallel();
            } else {
                self.engine.next_generation();
            }
            true
        };

        if std::mem::take(&mut self.reset_pending) {
            self.engine.reset();
            debug!("grid reset");
        }
        if std::mem::take(&mut self.randomize_pending) {
            self.engine.randomize(&mut self.rng);
            debug!(alive = self.engine.alive_count(), "grid randomized");
        }
        stepped
    }

    fn paint(&mut self) {
        let grid = self.engine.grid_mut();
        // right is applied last, so it wins when both buttons are held
        if self.left_held {
            grid.set(self.pointer, true);
        }
        if self.right_held {
            grid.set(self.pointer, false);
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.engine.grid_mut()
    }
    #[inline]
    pub fn engine(&self) -> &GameOfLife {
        &self.engine
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The cell drawn highlighted, only while paused
    #[inline]
    pub fn hovered(&self) -> Option<Pos2> {
        self.paused.then_some(self.pointer)
    }

    #[inline]
    pub fn pause_mode(&self) -> PauseMode {
        self.pause_mode
    }
}
