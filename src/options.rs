use std::str::FromStr;

use cgolview::{BoundaryPolicy, FillMode, LifeError, PauseMode, SimConfig, Viewport};

const DEFAULT_SIZE: u32 = 800;
const DEFAULT_SCALE: u32 = 8;
const DEFAULT_FPS: u32 = 60;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("w", "width", "window width in pixels", "PX");
        opts.optopt("h", "height", "window height in pixels", "PX");
        opts.optopt("s", "scale", "side of one cell in pixels", "PX");
        opts.optopt("p", "pause", "pause key behaviour: hold, toggle", "MODE");
        opts.optopt("b", "boundary", "border policy: frozen, dead, torus", "POLICY");
        opts.optopt(
            "f",
            "fill",
            "initial fill: empty, random, alternating, all",
            "TYPE",
        );
        opts.optopt("", "pattern", "built-in pattern name or RLE to stamp", "PATTERN");
        opts.optopt("", "seed", "seed for random fills", "N");
        opts.optflag("t", "threads", "step generations on a thread pool");
        opts.optopt("", "fps", "frame rate limit", "N");
        opts.optflag("", "window", "draw in a native window instead of the terminal");
        opts.optopt("", "log", "write logs to this file", "FILE");
        opts
    }

    /// Parses `args` (without the program name). Returns `Ok(None)` after printing help.
    pub fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: cgolview [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn parsed<T: FromStr>(&self, option: &'static str) -> Result<Option<T>, LifeError> {
        match self.matches.opt_str(option) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| LifeError::InvalidOption { option, value }),
        }
    }
    fn named<T>(
        &self,
        option: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, LifeError> {
        match self.matches.opt_str(option) {
            None => Ok(None),
            Some(value) => parse(&value)
                .map(Some)
                .ok_or(LifeError::InvalidOption { option, value }),
        }
    }

    fn width(&self) -> Result<u32, LifeError> {
        Ok(self.parsed("width")?.unwrap_or(DEFAULT_SIZE))
    }
    fn height(&self) -> Result<u32, LifeError> {
        Ok(self.parsed("height")?.unwrap_or(DEFAULT_SIZE))
    }
    fn scale(&self) -> Result<u32, LifeError> {
        Ok(self.parsed("scale")?.unwrap_or(DEFAULT_SCALE))
    }

    /// Surface for the window frontend. Checked for every frontend so bad
    /// sizes are reported even when the terminal ends up sizing the grid.
    pub fn window_viewport(&self) -> Result<Viewport, LifeError> {
        Viewport::new(self.width()?, self.height()?, self.scale()?)
    }
    /// Whether any of `-w`, `-h` or `-s` was given
    pub fn has_window_size(&self) -> bool {
        ["width", "height", "scale"]
            .iter()
            .any(|o| self.matches.opt_present(o))
    }
    pub fn fps(&self) -> Result<u32, LifeError> {
        match self.parsed("fps")? {
            Some(0) => Err(LifeError::InvalidOption {
                option: "fps",
                value: "0".into(),
            }),
            fps => Ok(fps.unwrap_or(DEFAULT_FPS)),
        }
    }

    pub fn window(&self) -> bool {
        self.matches.opt_present("window")
    }
    pub fn log_file(&self) -> Option<String> {
        self.matches.opt_str("log")
    }

    pub fn sim_config(&self) -> Result<SimConfig, LifeError> {
        Ok(SimConfig {
            pause_mode: self.named("pause", |s| PauseMode::new(s))?.unwrap_or_default(),
            boundary: self
                .named("boundary", |s| BoundaryPolicy::new(s))?
                .unwrap_or_default(),
            fill: self.named("fill", |s| FillMode::new(s))?.unwrap_or_default(),
            pattern: self.matches.opt_str("pattern"),
            seed: self.parsed("seed")?,
            parallel: self.matches.opt_present("threads"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    #[test]
    fn defaults_are_an_800px_window() {
        let args = args(&[]);
        assert_eq!(args.width().unwrap(), 800);
        assert_eq!(args.height().unwrap(), 800);
        assert_eq!(args.scale().unwrap(), 8);
        assert_eq!(args.fps().unwrap(), 60);
        assert!(!args.window());
        assert!(!args.has_window_size());
        let viewport = args.window_viewport().unwrap();
        assert_eq!(viewport.grid_size(), (100, 100));

        let config = args.sim_config().unwrap();
        assert_eq!(config.pause_mode, PauseMode::Hold);
        assert_eq!(config.boundary, BoundaryPolicy::Frozen);
        assert_eq!(config.fill, FillMode::Empty);
        assert!(!config.parallel);
    }

    #[test]
    fn named_options_parse() {
        let config = args(&["-p", "toggle", "--boundary", "torus", "-f", "random", "-t"])
            .sim_config()
            .unwrap();
        assert_eq!(config.pause_mode, PauseMode::Toggle);
        assert_eq!(config.boundary, BoundaryPolicy::Torus);
        assert_eq!(config.fill, FillMode::Random);
        assert!(config.parallel);
    }

    #[test]
    fn seed_and_pattern_pass_through() {
        let config = args(&["--seed", "42", "--pattern", "glider"])
            .sim_config()
            .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.pattern.as_deref(), Some("glider"));
    }

    #[test]
    fn bad_values_are_reported() {
        let err = args(&["--pause", "sometimes"]).sim_config().unwrap_err();
        assert!(matches!(err, LifeError::InvalidOption { option: "pause", .. }));

        let err = args(&["-s", "big"]).scale().unwrap_err();
        assert!(matches!(err, LifeError::InvalidOption { option: "scale", .. }));

        assert!(args(&["--fps", "0"]).fps().is_err());
    }

    #[test]
    fn window_size_is_validated() {
        let err = args(&["-s", "big"]).window_viewport().unwrap_err();
        assert!(matches!(err, LifeError::InvalidOption { option: "scale", .. }));
        let err = args(&["-s", "0"]).window_viewport().unwrap_err();
        assert!(matches!(err, LifeError::ZeroScale));
        assert!(args(&["-w", "0"]).window_viewport().is_err());

        let sized = args(&["-w", "320", "-h", "240", "-s", "4"]);
        assert!(sized.has_window_size());
        assert_eq!(sized.window_viewport().unwrap().grid_size(), (80, 60));
    }

    #[test]
    fn unknown_flags_fail_to_parse() {
        assert!(Args::new(&["--bogus"]).is_err());
    }
}
