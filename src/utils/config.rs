/// Defaults of the command line harness.
pub struct Config;

impl Config {
    pub const GRID_SIDE: usize = 100;
    pub const FRAMES: u64 = 300;
    /// Delay between rendered frames.
    pub const FRAME_INTERVAL_MS: u64 = 88;
    pub const FILL_RATE: f64 = 0.5;
    /// Side of the centered square filled by the random scenario.
    pub const SEEDED_REGION_SIDE: usize = 20;

    pub const ON_CHAR: char = '#';
    pub const OFF_CHAR: char = '.';

    pub fn max_fps() -> f64 {
        1000. / Self::FRAME_INTERVAL_MS as f64
    }
}
