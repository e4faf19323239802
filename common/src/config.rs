#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Print results as a JSON array instead of one address per line.
    pub json: bool,
    /// 0 prints everything, 1 hides headers, 2 also hides the summary.
    pub quiet: u8,
}
