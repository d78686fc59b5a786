/// Runtime options shared by every demonstration.
///
/// Built once by the CLI from its flags and passed by reference into each
/// `run`. Plain data: demonstrations read it, nobody mutates it.
pub struct Config {
    /// Chrome suppression level.
    ///
    /// At `1` the banner and rule lines disappear; at `2` the section
    /// headings go too. Demonstration result lines always print.
    pub quiet: u8,
    /// Skips the startup banner even on a loud run.
    pub no_banner: bool,
    /// Disables ANSI styling everywhere.
    pub no_color: bool,
    /// Seeds the process RNG so sample data repeats between runs.
    pub seed: Option<u64>,
}
