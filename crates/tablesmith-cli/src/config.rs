use tablesmith::{GenerationOptions, Target};

/// Defaults applied when the command line leaves a setting out
#[derive(Debug, Clone)]
pub struct Config {
    /// Options used when no options file is given
    pub options: GenerationOptions,

    /// Targets generated when no `--target` is given
    pub targets: Vec<Target>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            targets: Target::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback generation options
    pub fn options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the fallback targets
    pub fn targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }
}
