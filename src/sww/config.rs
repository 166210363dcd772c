/// Wet/dry threshold in length units (m). The format does not store wet/dry
/// state; water at rest still carries a small numerical residue.
pub const DEPTH_THRESHOLD: f64 = 1e-4;

/// Seconds per hour; SWW times are in seconds, outputs in hours.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Configuration for loading SWW files.
#[derive(Clone, Debug)]
pub struct SwwLoadConfig {
    /// Elements with any node depth above this are active (wet)
    pub depth_threshold: f64,
    /// Raw time values are divided by this to get output time
    pub time_scale: f64,
    /// Add `xllcorner`/`yllcorner` to node coordinates
    pub apply_origin_offset: bool,
    /// Decode momentum when `xmomentum`/`ymomentum` are present
    pub load_momentum: bool,
}

impl Default for SwwLoadConfig {
    fn default() -> Self {
        Self {
            depth_threshold: DEPTH_THRESHOLD,
            time_scale: SECONDS_PER_HOUR,
            apply_origin_offset: true,
            load_momentum: true,
        }
    }
}

impl SwwLoadConfig {
    /// Create configuration with standard parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wet/dry depth threshold.
    pub fn with_depth_threshold(mut self, threshold: f64) -> Self {
        self.depth_threshold = threshold;
        self
    }

    /// Set the time divisor (must be positive; non-positive values are ignored).
    pub fn with_time_scale(mut self, scale: f64) -> Self {
        if scale > 0.0 {
            self.time_scale = scale;
        }
        self
    }

    /// Enable/disable the origin offset.
    pub fn with_origin_offset(mut self, apply: bool) -> Self {
        self.apply_origin_offset = apply;
        self
    }

    /// Enable/disable momentum decoding.
    pub fn with_momentum(mut self, load: bool) -> Self {
        self.load_momentum = load;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwwLoadConfig::new();
        assert_eq!(config.depth_threshold, 1e-4);
        assert_eq!(config.time_scale, 3600.0);
        assert!(config.apply_origin_offset);
        assert!(config.load_momentum);
    }

    #[test]
    fn test_builder() {
        let config = SwwLoadConfig::new()
            .with_depth_threshold(0.01)
            .with_time_scale(60.0)
            .with_origin_offset(false)
            .with_momentum(false);

        assert_eq!(config.depth_threshold, 0.01);
        assert_eq!(config.time_scale, 60.0);
        assert!(!config.apply_origin_offset);
        assert!(!config.load_momentum);

        let config = SwwLoadConfig::new().with_time_scale(0.0);
        assert_eq!(config.time_scale, 3600.0);
    }
}
