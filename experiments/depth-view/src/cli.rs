use {
    crate::*,
    clap::Parser,
    log::LevelFilter,
    std::{path::PathBuf, time::Duration},
    video::{DepthInConfig, DepthSource, Synthetic},
};

// frame rate of the generated scene
const SYNTHETIC_FRAME_RATE: f32 = 30.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "depth-view", about = "Show a depth camera stream and the distance under the cursor")]
pub struct Cli {
    /// How long to wait for each frame before restarting the session
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Fresh sessions to try after a failed frame wait
    #[arg(long, default_value_t = 2)]
    pub retries: usize,

    /// What to do when the camera cannot be recovered
    #[arg(long, value_enum, default_value_t = RestartPolicy::Exit)]
    pub restart: RestartPolicy,

    /// Show a generated scene instead of a camera
    #[arg(long)]
    pub synthetic: bool,

    /// Index of the RealSense device to open
    #[arg(long)]
    pub device_index: Option<usize>,

    /// Gain applied to 16-bit depth before the hue ramp
    #[arg(long, default_value_t = image::DEFAULT_GAIN)]
    pub gain: f32,

    /// Append to the status line instead of redrawing it
    #[arg(long)]
    pub no_clear: bool,

    /// Write logs into daily files in this directory instead of stdout
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}

impl Cli {
    pub fn depthin_config(&self) -> DepthInConfig {
        DepthInConfig::default()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_max_retries(self.retries)
    }

    pub fn source(&self) -> Result<Box<dyn DepthSource>, ViewerError> {
        if self.synthetic {
            return Ok(Box::new(Synthetic::new(WINDOW_SIZE, SYNTHETIC_FRAME_RATE)));
        }
        self.camera_source()
    }

    #[cfg(feature = "realsense")]
    fn camera_source(&self) -> Result<Box<dyn DepthSource>, ViewerError> {
        use video::depthin::realsense::{Realsense, RealsenseConfig};
        Ok(Box::new(Realsense::new(RealsenseConfig {
            index: self.device_index,
            ..Default::default()
        })))
    }

    #[cfg(not(feature = "realsense"))]
    fn camera_source(&self) -> Result<Box<dyn DepthSource>, ViewerError> {
        Err(ViewerError::Video(video::VideoError::Device(
            "built without RealSense support, rebuild with --features realsense or pass --synthetic"
                .to_string(),
        )))
    }
}
