use {
    crate::*,
    base::Vec2,
    image::DepthFrame,
    realsense_rust::{
        config::Config,
        context::Context,
        frame::DepthFrame as Rs2DepthFrame,
        kind::{Rs2CameraInfo, Rs2Format, Rs2StreamKind},
        pipeline::{ActivePipeline, FrameWaitError, InactivePipeline},
    },
    std::{collections::HashSet, time::Duration},
};

#[derive(Debug, Clone, Default)]
pub struct RealsenseConfig {
    pub index: Option<usize>,
    pub size: Option<Vec2<usize>>,
    pub frame_rate: Option<usize>,
}

/// Depth session on an Intel RealSense camera.
///
/// `open` creates a new context and pipeline every time so a reopen after a
/// failure starts from a clean slate.
pub struct Realsense {
    config: RealsenseConfig,
    // dropped before the context
    pipeline: Option<ActivePipeline>,
    context: Option<Context>,
}

impl Realsense {
    pub fn new(config: RealsenseConfig) -> Self {
        Self {
            config,
            pipeline: None,
            context: None,
        }
    }

    fn build_config(&self, context: &Context) -> Result<Option<Config>, VideoError> {
        if self.config.index.is_none() && self.config.size.is_none() && self.config.frame_rate.is_none() {
            // let the SDK pick its default streams
            return Ok(None);
        }
        let mut config = Config::new();
        if let Some(index) = self.config.index {
            let devices = context.query_devices(HashSet::new());
            let device = devices.get(index).ok_or_else(|| {
                VideoError::Device(format!(
                    "RealSense device index {} out of range (found {} devices)",
                    index,
                    devices.len()
                ))
            })?;
            let serial = device
                .info(Rs2CameraInfo::SerialNumber)
                .ok_or_else(|| VideoError::Device("device has no serial number".to_string()))?;
            config
                .enable_device_from_serial(serial)
                .map_err(|e| VideoError::call("rs2_config_enable_device", format!("{:?}", serial), e))?;
        }
        let size = self.config.size.unwrap_or(Vec2::zero());
        let frame_rate = self.config.frame_rate.unwrap_or(0);
        config
            .disable_all_streams()
            .map_err(|e| VideoError::call("rs2_config_disable_all_streams", "", e))?
            .enable_stream(Rs2StreamKind::Depth, None, size.x, size.y, Rs2Format::Z16, frame_rate)
            .map_err(|e| {
                VideoError::call(
                    "rs2_config_enable_stream",
                    format!("DEPTH, {}, Z16, {} fps", size, frame_rate),
                    e,
                )
            })?;
        Ok(Some(config))
    }
}

fn copy_depth_frame(frame: &Rs2DepthFrame) -> Result<DepthFrame, VideoError> {
    let size = Vec2::new(frame.width(), frame.height());
    let data_size = frame.get_data_size();
    // the frame owns `data_size` bytes for as long as it is alive
    let data = unsafe {
        let data_ptr = (frame.get_data() as *const std::os::raw::c_void).cast::<u8>();
        std::slice::from_raw_parts(data_ptr, data_size)
    }
    .to_vec();
    let depth_units = frame
        .depth_units()
        .map_err(|e| VideoError::call("rs2_get_depth_scale", "", e))?;
    Ok(DepthFrame::new(
        size,
        frame.bits_per_pixel() / 8,
        frame.stride(),
        depth_units,
        data,
    )?)
}

impl DepthSource for Realsense {
    fn open(&mut self) -> Result<(), VideoError> {
        self.close();
        let context = Context::new().map_err(|e| VideoError::call("rs2_create_context", "", e))?;
        let config = self.build_config(&context)?;
        let pipeline = InactivePipeline::try_from(&context)
            .map_err(|e| VideoError::call("rs2_create_pipeline", "", e))?;
        let pipeline = pipeline
            .start(config)
            .map_err(|e| VideoError::call("rs2_pipeline_start", "", e))?;
        log::info!("RealSense pipeline started");
        self.pipeline = Some(pipeline);
        self.context = Some(context);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(pipeline) = self.pipeline.take() {
            drop(pipeline.stop());
            log::debug!("RealSense pipeline stopped");
        }
        self.context = None;
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<Capture, VideoError> {
        let pipeline = self
            .pipeline
            .as_mut()
            .ok_or_else(|| VideoError::Stream("pipeline not started".to_string()))?;
        let frames = match pipeline.wait(Some(timeout)) {
            Ok(frames) => frames,
            Err(FrameWaitError::DidTimeoutBeforeFrameArrival) => return Ok(Capture::Timeout),
            Err(error) => {
                return Err(VideoError::call(
                    "rs2_pipeline_wait_for_frames",
                    format!("timeout={}ms", timeout.as_millis()),
                    error,
                ));
            }
        };
        let depth = frames
            .frames_of_type::<Rs2DepthFrame>()
            .pop()
            .ok_or_else(|| VideoError::Stream("frame set has no depth frame".to_string()))?;
        Ok(Capture::Frame(copy_depth_frame(&depth)?))
    }
}
