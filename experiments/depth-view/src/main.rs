use {
    anyhow::Result,
    base::log_fatal,
    clap::Parser,
    depth_view::*,
    image::Colorizer,
    video::DepthIn,
};

fn run_session(cli: &Cli) -> Result<(), ViewerError> {
    let depthin = DepthIn::open(cli.source()?, cli.depthin_config())?;
    let colorizer = Colorizer::new().with_gain(cli.gain);
    let mut viewer = DepthViewer::new(depthin, colorizer, StatusLine::stdout(!cli.no_clear));
    run_window(&mut viewer, &WindowConfig::default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.log_dir {
        Some(dir) => base::init_file_logger(dir.clone(), cli.log_level)?,
        None => base::init_stdout_logger(cli.log_level),
    }

    log::info!("{}", APP_NAME);
    if let Err(error) = supervise(cli.restart, || run_session(&cli)) {
        if let ViewerError::Video(video) = &error {
            if let Some(call) = video.failed_call() {
                log_fatal!("RealSense error calling {}: {}", call, video.original());
            }
        }
        log_fatal!("{}", error);
    }
    Ok(())
}
