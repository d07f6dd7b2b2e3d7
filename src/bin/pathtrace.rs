use clap::*;

use pathtrace::core::base::*;
use pathtrace::core::camera::*;
use pathtrace::core::error::*;
use pathtrace::core::imageio::*;
use pathtrace::core::integrator::*;
use pathtrace::core::misc::*;
use pathtrace::core::options::*;
use pathtrace::scenes::*;
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread::available_parallelism;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version, disable_help_flag = true)]
struct CommandOptions {
    /// Built-in scene to render (ring, redcube, room, backdrop).
    #[arg(long, default_value = "redcube", value_name = "name")]
    pub scene: String,

    /// Number of frames to accumulate.
    #[arg(short, long, value_name = "num")]
    pub frames: Option<u32>,

    /// Output image width in pixels.
    #[arg(long, default_value = "320", value_name = "num")]
    pub width: u32,

    /// Output image height in pixels.
    #[arg(long, default_value = "240", value_name = "num")]
    pub height: u32,

    /// Maximum number of surface interactions per path.
    #[arg(long, value_name = "num")]
    pub maxdepth: Option<u32>,

    /// Read renderer settings from a JSON file. Flags override its values.
    #[arg(long, value_name = "filename")]
    pub options: Option<PathBuf>,

    /// Write the final image to the given filename.
    #[arg(short, long, default_value = "pathtrace.png", value_name = "filename")]
    pub outfile: PathBuf,

    /// Print this help text.
    #[arg(short, long, action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Use specified number of threads for rendering.
    #[arg(short = 'j', long = "nthreads", value_name = "num")]
    pub nthreads: Option<usize>,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn load_options(opts: &CommandOptions) -> Result<RenderOptions, TracerError> {
    let mut options = match opts.options.as_ref() {
        Some(path) => RenderOptions::from_json_file(path)?,
        None => RenderOptions::default(),
    };
    if let Some(frames) = opts.frames {
        options.frames = frames;
    }
    if let Some(maxdepth) = opts.maxdepth {
        options.max_depth = maxdepth;
    }
    return Ok(options);
}

fn render(opts: &CommandOptions) -> Result<(), TracerError> {
    let options = load_options(opts)?;
    let scene = Arc::new(load_scene(&opts.scene)?);
    let camera = Camera::from_field_of_view(
        &Point3f::zero(),
        options.field_of_view,
        opts.width,
        opts.height,
    );
    let frames = options.frames;
    let mut render_loop = RenderLoop::new(scene, options);

    let mut reporter = if opts.quiet {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new(frames as usize, &opts.scene)
    };
    for frame_number in 0..frames {
        let uniforms = Uniforms::new(opts.width, opts.height, frame_number, &camera);
        let stats = render_loop.render_frame(&uniforms)?;
        reporter.set_message(format!("{} emitted", stats.emitted));
        reporter.update(1);
    }
    reporter.done();

    write_image(&opts.outfile, opts.width, opts.height, &render_loop.to_rgb())?;
    info!("Wrote {}", opts.outfile.display());
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    if let Some(nthreads) = opts.nthreads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(nthreads)
            .build_global()
        {
            warn!("{}", e);
        }
    }

    if !opts.quiet {
        let nthreads = opts
            .nthreads
            .unwrap_or_else(|| available_parallelism().map(|n| n.get()).unwrap_or(1));
        let version = env!("CARGO_PKG_VERSION");
        println!("pathtrace version {} [Using {} threads]", version, nthreads);
        println!();
    }

    if let Err(e) = render(&opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
