//! The CLI interface for displayrot
//!
//! Use the `--help` flag to see the available options.
use color_eyre::eyre::Result;
use displayrot::Orientation;
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "displayrot",
    about = "Allows changing the rotation of displays on Windows using the CLI."
)]
struct Opts {
    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: SubCommands,
    /// Output debug info
    #[structopt(short, long, global = true)]
    verbose: bool,
}

/// Selects the display to operate on, by ordinal among active devices or by
/// OS device name
#[derive(StructOpt, Debug)]
struct DeviceOpt {
    /// The ordinal of the display among active devices (0, 1, 2, ...)
    #[structopt(short, long, default_value = "0", conflicts_with = "name")]
    id: u32,
    /// The OS device name of the display, e.g. `\\.\DISPLAY1`
    #[structopt(short, long)]
    name: Option<String>,
}

/// Subcommands to select the mode of operation
#[derive(StructOpt, Debug)]
enum SubCommands {
    /// Lists all active display devices
    #[structopt(alias = "ls")]
    List,
    /// Shows the current orientation of a display
    #[structopt(alias = "st")]
    Status {
        #[structopt(flatten)]
        device: DeviceOpt,
    },
    /// Rotates a display to the given orientation
    Set {
        #[structopt(flatten)]
        device: DeviceOpt,
        /// Target orientation. One of: `default` (0), `90`, `180`, `270`
        orientation: Orientation,
    },
    /// Rotates a display back to the default orientation
    Reset {
        #[structopt(flatten)]
        device: DeviceOpt,
    },
}

/// Entry point for `displayrot`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    run(opts)
}

#[cfg(windows)]
fn run(opts: Opts) -> Result<()> {
    use color_eyre::eyre::eyre;
    use displayrot::Win32Api;

    let api = Win32Api;

    let device_name = |device: &DeviceOpt| -> Result<String> {
        match &device.name {
            Some(name) => Ok(name.clone()),
            None => displayrot::resolve_device_name(&api, device.id)
                .map_err(|e| eyre!("Display with id {} not found: {e}", device.id)),
        }
    };

    match opts.cmd {
        SubCommands::List => {
            for (index, name) in displayrot::active_device_names(&api).enumerate() {
                let orientation = displayrot::current_orientation(&api, &name)?;
                println!("{index}: {name} ({orientation})");
            }
        }
        SubCommands::Status { device } => {
            let name = device_name(&device)?;
            let orientation = displayrot::current_orientation(&api, &name)?;
            println!("{name}: {orientation}");
        }
        SubCommands::Set {
            device,
            orientation,
        } => {
            let name = device_name(&device)?;
            displayrot::apply_orientation(&api, &name, orientation)?;
            log::info!("Display orientation changed");
        }
        SubCommands::Reset { device } => {
            let name = device_name(&device)?;
            displayrot::apply_orientation(&api, &name, Orientation::Default)?;
            log::info!("Display orientation reset");
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn run(_opts: Opts) -> Result<()> {
    use color_eyre::eyre::eyre;

    Err(eyre!("displayrot only supports Windows displays"))
}
