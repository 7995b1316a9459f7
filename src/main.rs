use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use xmbfolio::core::deeplink;
use xmbfolio::core::settings::{self, ThemeColor};
use xmbfolio::tui::{self, RunConfig};

#[derive(Parser)]
#[command(name = "xmbfolio", about = "XMB-style portfolio for the terminal")]
struct Args {
    /// Deep link to open at, e.g. '#/projects/ledgerline'
    #[arg(long)]
    link: Option<String>,

    /// Theme override for this session (persisted only if changed in-app)
    #[arg(long, value_enum)]
    theme: Option<ThemeColor>,

    /// Start with navigation sounds off
    #[arg(long)]
    muted: bool,

    /// Jump straight past the boot sequence
    #[arg(long)]
    skip_boot: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - the terminal belongs to the TUI.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("xmbfolio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let mut loaded = settings::load();
    if let Some(theme) = args.theme {
        loaded.theme = theme;
    }
    if args.muted {
        loaded.sound_enabled = false;
    }

    let deep_link = match args.link.as_deref() {
        Some(fragment) => {
            let parsed = deeplink::parse(fragment);
            if parsed.is_none() {
                // Unknown fragment = no deep link; start at the default view.
                log::warn!("ignoring unrecognized deep link {fragment:?}");
            }
            parsed
        }
        None => None,
    };

    log::info!(
        "xmbfolio starting (theme: {}, sound: {}, link: {:?})",
        loaded.theme.as_str(),
        loaded.sound_enabled,
        deep_link.as_ref().map(|l| l.category_id.as_str())
    );

    tui::run(RunConfig {
        settings: loaded,
        deep_link,
        skip_boot: args.skip_boot,
    })
}
