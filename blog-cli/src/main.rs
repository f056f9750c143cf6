mod shell;

use std::io::{self, BufRead, Write};

use blog_core::BlogApp;
use blog_core::infrastructure::config::AppConfig;
use blog_core::infrastructure::logging::init_logging;
use clap::Parser;
use tracing::info;

use crate::shell::{Flow, Shell};

#[derive(Parser, Debug)]
#[clap(about = "Manage blogs and their posts for one in-memory session")]
struct Cli {
    /// Start without the sample blogs and posts
    #[clap(long)]
    no_seed: bool,

    /// Print records as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let app = if config.seed_data && !args.no_seed {
        BlogApp::seeded()
    } else {
        BlogApp::empty()
    };
    info!(
        blogs = app.blog_service().list_blogs().len(),
        posts = app.post_service().list_posts().len(),
        "session started"
    );

    let stdout = io::stdout();
    let mut shell = Shell::new(app, stdout.lock(), args.json);
    let stdin = io::stdin();

    loop {
        {
            let mut out = io::stderr();
            write!(out, "> ")?;
            out.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if shell.run_line(&line)? == Flow::Quit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}
