// src/main.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use velocity_landing::core::constants::{BITCOIN_ADDRESS, INSTALL_ONELINER};
use velocity_landing::ui::{FileLanguageStore, MemoryClipboard, PlatformClipboard, UiController};
use velocity_landing::{i18n, t, ActionHandler, AppError, Config, Result};

/// VelocityNvim landing page: build, serve and drive it from the terminal.
#[derive(Debug, Parser)]
#[command(name = "velocity-landing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Use this config file instead of searching for velocity.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the page and write the static site
    Build {
        /// Output directory (default: build.output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Serve the page with Actix-Web
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Copy the donation address or the install one-liner
    Copy {
        #[arg(value_enum)]
        what: CopyTarget,
        /// Language whose feedback element is used
        #[arg(short, long, default_value = "de")]
        lang: String,
    },
    /// Run inline handler expressions against a fresh page
    Action {
        /// e.g. "switchLanguage('en')" "switchInstallTab('install-manual')"
        #[arg(required_unless_present = "list")]
        expressions: Vec<String>,
        /// List the available actions and exit
        #[arg(long, conflicts_with = "html")]
        list: bool,
        /// Print the resulting HTML instead of the messages
        #[arg(long)]
        html: bool,
        /// Viewport width for navigation clicks
        #[arg(long, default_value_t = velocity_landing::actions::DEFAULT_VIEWPORT_WIDTH)]
        viewport: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CopyTarget {
    Bitcoin,
    Oneliner,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::load().await?,
    };

    init_logger(&config.log_level);
    if let Err(e) = i18n::set_language(config.language) {
        log::error!("{}", e);
    }

    match cli.command {
        Commands::Build { out } => build(&config, out).await,
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Copy { what, lang } => copy(&config, what, &lang).await,
        Commands::Action {
            expressions,
            list,
            html,
            viewport,
        } => {
            if list {
                list_actions();
                return Ok(());
            }
            action(&config, &expressions, html, viewport).await
        }
    }
}

fn init_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    log::debug!("{}", t!("system.logger.ready", level));
}

fn language_store(config: &Config) -> Arc<FileLanguageStore> {
    Arc::new(FileLanguageStore::new(&config.preferences_path))
}

async fn build(config: &Config, out: Option<PathBuf>) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| config.build.output_dir.clone());
    let report = velocity_landing::site::build_site(&out_dir, language_store(config)).await?;
    for file in &report.files {
        println!("{}", file.display());
    }
    Ok(())
}

async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    velocity_landing::server::run(&config).await
}

async fn copy(config: &Config, what: CopyTarget, lang: &str) -> Result<()> {
    let ui = UiController::new(
        velocity_landing::render_page(),
        language_store(config),
        Arc::new(PlatformClipboard::detect()),
    )
    .with_feedback_duration(config.feedback_duration);

    let (copied, label) = match what {
        CopyTarget::Bitcoin => (ui.copy_bitcoin_address(lang).await, BITCOIN_ADDRESS),
        CopyTarget::Oneliner => (ui.copy_oneliner(lang).await, INSTALL_ONELINER),
    };

    if copied {
        println!("{}", t!("copy.success", label));
        Ok(())
    } else {
        Err(AppError::Clipboard(t!("copy.failed", label)))
    }
}

fn list_actions() {
    let handler = ActionHandler::new();
    for (name, description) in handler.registry().list_actions() {
        println!("{:<24} {}", name, description);
    }
}

async fn action(config: &Config, expressions: &[String], html: bool, viewport: u32) -> Result<()> {
    let clipboard = Arc::new(MemoryClipboard::new());
    let ui = UiController::new(
        velocity_landing::render_page(),
        language_store(config),
        clipboard.clone(),
    )
    .with_feedback_duration(config.feedback_duration);
    ui.restore_language();

    let handler = ActionHandler::new().with_viewport_width(viewport);
    let mut failed = 0;
    for expression in expressions {
        let result = handler.handle(&ui, expression, None).await;
        if !result.success {
            failed += 1;
        }
        if !html {
            let marker = if result.success { "ok " } else { "err" };
            println!("[{}] {}: {}", marker, expression, result.message);
        }
    }

    if html {
        println!("{}", ui.html());
    } else if let Some(contents) = clipboard.contents() {
        println!("clipboard: {}", contents);
    }

    if failed > 0 {
        return Err(AppError::Validation(format!(
            "{} of {} expressions failed",
            failed,
            expressions.len()
        )));
    }
    Ok(())
}
