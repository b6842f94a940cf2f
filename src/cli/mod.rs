//! Terminal front end.
//!
//! Drives the same page view-models the browser renders, printing their
//! typed state instead of binding it to the DOM. Credentials persist in a
//! JSON file so separate invocations share one session.


pub mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};

use crate::alias::AliasGenerator;
use crate::api::{ApiError, ShortenerApi, short_url};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{DEFAULT_ALIAS_ATTEMPTS, DEFAULT_ALIAS_LENGTH, DEFAULT_BASE_URL, parse_store_path};
use crate::messages;
use crate::pages::{
    AliasStatus, AuthForm, AuthMode, Banner, DashboardPage, LoadState, ShortenForm, Tone,
    copy_with_feedback,
};
use crate::services::Services;
use crate::session::{AuthError, NoopAuthView, SessionManager};
use crate::store::{FileStore, SharedStore};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Login or registration failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Transport or decode failure on a direct API call.
    #[error("{}", messages::NETWORK_ERROR)]
    Api(#[from] ApiError),

    /// The command needs a stored session.
    #[error("not logged in; run `linkdeck login` first")]
    LoginRequired,

    /// The server or a local check refused the operation.
    #[error("{0}")]
    Rejected(String),

    #[error("io failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "linkdeck", about = "Terminal client for the URL shortener", version)]
pub struct Cli {
    #[arg(long, env = "LINKDECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Credential file; defaults to ~/.linkdeck/storage.json.
    #[arg(long, env = "LINKDECK_STORE")]
    pub store: Option<PathBuf>,

    /// Log requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check that the backend is up.
    Health,
    /// Show the backend build.
    Info,
    Register {
        username: String,
        #[arg(long, env = "LINKDECK_PASSWORD")]
        password: String,
    },
    Login {
        username: String,
        #[arg(long, env = "LINKDECK_PASSWORD")]
        password: String,
    },
    Logout,
    Whoami,
    /// Create a short link.
    Shorten {
        url: String,
        #[arg(long, conflicts_with = "generate")]
        alias: Option<String>,
        /// Pick a random unused alias first.
        #[arg(long)]
        generate: bool,
    },
    /// Check whether an alias is free.
    Check { alias: String },
    /// Suggest a random unused alias.
    Generate {
        #[arg(long, default_value_t = DEFAULT_ALIAS_LENGTH)]
        length: usize,
        #[arg(long, default_value_t = DEFAULT_ALIAS_ATTEMPTS)]
        attempts: usize,
    },
    /// List your links.
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    Delete {
        alias: String,
        /// Page the link is listed on.
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Copy a short URL to the system clipboard.
    Copy { alias: String },
}

/// Install the stderr fmt subscriber. `WARN` unless verbose.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

/// Run one command to completion.
///
/// # Errors
///
/// Any failure the command reports; the binary prints it and exits non-zero.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let home = std::env::var("HOME").ok();
    let store_path = parse_store_path(
        cli.store.as_deref().and_then(|p| p.to_str()),
        home.as_deref(),
    );
    tracing::debug!(base_url = %cli.base_url, store = %store_path.display(), "starting");
    let store: SharedStore = Rc::new(FileStore::new(store_path));
    let services = Services::connect(&cli.base_url, store, Rc::new(NoopAuthView));
    let mut out = io::stdout().lock();
    execute(&services, &SystemClipboard, cli.command, &mut out).await
}

pub(crate) async fn execute<A: ShortenerApi + ?Sized, C: Clipboard + ?Sized>(
    services: &Services<A>,
    clipboard: &C,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let api = services.api.as_ref();
    let session = &services.session;
    match command {
        Command::Health => {
            let reply = api.health_check().await?;
            if !reply.is_ok() {
                return Err(CliError::Rejected(format!("backend unhealthy: {}", reply.status)));
            }
            writeln!(out, "ok")?;
        }
        Command::Info => {
            let info = api.info().await?;
            write!(out, "{}", render::server_info(&info))?;
        }
        Command::Register { username, password } => {
            authenticate(session, AuthMode::Register, &username, &password, out).await?;
        }
        Command::Login { username, password } => {
            authenticate(session, AuthMode::Login, &username, &password, out).await?;
        }
        Command::Logout => {
            session.logout();
            writeln!(out, "logged out")?;
        }
        Command::Whoami => match session.current_user() {
            Some(user) => writeln!(out, "{user}")?,
            None => return Err(CliError::LoginRequired),
        },
        Command::Shorten { url, alias, generate } => {
            let mut form = ShortenForm::new(api.base_url());
            form.set_url(&url);
            if generate {
                form.alias_focus(api, &mut AliasGenerator::new()).await;
                writeln!(out, "{}", render::alias_status(form.alias(), form.alias_status()))?;
            } else if let Some(alias) = alias {
                form.alias_input(&alias, api).await;
                match form.alias_status() {
                    AliasStatus::Invalid | AliasStatus::Taken => {
                        return Err(CliError::Rejected(
                            render::alias_status(alias.trim(), form.alias_status()),
                        ));
                    }
                    _ => {}
                }
            }
            form.submit(session).await;
            report_banner(form.banner(), out)?;
        }
        Command::Check { alias } => {
            let mut form = ShortenForm::new(api.base_url());
            form.alias_input(&alias, api).await;
            let status = form.alias_status();
            writeln!(out, "{}", render::alias_status(alias.trim(), status))?;
            if status == AliasStatus::CheckFailed {
                return Err(CliError::Rejected(messages::ALIAS_CHECK_FAILED.to_owned()));
            }
        }
        Command::Generate { length, attempts } => {
            let generated = AliasGenerator::new().generate_unique(api, length, attempts).await;
            let status =
                if generated.verified { AliasStatus::Generated } else { AliasStatus::Unverified };
            writeln!(out, "{}", render::alias_status(&generated.value, status))?;
        }
        Command::List { page } => {
            let dashboard = open_dashboard(services, page).await?;
            write!(out, "{}", render::dashboard(&dashboard))?;
        }
        Command::Delete { alias, page, yes } => {
            let mut dashboard = open_dashboard(services, page).await?;
            dashboard.request_delete(&alias);
            if !yes && !confirm(messages::DELETE_CONFIRM)? {
                dashboard.cancel_delete();
                writeln!(out, "cancelled")?;
                return Ok(());
            }
            dashboard.confirm_delete(api).await;
            if let Some(alert) = dashboard.alert() {
                return Err(CliError::Rejected(alert.to_owned()));
            }
            writeln!(out, "deleted {alias}")?;
            write!(out, "{}", render::dashboard(&dashboard))?;
        }
        Command::Copy { alias } => {
            let url = short_url(api.base_url(), alias.trim());
            let toast = copy_with_feedback(clipboard, &url).await;
            if toast.tone == Tone::Danger {
                return Err(CliError::Rejected(toast.message));
            }
            writeln!(out, "{}: {url}", toast.message)?;
        }
    }
    Ok(())
}

async fn authenticate<A: ShortenerApi + ?Sized>(
    session: &SessionManager<A>,
    mode: AuthMode,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut form = AuthForm::new();
    if mode == AuthMode::Register {
        form.show_register();
    }
    form.set_username(username);
    form.set_password(password);
    let Some(attempt) = form.begin_submit() else {
        return Err(CliError::Rejected(form.error().unwrap_or(messages::FIELDS_REQUIRED).to_owned()));
    };
    let result = attempt.run(session).await;
    form.finish_submit(result);
    result?;
    writeln!(out, "logged in as {}", attempt.username)?;
    Ok(())
}

/// Guarded dashboard already loaded at `page`.
async fn open_dashboard<A: ShortenerApi + ?Sized>(
    services: &Services<A>,
    page: u64,
) -> Result<DashboardPage, CliError> {
    let mut dashboard = DashboardPage::new(services.api.base_url());
    if dashboard.guard(&services.session).is_some() {
        return Err(CliError::LoginRequired);
    }
    dashboard.go_to(page);
    dashboard.load(services.api.as_ref()).await;
    if let LoadState::Failed(message) = dashboard.state() {
        return Err(CliError::Rejected(message.clone()));
    }
    Ok(dashboard)
}

fn report_banner(banner: Option<&Banner>, out: &mut impl Write) -> Result<(), CliError> {
    match banner {
        Some(created @ Banner::Created { .. }) => {
            writeln!(out, "{}", render::banner(created))?;
            Ok(())
        }
        Some(Banner::LoginRequired) => Err(CliError::LoginRequired),
        Some(other) => Err(CliError::Rejected(other.message().to_owned())),
        None => Ok(()),
    }
}

fn confirm(question: &str) -> Result<bool, CliError> {
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
