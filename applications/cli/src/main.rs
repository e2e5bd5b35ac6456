/// MusicHub - terminal music browser and player
use anyhow::Context;
use clap::Parser;
use musichub_catalog::JamendoClient;
use musichub_core::IdentityProvider;
use musichub_playback::{AudioOutput, PlaybackEvent};
use musichub_state::{Controller, Event};
use musichub_storage::{LocalIdentity, SqliteCollectionStore};
use musichub_cli::{
    action::visible_tracks, render, resolve, Action, AppConfig, AudioSettings, Command,
    LikeObserver, LogOutput, HELP,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "musichub")]
#[command(about = "Browse, search and play the Jamendo catalog", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./musichub.toml if present)
    #[arg(short, long, env = "MUSICHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Override the SQLite database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Log playback instead of opening the audio device
    #[arg(long)]
    no_audio: bool,
}

struct App {
    controller: Controller<Box<dyn AudioOutput>>,
    identity: Arc<LocalIdentity>,
    likes: LikeObserver,
    last_render: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "musichub=info,musichub_cli=info,musichub_state=info,musichub_catalog=warn,musichub_storage=warn"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(database_url) = cli.database_url {
        config.storage.database_url = database_url;
    }
    if cli.no_audio {
        config.audio.enabled = false;
    }
    config.validate()?;

    tracing::info!("Starting MusicHub");

    let catalog = JamendoClient::new(config.catalog.clone()).context("Failed to create catalog client")?;
    tracing::info!(base_url = catalog.base_url(), "Catalog client ready");

    let pool = musichub_storage::create_pool(&config.storage.database_url)
        .await
        .context("Failed to open database")?;
    musichub_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let store = SqliteCollectionStore::new(pool.clone());
    let identity = Arc::new(LocalIdentity::new(pool));

    let controller = Controller::new(
        config.browse.clone(),
        Arc::new(catalog),
        Arc::new(store),
        open_output(&config.audio),
    );
    controller.watch_identity(identity.subscribe());
    identity.resolve();

    let mut app = App {
        controller,
        identity,
        likes: LikeObserver::new(),
        last_render: String::new(),
    };
    app.run().await
}

impl App {
    async fn run(&mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{HELP}");

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    if !self.handle_line(&line).await {
                        break;
                    }
                    self.refresh(true);
                }
                event = self.controller.next_event() => {
                    let Some(event) = event else {
                        break;
                    };
                    self.dispatch(event);
                    self.refresh(false);
                }
            }
        }

        tracing::info!("Goodbye");
        Ok(())
    }

    /// Returns false when the user asked to quit
    async fn handle_line(&mut self, line: &str) -> bool {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                return true;
            }
        };

        let action = match resolve(command, self.controller.state()) {
            Ok(action) => action,
            Err(message) => {
                println!("{message}");
                return true;
            }
        };

        match action {
            Action::Dispatch(event) => self.dispatch(event),
            Action::SignUp { email, password } => {
                if let Err(e) = self.identity.sign_up(&email, &password).await {
                    println!("{e}");
                }
            }
            Action::SignIn { email, password } => {
                if let Err(e) = self.identity.sign_in(&email, &password).await {
                    println!("{e}");
                }
            }
            Action::SignOut => {
                if let Err(e) = self.identity.sign_out().await {
                    println!("{e}");
                }
            }
            Action::Show => self.last_render.clear(),
            Action::Help => println!("{HELP}"),
            Action::Quit => return false,
        }
        true
    }

    fn dispatch(&mut self, event: Event) {
        for playback in self.controller.dispatch(event) {
            report(&playback);
        }

        let visible = visible_tracks(self.controller.state()).to_vec();
        for event in self.likes.reconcile(&visible) {
            self.controller.dispatch(event);
        }
    }

    /// Print the screen if it changed (or always, after a user command)
    fn refresh(&mut self, force: bool) {
        let screen = render::render(&self.controller.screen(), self.controller.state());
        if force || screen != self.last_render {
            println!("{screen}");
            self.last_render = screen;
        }
    }
}

/// The speaker when it can be opened, otherwise a logging stand-in
fn open_output(settings: &AudioSettings) -> Box<dyn AudioOutput> {
    if !settings.enabled {
        tracing::info!("Audio disabled; playback is only logged");
        return Box::new(LogOutput::new());
    }
    #[cfg(feature = "device")]
    match musichub_cli::DeviceOutput::open(settings.volume) {
        Ok(device) => return Box::new(device),
        Err(e) => tracing::warn!(error = %e, "Audio device unavailable; playback is only logged"),
    }
    #[cfg(not(feature = "device"))]
    tracing::info!("Built without device audio; playback is only logged");
    Box::new(LogOutput::new())
}

fn report(event: &PlaybackEvent) {
    match event {
        PlaybackEvent::PlaybackBlocked { track_id, message } => {
            tracing::debug!(track_id, message, "Playback did not start");
        }
        PlaybackEvent::TrackFinished { track_id } => {
            tracing::debug!(track_id, "Track finished");
        }
        other => tracing::debug!(?other, "Playback"),
    }
}
