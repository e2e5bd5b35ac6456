//! Speaker output backed by rodio.
//!
//! rodio's output stream is not `Send`, so the device lives on its own
//! thread. [`DeviceOutput`] forwards commands to it over a channel and reads
//! back which source ran dry, which is how the controller learns that a
//! track ended.

use musichub_playback::{AudioOutput, PlaybackError, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long the device thread waits for a command before checking the sink
const SINK_POLL: Duration = Duration::from_millis(100);

enum DeviceCommand {
    Load { source: u64, url: String },
    Play,
    Pause,
}

pub struct DeviceOutput {
    commands: Sender<DeviceCommand>,
    /// Number of sources handed to the device so far
    source: u64,
    /// Last source the device played to its end
    drained: Arc<AtomicU64>,
}

impl DeviceOutput {
    /// Open the default output device
    ///
    /// `volume` is a linear factor, 1.0 being unchanged.
    pub fn open(volume: f32) -> Result<Self> {
        let (commands, receiver) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);
        let drained = Arc::new(AtomicU64::new(0));

        let thread_drained = drained.clone();
        thread::Builder::new()
            .name("musichub-audio".into())
            .spawn(move || run_device(&receiver, &ready_tx, &thread_drained, volume))?;

        ready_rx
            .recv()
            .map_err(|_| PlaybackError::Blocked("audio thread exited".into()))??;
        info!(volume, "Audio device opened");

        Ok(Self {
            commands,
            source: 0,
            drained,
        })
    }

    fn send(&self, command: DeviceCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| PlaybackError::Blocked("audio device is gone".into()))
    }
}

impl AudioOutput for DeviceOutput {
    fn load(&mut self, source_url: &str) -> Result<()> {
        self.source += 1;
        self.send(DeviceCommand::Load {
            source: self.source,
            url: source_url.to_string(),
        })
    }

    fn play(&mut self) -> Result<()> {
        if self.source == 0 {
            return Err(PlaybackError::Load("no source loaded".into()));
        }
        self.send(DeviceCommand::Play)
    }

    fn pause(&mut self) {
        if self.send(DeviceCommand::Pause).is_err() {
            debug!("Pause ignored; audio device is gone");
        }
    }

    fn is_finished(&self) -> bool {
        self.source != 0 && self.drained.load(Ordering::SeqCst) == self.source
    }
}

fn run_device(
    commands: &Receiver<DeviceCommand>,
    ready: &SyncSender<Result<()>>,
    drained: &AtomicU64,
    volume: f32,
) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = ready.send(Err(PlaybackError::Blocked(format!("no audio device: {e}"))));
            return;
        }
    };
    if ready.send(Ok(())).is_err() {
        return;
    }

    let http = reqwest::blocking::Client::new();
    let mut current: Option<(u64, Sink)> = None;
    let mut paused = false;

    loop {
        match commands.recv_timeout(SINK_POLL) {
            Ok(DeviceCommand::Load { source, url }) => {
                // Dropping the old sink stops it
                current = None;
                let started = fetch_source(&http, &url).and_then(|decoder| {
                    let sink = Sink::try_new(&handle)
                        .map_err(|e| PlaybackError::Blocked(e.to_string()))?;
                    sink.set_volume(volume);
                    if paused {
                        sink.pause();
                    }
                    sink.append(decoder);
                    Ok(sink)
                });
                match started {
                    Ok(sink) => {
                        debug!(url, "Source started");
                        current = Some((source, sink));
                    }
                    Err(e) => warn!(url, error = %e, "Could not play source"),
                }
            }
            Ok(DeviceCommand::Play) => {
                paused = false;
                if let Some((_, sink)) = &current {
                    sink.play();
                }
            }
            Ok(DeviceCommand::Pause) => {
                paused = true;
                if let Some((_, sink)) = &current {
                    sink.pause();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some((source, sink)) = &current {
            if sink.empty() {
                drained.store(*source, Ordering::SeqCst);
                current = None;
            }
        }
    }
    debug!("Audio thread stopped");
}

/// Download (or read) a whole source and prepare its decoder
fn fetch_source(
    http: &reqwest::blocking::Client,
    url: &str,
) -> Result<Decoder<Cursor<Vec<u8>>>> {
    let bytes = read_source(http, url)?;
    Decoder::new(Cursor::new(bytes)).map_err(|e| PlaybackError::Load(format!("{url}: {e}")))
}

/// `http(s)` URLs are downloaded; anything else is read as a local path
fn read_source(http: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    if url.starts_with("http://") || url.starts_with("https://") {
        let response = http
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| PlaybackError::Load(e.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|e| PlaybackError::Load(e.to_string()))?;
        return Ok(bytes.to_vec());
    }
    let path = url.strip_prefix("file://").unwrap_or(url);
    Ok(std::fs::read(path)?)
}
