use crate::session::Session;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Refresh,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown command '{0}', expected one of: start, stop, refresh, quit")]
pub struct UnknownCommand(String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "starttracking" => Ok(Command::Start),
            "stop" | "stoptracking" => Ok(Command::Stop),
            "refresh" | "history" => Ok(Command::Refresh),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Reads one command per line from `input` until it ends or the receiving side hangs up.
#[instrument(skip_all)]
pub async fn read_commands<R>(input: R, tx: Sender<Command>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("⚠️ Unable to read command: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if tx.send(command).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!("⚠️ {}", e),
        }
    }

    debug!("⌨️ Command input closed");
}

/// Applies commands to the session until a quit command arrives, the input closes or the
/// process is interrupted. Tracking is stopped on the way out.
#[instrument(skip_all)]
pub async fn run(session: &mut Session, mut rx: Receiver<Command>) {
    loop {
        let command = tokio::select! {
            command = rx.recv() => command.unwrap_or(Command::Quit),
            _ = tokio::signal::ctrl_c() => Command::Quit,
        };

        debug!(?command, "⌨️ Received command");
        match command {
            Command::Start => {
                // Failures have been reported through the error banner
                let _ = session.start_tracking();
            }
            Command::Stop => session.stop_tracking(),
            Command::Refresh => {
                let _ = session.refresh_history().await;
            }
            Command::Quit => break,
        }
    }

    session.stop_tracking();
    info!("👋 Bye");
}
