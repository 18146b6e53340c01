//! Payment notification dispatch.
//!
//! The link itself is built in `rusikaram_core::notify`; this service hands
//! it to the host through a [`LinkOpener`] and never waits for the result.

use std::process::{Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use rusikaram_core::error::{Result, RusikaramError};
use rusikaram_core::notify::{payment_link, payment_message};

/// Asks the host environment to open a URL.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Launches the platform URL handler in the background.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }

        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler").arg(url);
            cmd
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Starts `command` and waits for it on a background thread, so the caller
/// never blocks and the finished process is reaped.
fn spawn_detached(mut command: Command) -> Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| RusikaramError::io(format!("Failed to launch link opener: {}", e)))?;

    thread::Builder::new()
        .name("link-opener".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    tracing::warn!(%status, "Link opener exited with an error");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not wait for link opener");
                None
            }
        })
        .map_err(|e| RusikaramError::internal(format!("Failed to start reaper thread: {}", e)))
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        spawn_detached(Self::command(url)).map(|_reaper| ())
    }
}

/// Only logs the link. Used when link opening is switched off in the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintLinkOpener;

impl LinkOpener for PrintLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::info!(url, "Link opening disabled, not launching opener");
        Ok(())
    }
}

/// Remembers every URL it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened
            .lock()
            .map_err(|e| RusikaramError::internal(format!("Opener lock poisoned: {}", e)))?
            .push(url.to_string());
        Ok(())
    }
}

/// What was sent for one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentNotice {
    pub message: String,
    pub link: String,
    /// False when the opener could not be launched; the link is still valid.
    pub opened: bool,
}

#[derive(Clone)]
pub struct NotificationService {
    opener: Arc<dyn LinkOpener>,
}

impl NotificationService {
    pub fn new(opener: Arc<dyn LinkOpener>) -> Self {
        Self { opener }
    }

    /// Builds the payment message and link and hands the link to the opener.
    ///
    /// Safe to call any number of times. A failing opener is logged, not
    /// returned, so the caller can still show the link.
    pub fn notify(&self, name: &str, phone: &str, amount: u64) -> PaymentNotice {
        let message = payment_message(name, amount);
        let link = payment_link(name, phone, amount);

        let opened = match self.opener.open(&link) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Could not open payment link");
                false
            }
        };

        tracing::info!(phone, amount, opened, "Payment notification dispatched");

        PaymentNotice {
            message,
            link,
            opened,
        }
    }
}
