//! Watch mode: each change to the file is treated as an input edit.

use anyhow::{Context, Result};
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};
use ts_session::SimplifierSession;

pub async fn watch(session: &SimplifierSession, path: &Path) -> Result<()> {
    let initial = read_text(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    session.set_input(initial.clone());
    session.simplify_now().await;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let config = notify::Config::default().with_poll_interval(Duration::from_millis(250));
    let mut watcher = PollWatcher::new(
        move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    let _ = tx.send(());
                }
            }
        },
        config,
    )
    .context("Failed to create file watcher")?;
    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", path.display()))?;
    info!(path = %path.display(), "watching for changes");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut last = initial;
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("stopping watch");
                break;
            }
            event = rx.recv() => {
                if event.is_none() {
                    break;
                }
                match read_text(path).await {
                    Ok(text) if text != last => {
                        debug!(chars = text.chars().count(), "file changed");
                        last = text.clone();
                        session.on_input(text);
                    }
                    Ok(_) => {}
                    Err(e) => warn!(path = %path.display(), error = %e, "failed to re-read watched file"),
                }
            }
        }
    }
    Ok(())
}

/// Reads the file the same way an import does: invalid UTF-8 becomes U+FFFD.
async fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
