//! Change notification: observers registered against a resource identifier
//! are told when data reachable through it changes.

use log::{debug, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Receives change notifications for the URI it was registered with.
pub trait ChangeObserver: Send + Sync {
    fn on_change(&self, uri: &str);
}

/// Forwards every notification into a channel.
struct ChannelObserver {
    tx: Mutex<Sender<String>>,
}

impl ChangeObserver for ChannelObserver {
    fn on_change(&self, uri: &str) {
        if let Ok(tx) = self.tx.lock() {
            // A dropped receiver just means nobody is listening any more.
            let _ = tx.send(uri.to_string());
        }
    }
}

struct Registration {
    id: u64,
    uri: String,
    observer: Arc<dyn ChangeObserver>,
}

/// Handle returned by a registration; pass it back to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct ChangeNotifier {
    inner: Mutex<NotifierState>,
}

#[derive(Default)]
struct NotifierState {
    next_id: u64,
    registrations: Vec<Registration>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` for changes to exactly `uri`.
    pub fn register(&self, uri: &str, observer: Arc<dyn ChangeObserver>) -> ObserverId {
        let mut state = match self.inner.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.next_id += 1;
        let id = state.next_id;
        state.registrations.push(Registration {
            id,
            uri: uri.to_string(),
            observer,
        });
        ObserverId(id)
    }

    /// Register a channel for changes to `uri` and return its receiving end.
    pub fn subscribe(&self, uri: &str) -> (ObserverId, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        let id = self.register(uri, Arc::new(ChannelObserver { tx: Mutex::new(tx) }));
        (id, rx)
    }

    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut state = match self.inner.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = state.registrations.len();
        state.registrations.retain(|r| r.id != id.0);
        before != state.registrations.len()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().map(|s| s.registrations.len()).unwrap_or(0)
    }

    /// Tell every observer registered against `uri`. Returns how many were
    /// told. Observers run outside the registry lock.
    pub fn notify_change(&self, uri: &str) -> usize {
        let targets: Vec<Arc<dyn ChangeObserver>> = match self.inner.lock() {
            Ok(state) => state
                .registrations
                .iter()
                .filter(|r| r.uri == uri)
                .map(|r| Arc::clone(&r.observer))
                .collect(),
            Err(_) => {
                warn!("Change observers unavailable, skipping notification for {}", uri);
                return 0;
            }
        };

        debug!("Notifying {} observer(s) of change to {}", targets.len(), uri);
        for observer in &targets {
            observer.on_change(uri);
        }
        targets.len()
    }
}
