use crate::domain::Coordinate;
use tokio::sync::watch;

/// The state of a city's forward-geocoding lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Pending,
    Resolved(Coordinate),
    Failed(String),
}

/// A deduplicated city derived from the loaded places. The name is the
/// identity; the coordinate starts out as the configured fallback and is
/// refined once the geocoding lookup completes. Resolution state is published
/// through a watch channel so consumers can poll, subscribe, or await it.
#[derive(Debug)]
pub struct City {
    name: String,
    fallback: Coordinate,
    resolution_tx: watch::Sender<Resolution>,
    resolution_rx: watch::Receiver<Resolution>,
}

impl City {
    pub fn new(name: String, fallback: Coordinate) -> Self {
        let (resolution_tx, resolution_rx) = watch::channel(Resolution::Pending);

        City {
            name,
            fallback,
            resolution_tx,
            resolution_rx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved coordinate, or the fallback while the lookup is pending
    /// or after it failed.
    pub fn coordinate(&self) -> Coordinate {
        match *self.resolution_rx.borrow() {
            Resolution::Resolved(coordinate) => coordinate,
            _ => self.fallback,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.resolution_rx.clone()
    }

    /// Waits until the lookup has completed either way and returns the final
    /// coordinate.
    pub async fn resolved(&self) -> Coordinate {
        let mut rx = self.resolution_rx.clone();
        // wait_for also matches the current value, so a lookup that completed
        // before the call cannot be missed
        let _ = rx.wait_for(|resolution| !matches!(resolution, Resolution::Pending)).await;

        self.coordinate()
    }

    pub(crate) fn set_resolution(&self, resolution: Resolution) {
        self.resolution_tx.send(resolution).unwrap_or_default();
    }
}
