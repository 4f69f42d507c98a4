//! The configuration store and its subscriber list.

use std::fmt;

use smallvec::SmallVec;
use tailor_core::{ComponentConfig, ConfigField, FieldValue, Result};

/// Handle returned by [`ConfigStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Notification delivered after an effective change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    /// Fields that changed; empty when the whole configuration was replaced.
    pub fields: SmallVec<[ConfigField; 4]>,
    /// Store revision after the change.
    pub revision: u64,
}

impl ConfigChange {
    /// Whether the whole configuration was replaced (reset or load).
    pub fn is_replace(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn touches(&self, field: ConfigField) -> bool {
        self.is_replace() || self.fields.contains(&field)
    }
}

type Callback = Box<dyn FnMut(&ConfigChange, &ComponentConfig)>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// Holds the current [`ComponentConfig`] of an editing session.
///
/// Single writer, no locking: every read happens after a completed write in
/// the same control flow.
pub struct ConfigStore {
    config: ComponentConfig,
    revision: u64,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl ConfigStore {
    /// Create a store holding the default configuration.
    pub fn new() -> Self {
        Self::with_config(ComponentConfig::default())
    }

    /// Create a store seeded with a configuration. Numeric fields are
    /// normalized on the way in.
    pub fn with_config(config: ComponentConfig) -> Self {
        Self {
            config: config.normalized(),
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> ComponentConfig {
        self.config.clone()
    }

    /// Borrow the current configuration without copying.
    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    /// Number of effective changes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate and apply one edit.
    ///
    /// Out-of-range numbers are clamped; unknown tokens are rejected with
    /// the previous value kept. Subscribers are notified only when the
    /// stored value actually changed. Returns whether it did.
    pub fn set(&mut self, field: ConfigField, value: impl Into<FieldValue>) -> Result<bool> {
        let value = value.into();
        let changed = self.config.apply(field, &value).map_err(|err| {
            tracing::warn!(%field, ?value, %err, "rejected config edit");
            err
        })?;
        if changed {
            self.commit(SmallVec::from_elem(field, 1));
        }
        Ok(changed)
    }

    /// Like [`set`](Self::set) with the field given by its editor key.
    pub fn set_key(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<bool> {
        let field = key.parse::<ConfigField>()?;
        self.set(field, value)
    }

    /// Apply several edits in order and notify once.
    ///
    /// Every edit is attempted; rejected ones are returned alongside the
    /// fields that changed.
    pub fn set_many<I>(&mut self, edits: I) -> (Vec<ConfigField>, Vec<(ConfigField, tailor_core::ConfigError)>)
    where
        I: IntoIterator<Item = (ConfigField, FieldValue)>,
    {
        let mut changed: SmallVec<[ConfigField; 4]> = SmallVec::new();
        let mut rejected = Vec::new();
        for (field, value) in edits {
            match self.config.apply(field, &value) {
                Ok(true) => {
                    if !changed.contains(&field) {
                        changed.push(field);
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(%field, ?value, %err, "rejected config edit");
                    rejected.push((field, err));
                }
            }
        }
        let applied = changed.to_vec();
        if !changed.is_empty() {
            self.commit(changed);
        }
        (applied, rejected)
    }

    /// Restore the documented default configuration.
    pub fn reset(&mut self) {
        self.replace(ComponentConfig::default());
    }

    /// Replace the whole configuration, normalizing numeric fields.
    pub fn replace(&mut self, config: ComponentConfig) {
        let config = config.normalized();
        if config == self.config {
            return;
        }
        self.config = config;
        self.commit(SmallVec::new());
    }

    /// Register a callback run after every effective change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ConfigChange, &ComponentConfig) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn commit(&mut self, fields: SmallVec<[ConfigField; 4]>) {
        self.revision += 1;
        let change = ConfigChange {
            fields,
            revision: self.revision,
        };
        tracing::debug!(
            revision = change.revision,
            fields = ?change.fields,
            subscribers = self.subscribers.len(),
            "config changed"
        );
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&change, &self.config);
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
