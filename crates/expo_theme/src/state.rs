//! Theme store
//!
//! The store is created once by whatever mounts the page, seeded with a
//! preset, and passed by reference to everything that reads or edits the
//! theme. Every change is projected into the style sink and delivered to
//! subscribers before the mutating call returns.

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::presets::{PresetCatalog, DEFAULT_PRESET};
use crate::sink::{StyleNamespace, StyleSink};
use crate::tokens::DesignTokens;
use crate::ThemeError;

new_key_type! {
    /// Handle returned by [`ThemeStore::subscribe`].
    pub struct SubscriptionId;
}

type Subscriber = Box<dyn FnMut(&DesignTokens)>;

/// Single source of truth for the active design tokens
pub struct ThemeStore<S: StyleSink = StyleNamespace> {
    /// Closed preset catalog
    presets: PresetCatalog,

    /// Active token set
    current: DesignTokens,

    /// Label of the last applied preset. Display-only: editing a single
    /// field through `set_tokens` leaves it untouched.
    preset_name: String,

    /// Page-wide style namespace
    sink: S,

    /// Change observers
    subscribers: SlotMap<SubscriptionId, Subscriber>,

    /// Call order for `subscribers`. Slots are reused after removal, so
    /// slot order is not subscription order.
    order: Vec<SubscriptionId>,
}

impl<S: StyleSink> ThemeStore<S> {
    /// Create a store seeded with the [`DEFAULT_PRESET`] and project it.
    ///
    /// Fails when the catalog has no default entry, so a store can never
    /// exist without a complete token set.
    pub fn new(presets: PresetCatalog, sink: S) -> Result<Self, ThemeError> {
        Self::with_preset(presets, DEFAULT_PRESET, sink)
    }

    /// Create a store seeded with a named preset and project it.
    pub fn with_preset(presets: PresetCatalog, name: &str, sink: S) -> Result<Self, ThemeError> {
        let current = presets
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))?;

        let mut store = ThemeStore {
            presets,
            current,
            preset_name: name.to_string(),
            sink,
            subscribers: SlotMap::with_key(),
            order: Vec::new(),
        };
        store.sink.publish(&store.current);
        debug!("ThemeStore::with_preset - seeded with {}", name);

        Ok(store)
    }

    // ========== Reads ==========

    /// The active token set
    pub fn current(&self) -> &DesignTokens {
        &self.current
    }

    /// The preset catalog (read-only)
    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Label of the last applied preset
    pub fn current_preset(&self) -> &str {
        &self.preset_name
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ========== Mutations ==========

    /// Replace the active tokens wholesale.
    ///
    /// No value is checked. The new tokens are projected into the sink and
    /// delivered to every subscriber before this returns. The preset label is
    /// left as it was.
    pub fn set_tokens(&mut self, next: DesignTokens) {
        debug!(
            "ThemeStore::set_tokens - primary={} spacing={} shadow={}",
            next.colors.primary, next.spacing.scale, next.shadows.style
        );
        self.current = next;
        self.sink.publish(&self.current);

        for id in &self.order {
            if let Some(subscriber) = self.subscribers.get_mut(*id) {
                subscriber(&self.current);
            }
        }
    }

    /// Switch to a named preset.
    ///
    /// An unknown name is ignored: no state changes, nothing is published,
    /// and no subscriber runs. Use [`try_apply_preset`](Self::try_apply_preset)
    /// to find out about it.
    pub fn apply_preset(&mut self, name: &str) {
        if let Err(err) = self.try_apply_preset(name) {
            debug!("ThemeStore::apply_preset - ignored: {}", err);
        }
    }

    /// Switch to a named preset, reporting an unknown name.
    pub fn try_apply_preset(&mut self, name: &str) -> Result<(), ThemeError> {
        let tokens = self
            .presets
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))?;

        debug!(
            "ThemeStore::apply_preset - switching from {} to {}",
            self.preset_name, name
        );
        self.preset_name = name.to_string();
        self.set_tokens(tokens);
        Ok(())
    }

    /// Relabel the current preset without touching the tokens.
    pub fn set_current_preset(&mut self, name: impl Into<String>) {
        self.preset_name = name.into();
    }

    // ========== Subscriptions ==========

    /// Register a callback run after every token change.
    ///
    /// The callback sees the new tokens after the sink has been updated.
    pub fn subscribe(&mut self, callback: impl FnMut(&DesignTokens) + 'static) -> SubscriptionId {
        let id = self.subscribers.insert(Box::new(callback));
        self.order.push(id);
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.subscribers.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
