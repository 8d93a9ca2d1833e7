//! User preferences and their change notification.
//!
//! A [`SettingsStore`] owns the single current [`Settings`] value and broadcasts every write
//! to its subscribers synchronously, before the setter returns. Subscribers receive the key
//! that changed and the full new snapshot. They are expected to re-derive whatever they
//! display from that snapshot instead of patching previously formatted values.

use crate::core::units::{TemperatureUnit, UnknownUnitError};
use crate::view::color::{ColorKey, UnknownColorKeyError};
use crate::view::list::{
    SortDirection, SortField, SortOrder, UnknownSortDirectionError, UnknownSortFieldError,
};
use crate::view::subtext::{SubtextField, UnknownSubtextFieldError};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use tracing::trace;

/// A snapshot of every preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub temperature_unit: TemperatureUnit,
    pub color_key: ColorKey,
    pub subtext: SubtextField,
    pub sort: SortOrder,
}

/// Identifies one preference in change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    TemperatureUnits,
    ElementColors,
    SubtextValue,
    SortField,
    SortDirection,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        Self::TemperatureUnits,
        Self::ElementColors,
        Self::SubtextValue,
        Self::SortField,
        Self::SortDirection,
    ];
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TemperatureUnits => "TemperatureUnits",
            Self::ElementColors => "ElementColors",
            Self::SubtextValue => "SubtextValue",
            Self::SortField => "SortField",
            Self::SortDirection => "SortDirection",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error(transparent)]
    TemperatureUnit(#[from] UnknownUnitError),
    #[error(transparent)]
    ColorKey(#[from] UnknownColorKeyError),
    #[error(transparent)]
    Subtext(#[from] UnknownSubtextFieldError),
    #[error(transparent)]
    SortField(#[from] UnknownSortFieldError),
    #[error(transparent)]
    SortDirection(#[from] UnknownSortDirectionError),
}

/// Handle returned by [`SettingsStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(SettingKey, &Settings)>;

/// The current preferences plus their subscribers.
///
/// Every write notifies, even when the new value equals the old one.
#[derive(Default)]
pub struct SettingsStore {
    current: Cell<Settings>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: Cell::new(initial),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.current.get()
    }

    pub fn subscribe(&self, listener: impl Fn(SettingKey, &Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a subscriber. Returns whether it was subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn set_temperature_unit(&self, unit: TemperatureUnit) {
        self.update(SettingKey::TemperatureUnits, |s| s.temperature_unit = unit);
    }

    pub fn set_color_key(&self, key: ColorKey) {
        self.update(SettingKey::ElementColors, |s| s.color_key = key);
    }

    pub fn set_subtext(&self, field: SubtextField) {
        self.update(SettingKey::SubtextValue, |s| s.subtext = field);
    }

    pub fn set_sort_field(&self, field: SortField) {
        self.update(SettingKey::SortField, |s| s.sort.field = field);
    }

    pub fn set_sort_direction(&self, direction: SortDirection) {
        self.update(SettingKey::SortDirection, |s| s.sort.direction = direction);
    }

    /// Applies a user pick of a sort column, see [`SortOrder::select`].
    pub fn select_sort(&self, field: SortField) {
        let order = self.snapshot().sort.select(field);
        self.set_sort_field(order.field);
        self.set_sort_direction(order.direction);
    }

    /// Parses `value` and writes it under `key`.
    pub fn set(&self, key: SettingKey, value: &str) -> Result<(), SettingsError> {
        match key {
            SettingKey::TemperatureUnits => self.set_temperature_unit(value.parse()?),
            SettingKey::ElementColors => self.set_color_key(value.parse()?),
            SettingKey::SubtextValue => self.set_subtext(value.parse()?),
            SettingKey::SortField => self.set_sort_field(value.parse()?),
            SettingKey::SortDirection => self.set_sort_direction(value.parse()?),
        }
        Ok(())
    }

    /// Replaces every preference at once, as after an external sync, and notifies each key.
    pub fn replace(&self, settings: Settings) {
        self.current.set(settings);
        for key in SettingKey::ALL {
            self.notify(key);
        }
    }

    fn update(&self, key: SettingKey, apply: impl FnOnce(&mut Settings)) {
        let mut settings = self.current.get();
        apply(&mut settings);
        self.current.set(settings);
        self.notify(key);
    }

    fn notify(&self, key: SettingKey) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let settings = self.current.get();
        trace!("Setting {} changed, notifying {} listeners", key, listeners.len());
        for listener in listeners {
            listener(key, &settings);
        }
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.current.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
