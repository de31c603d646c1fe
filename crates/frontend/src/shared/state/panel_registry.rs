//! Per-entity UI state registry
//!
//! Every entity kind gets one [`EntityPanelState`] holding the state of its
//! create form, update form, list and response region. Handlers look panels
//! up here instead of searching the document by id.

use contracts::domain::common::{EntityKind, EntityRecord};
use contracts::shared::metadata::{FormMode, FormValues};
use leptos::prelude::*;

use crate::shared::components::response_view::ResponseDisplay;

#[derive(Clone, Copy)]
pub struct FormState {
    pub values: RwSignal<FormValues>,
    /// Disclosure panel expanded
    pub open: RwSignal<bool>,
    /// Identity of the record being updated
    pub target_id: RwSignal<Option<i64>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(FormValues::default()),
            open: RwSignal::new(false),
            target_id: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.values.set(FormValues::default());
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<EntityRecord>),
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct EntityPanelState {
    pub kind: EntityKind,
    pub create: FormState,
    pub update: FormState,
    pub include_inactive: RwSignal<bool>,
    /// Bumped to ask the list to reload
    pub reload: RwSignal<u64>,
    /// Sequence number of the latest list request
    pub list_seq: RwSignal<u64>,
    pub list: RwSignal<ListState>,
    pub response: ResponseDisplay,
}

impl EntityPanelState {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            create: FormState::new(),
            update: FormState::new(),
            include_inactive: RwSignal::new(false),
            reload: RwSignal::new(0),
            list_seq: RwSignal::new(0),
            list: RwSignal::new(ListState::Loading),
            response: ResponseDisplay::new(),
        }
    }

    pub fn form(&self, mode: FormMode) -> FormState {
        match mode {
            FormMode::Create => self.create,
            FormMode::Update => self.update,
        }
    }

    pub fn request_reload(&self) {
        self.reload.update(|n| *n += 1);
    }
}

#[derive(Clone, Copy)]
pub struct PanelRegistry {
    panels: StoredValue<Vec<EntityPanelState>>,
}

impl PanelRegistry {
    pub fn new(kinds: &[EntityKind]) -> Self {
        Self {
            panels: StoredValue::new(kinds.iter().copied().map(EntityPanelState::new).collect()),
        }
    }

    pub fn get(&self, kind: EntityKind) -> Option<EntityPanelState> {
        self.panels
            .with_value(|panels| panels.iter().find(|p| p.kind == kind).copied())
    }

    pub fn kinds(&self) -> Vec<EntityKind> {
        self.panels
            .with_value(|panels| panels.iter().map(|p| p.kind).collect())
    }
}
