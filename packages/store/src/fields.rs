//! # Field state container
//!
//! Holds the user's field list and the currently selected field. Every
//! mutation is confirmed by the server before the local list changes; there
//! are no optimistic updates, so a failed call leaves `fields` untouched.
//!
//! | Action | Success | Failure |
//! |--------|---------|---------|
//! | [`fetch_fields`](FieldStore::fetch_fields) | list replaced | error stored and toasted |
//! | [`fetch_field`](FieldStore::fetch_field) | `selected` set | error stored and toasted |
//! | [`add_field`](FieldStore::add_field) | appended, toast | error stored, toasted, re-raised |
//! | [`update_field`](FieldStore::update_field) | replaced in place (and in `selected`) | error stored, toasted, re-raised |
//! | [`delete_field`](FieldStore::delete_field) | removed (and `selected` cleared if it matched) | error stored, toasted, re-raised |

use std::collections::BTreeSet;
use std::sync::Arc;

use api::{ApiClient, ApiError, CancelToken, Field, FieldInput, Transport};

use crate::cell::StateCell;
use crate::error::Result;
use crate::notify::Notifier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub fields: Vec<Field>,
    pub selected: Option<Field>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn find(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn summary(&self) -> FieldSummary {
        FieldSummary::of(&self.fields)
    }
}

/// Totals shown on the dashboard header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSummary {
    pub count: usize,
    /// Hectares.
    pub total_area: f64,
    /// Distinct non-empty crop types, sorted.
    pub crops: Vec<String>,
}

impl FieldSummary {
    pub fn of(fields: &[Field]) -> Self {
        let crops: BTreeSet<String> = fields
            .iter()
            .map(|f| f.crop_type.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            count: fields.len(),
            total_area: fields.iter().map(|f| f.area).sum(),
            crops: crops.into_iter().collect(),
        }
    }
}

#[derive(Clone)]
pub struct FieldStore<T, C> {
    client: ApiClient<T>,
    state: C,
    notifier: Arc<dyn Notifier>,
}

impl<T, C> FieldStore<T, C>
where
    T: Transport,
    C: StateCell<FieldState>,
{
    pub fn new(client: ApiClient<T>, state: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            state,
            notifier,
        }
    }

    pub fn state(&self) -> FieldState {
        self.state.get()
    }

    pub async fn fetch_fields(&self, cancel: &CancelToken) {
        self.begin();
        match self.client.fields().list(cancel).await {
            Ok(fields) => {
                tracing::debug!(count = fields.len(), "fields loaded");
                self.state.update(|s| {
                    s.fields = fields;
                    s.loading = false;
                });
            }
            Err(e) => {
                self.fail(e, "Failed to fetch fields");
            }
        }
    }

    pub async fn fetch_field(&self, id: &str, cancel: &CancelToken) {
        self.begin();
        match self.client.fields().get(id, cancel).await {
            Ok(field) => self.state.update(|s| {
                s.selected = Some(field);
                s.loading = false;
            }),
            Err(e) => {
                self.fail(e, "Failed to fetch field");
            }
        }
    }

    /// Select a field already in the list, or clear the selection.
    pub fn select_field(&self, field: Option<Field>) {
        self.state.update(|s| s.selected = field);
    }

    pub async fn add_field(&self, input: &FieldInput, cancel: &CancelToken) -> Result<Field> {
        self.begin();
        match self.client.fields().create(input, cancel).await {
            Ok(field) => {
                tracing::info!(id = %field.id, name = %field.name, "field added");
                self.state.update(|s| {
                    s.fields.push(field.clone());
                    s.loading = false;
                });
                self.notifier.success("Field added successfully");
                Ok(field)
            }
            Err(e) => Err(self.fail(e, "Failed to add field")),
        }
    }

    pub async fn update_field(
        &self,
        id: &str,
        input: &FieldInput,
        cancel: &CancelToken,
    ) -> Result<Field> {
        self.begin();
        match self.client.fields().update(id, input, cancel).await {
            Ok(field) => {
                tracing::info!(id = %field.id, "field updated");
                self.state.update(|s| {
                    if let Some(slot) = s.fields.iter_mut().find(|f| f.id == id) {
                        *slot = field.clone();
                    }
                    if s.selected.as_ref().is_some_and(|f| f.id == id) {
                        s.selected = Some(field.clone());
                    }
                    s.loading = false;
                });
                self.notifier.success("Field updated successfully");
                Ok(field)
            }
            Err(e) => Err(self.fail(e, "Failed to update field")),
        }
    }

    pub async fn delete_field(&self, id: &str, cancel: &CancelToken) -> Result<()> {
        self.begin();
        match self.client.fields().delete(id, cancel).await {
            Ok(()) => {
                tracing::info!(id, "field deleted");
                self.state.update(|s| {
                    s.fields.retain(|f| f.id != id);
                    if s.selected.as_ref().is_some_and(|f| f.id == id) {
                        s.selected = None;
                    }
                    s.loading = false;
                });
                self.notifier.success("Field deleted successfully");
                Ok(())
            }
            Err(e) => Err(self.fail(e, "Failed to delete field")),
        }
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, e: ApiError, fallback: &str) -> crate::Error {
        if e.is_cancelled() {
            self.state.update(|s| s.loading = false);
            return e.into();
        }
        let message = e.user_message(fallback);
        tracing::warn!("{fallback}: {e}");
        self.state.update(|s| {
            s.loading = false;
            s.error = Some(message.clone());
        });
        self.notifier.error(&message);
        e.into()
    }
}
