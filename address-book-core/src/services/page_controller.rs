//! Page load orchestration

use std::sync::Arc;

use address_book_provider::UserSource;

use crate::document::Document;
use crate::error::{CoreError, CoreResult};
use crate::services::{DetailRevealer, ListRenderer, UserStore};
use crate::types::{item_id, ADDRESS_LIST_ID};

/// Owns the document and the current batch, and drives the page load.
pub struct PageController {
    source: Arc<dyn UserSource>,
    batch_size: u32,
    store: UserStore,
    document: Document,
    renderer: ListRenderer,
}

impl PageController {
    /// Controller over a fresh document holding an empty address list.
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>, batch_size: u32) -> Self {
        Self::with_document(source, batch_size, Document::with_container(ADDRESS_LIST_ID))
    }

    /// Controller over an existing document.
    #[must_use]
    pub fn with_document(source: Arc<dyn UserSource>, batch_size: u32, document: Document) -> Self {
        Self {
            source,
            batch_size,
            store: UserStore::new(),
            document,
            renderer: ListRenderer::default(),
        }
    }

    /// Fetch one batch, store it, then render every record in order.
    ///
    /// Nothing is rendered unless the whole batch arrived. Running again
    /// appends a second set of items after the first.
    pub async fn run(&mut self) -> CoreResult<()> {
        log::info!(
            "Loading {} users from {}",
            self.batch_size,
            self.source.id()
        );

        let batch = match self.source.fetch_batch(self.batch_size).await {
            Ok(batch) => batch,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to load users: {e}");
                } else {
                    log::error!("Failed to load users: {e}");
                }
                return Err(CoreError::Source(e));
            }
        };

        self.store.replace(batch);
        for (index, record) in self.store.all().iter().enumerate() {
            self.renderer.render(&mut self.document, record, index)?;
        }

        log::info!("Rendered {} users", self.store.len());
        Ok(())
    }

    /// Activate the toggle of the item `person-{item_index}`.
    ///
    /// Returns whether the document changed.
    pub fn toggle(&mut self, item_index: usize) -> bool {
        let id = item_id(item_index);
        let Some(button) = self
            .document
            .get_element_by_id(&id)
            .and_then(|li| self.document.child_elements(li, "button").next())
        else {
            log::debug!("No toggle for {id}");
            return false;
        };
        DetailRevealer::activate(&mut self.document, button)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}
