//! List item rendering

use crate::document::Document;
use crate::error::{CoreError, CoreResult};
use crate::types::{item_id, ToggleHandler, UserRecord, ADDRESS_LIST_ID, SHOW_INFO_LABEL};

/// Renders one list item per user into a fixed container.
pub struct ListRenderer {
    container_id: String,
}

impl ListRenderer {
    /// Renderer targeting the container with the given id.
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Append `person-{index}` to the end of the container.
    ///
    /// The item holds, in order: an `img` with the thumbnail as `src`, the
    /// first name as text, and a `Show Info` button whose handler carries a
    /// copy of `record`. Existing items are left untouched.
    pub fn render(
        &self,
        document: &mut Document,
        record: &UserRecord,
        index: usize,
    ) -> CoreResult<()> {
        let container = document
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| CoreError::LookupError(self.container_id.clone()))?;

        let id = item_id(index);
        let li = document.create_element("li");
        document.set_id(li, &id);

        let img = document.create_element("img");
        document.set_attribute(img, "src", record.picture_thumbnail_url());
        document.append_child(li, img)?;

        let name = document.create_text_node(record.first_name());
        document.append_child(li, name)?;

        let button = document.create_element("button");
        let label = document.create_text_node(SHOW_INFO_LABEL);
        document.append_child(button, label)?;
        document.set_handler(button, ToggleHandler::new(id.clone(), record.clone()));
        document.append_child(li, button)?;

        document.append_child(container, li)?;
        log::debug!("Rendered {id} ({})", record.first_name());
        Ok(())
    }
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new(ADDRESS_LIST_ID)
    }
}
