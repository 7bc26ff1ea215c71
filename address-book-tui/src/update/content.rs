//! Address list updates

use crate::message::ContentMessage;
use crate::model::App;

/// Handle an address list message
pub fn update(app: &mut App, msg: ContentMessage) {
    let len = app.item_count();
    match msg {
        ContentMessage::SelectPrevious => app.address_list.select_previous(),
        ContentMessage::SelectNext => app.address_list.select_next(len),
        ContentMessage::SelectFirst => app.address_list.select_first(),
        ContentMessage::SelectLast => app.address_list.select_last(len),
        ContentMessage::Activate => handle_activate(app),
    }
}

fn handle_activate(app: &mut App) {
    let index = app.address_list.selected;
    if app.controller.toggle(index) {
        let name = app
            .controller
            .store()
            .get(index)
            .map_or_else(|| format!("item {index}"), |record| record.first_name().to_string());
        app.set_status(format!("Showing info for {name}"));
    } else {
        app.set_status("Nothing to show");
    }
}

#[cfg(test)]
mod tests {
    use address_book_core::document::Node;

    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn selection_is_clamped_to_rendered_items() {
        let mut app = test_app(&["Ada", "Brook", "Cleo"]);

        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.address_list.selected, 2);
        update(&mut app, ContentMessage::SelectNext);
        assert_eq!(app.address_list.selected, 2);
        update(&mut app, ContentMessage::SelectFirst);
        update(&mut app, ContentMessage::SelectPrevious);
        assert_eq!(app.address_list.selected, 0);
    }

    #[test]
    fn activate_reveals_selected_record() {
        let mut app = test_app(&["Ada", "Brook"]);
        update(&mut app, ContentMessage::SelectNext);

        update(&mut app, ContentMessage::Activate);

        let doc = app.controller.document();
        let li = doc.get_element_by_id("person-1").unwrap();
        let last = *doc.children(li).last().unwrap();
        let expected = app.controller.store().get(1).unwrap().to_json();
        assert_eq!(doc.node(last).and_then(Node::as_text), Some(expected.as_str()));
        assert_eq!(app.status_message.as_deref(), Some("Showing info for Brook"));
    }

    #[test]
    fn activate_twice_appends_twice() {
        let mut app = test_app(&["Ada"]);

        update(&mut app, ContentMessage::Activate);
        update(&mut app, ContentMessage::Activate);

        let doc = app.controller.document();
        let li = doc.get_element_by_id("person-0").unwrap();
        assert_eq!(doc.children(li).len(), 5);
    }

    #[test]
    fn activate_on_empty_list_is_noop() {
        let mut app = test_app(&[]);
        let before = app.controller.document().node_count();

        update(&mut app, ContentMessage::Activate);

        assert_eq!(app.controller.document().node_count(), before);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to show"));
    }
}
