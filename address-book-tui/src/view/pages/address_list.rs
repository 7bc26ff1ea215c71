//! Address list page

use address_book_core::document::{Document, Node, NodeId};
use address_book_core::ADDRESS_LIST_ID;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::util::wrap_to_width;
use crate::view::theme::{colors, Styles};

/// Indent of the lines under an item's heading
const INDENT: &str = "    ";

/// Draw the address list
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.address_list.loading {
        render_message(frame, area, "Loading users...");
        return;
    }

    let document = app.controller.document();
    let items: Vec<NodeId> = document
        .get_element_by_id(ADDRESS_LIST_ID)
        .map(|list| document.child_elements(list, "li").collect())
        .unwrap_or_default();

    if items.is_empty() {
        render_message(frame, area, "No users loaded");
        return;
    }

    let width = usize::from(area.width);
    let mut lines = Vec::new();
    let mut selected_span = (0, 0);

    for (index, li) in items.iter().enumerate() {
        let is_selected = index == app.address_list.selected;
        let top = lines.len();
        lines.extend(item_lines(document, *li, is_selected, width));
        if is_selected {
            selected_span = (top, lines.len());
        }
        lines.push(Line::from(""));
    }

    let offset = scroll_offset(selected_span, usize::from(area.height));
    let paragraph = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// Lines for one `li`: a heading with the name and toggle, the thumbnail,
/// then any revealed records.
///
/// Text before the button is the name; text after it was appended by the
/// toggle.
fn item_lines(document: &Document, li: NodeId, is_selected: bool, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let marker = if is_selected { "▶ " } else { "  " };
    let name_style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    };

    let mut heading = vec![Span::styled(marker, Style::default().fg(c.highlight))];
    let mut thumbnails = Vec::new();
    let mut details = Vec::new();
    let mut seen_button = false;

    for child in document.children(li) {
        match document.node(*child) {
            Some(Node::Element(element)) if element.tag() == "img" => {
                thumbnails.push(element.attribute("src").unwrap_or_default().to_string());
            }
            Some(Node::Element(element)) if element.tag() == "button" => {
                seen_button = true;
                heading.push(Span::raw(" "));
                heading.push(Span::styled(
                    format!("[ {} ]", document.text_content(*child)),
                    Style::default().fg(c.button),
                ));
            }
            Some(Node::Text(text)) if seen_button => details.push(text.clone()),
            Some(Node::Text(text)) => heading.push(Span::styled(text.clone(), name_style)),
            Some(Node::Element(_)) | None => {}
        }
    }

    let mut lines = vec![Line::from(heading)];
    for src in thumbnails {
        lines.push(Line::styled(format!("{INDENT}{src}"), Style::default().fg(c.muted)));
    }
    let detail_width = width.saturating_sub(INDENT.len());
    for text in details {
        for row in wrap_to_width(&text, detail_width) {
            lines.push(Line::styled(format!("{INDENT}{row}"), Style::default().fg(c.detail)));
        }
    }
    lines
}

/// First visible line so the selected item's lines `[top, bottom)` fit,
/// preferring its heading when the item is taller than the view.
fn scroll_offset((top, bottom): (usize, usize), height: usize) -> usize {
    if bottom <= height {
        0
    } else {
        (bottom - height).min(top)
    }
}
