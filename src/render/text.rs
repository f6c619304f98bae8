//! Plain text outline of layout plans.

use crate::error::Result;
use crate::model::{AssembledDocument, CompletedPage, Point, Size};

/// Convert a layout plan to a plain-text outline, one line per placement.
pub fn to_text(doc: &AssembledDocument) -> Result<String> {
    let mut output = String::new();

    if let Some(ref name) = doc.file_name {
        output.push_str(&format!("{}\n", name));
    }

    for (position, page) in (1..).zip(doc.pages.iter()) {
        render_page(&mut output, position, page);
    }

    Ok(output.trim_end().to_string())
}

fn render_page(output: &mut String, position: u32, page: &CompletedPage) {
    output.push_str(&format!(
        "Page {} (document {}, page {}{})\n",
        position,
        page.document + 1,
        page.number,
        if page.is_last { ", last" } else { "" }
    ));

    let body = &page.body;
    output.push_str(&format!(
        "  {:<20}{}  border {}\n",
        "body",
        frame(body.position, body.size),
        body.border
    ));

    if let Some(ref head) = body.head {
        output.push_str(&format!(
            "    {:<18}y={:.2} h={:.2}  {}\n",
            "head",
            head.position.y,
            head.height,
            head.element.label()
        ));
    }

    for row in &body.rows {
        let background = row
            .background
            .as_ref()
            .map(|b| format!("  [{}]", b))
            .unwrap_or_default();
        output.push_str(&format!(
            "    {:<18}y={:.2} h={:.2}  {}{}\n",
            "row",
            row.position.y,
            row.height,
            row.element.label(),
            background
        ));
    }

    for placement in &page.regions {
        output.push_str(&format!(
            "  {:<20}{}  {}\n",
            placement.kind.as_str(),
            frame(placement.position, placement.size),
            placement.content.label()
        ));
    }
}

fn frame(position: Point, size: Size) -> String {
    format!(
        "x={:.2} y={:.2} w={:.2} h={:.2}",
        position.x, position.y, size.width, size.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SimpleDocument;
    use crate::layout::LayoutOptions;
    use crate::model::{Brush, RegionKind, TextElement};
    use crate::{PrintCollection, PrintRule};

    #[test]
    fn test_to_text() {
        let doc = SimpleDocument::new()
            .with_region(RegionKind::Footer, TextElement::new("Thank you", 30.0), PrintRule::LastPage)
            .with_rule(RegionKind::PageNumbers, PrintRule::AllPages, 12.0)
            .with_options(LayoutOptions::new().with_alternating_colors(vec![Brush::new("#EEEEEE")]))
            .with_item(TextElement::new("Line 1", 20.0));
        let output = PrintCollection::from_document(doc).assemble().unwrap();

        let text = to_text(&output).unwrap();
        assert!(text.starts_with("Page 1 (document 1, page 1, last)"));
        assert!(text.contains("Line 1  [#EEEEEE]"));
        assert!(text.contains("footer"));
        assert!(text.contains("Thank you"));
        assert!(text.ends_with("1 | 1"));
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&AssembledDocument::new()).unwrap(), "");
    }
}
