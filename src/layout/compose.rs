//! Placing the body and appendix regions onto a finished page.

use super::tracker::PageSpaceTracker;
use crate::document::PrintDocument;
use crate::error::{Error, Result};
use crate::model::{
    BodyFrame, CompletedPage, PlacedContent, Placement, Point, RegionKind, Row, Size,
};

/// Turn the tracker of a finished page into a [`CompletedPage`].
///
/// Places the body frame, then each appendix the inclusion policy selects
/// for this page. An appendix that is selected but not supplied by the
/// document is a configuration error.
pub(crate) fn compose_page(
    document: &dyn PrintDocument,
    tracker: PageSpaceTracker<'_>,
    page_number: u32,
    is_last_page: bool,
    document_index: usize,
) -> Result<CompletedPage> {
    let geometry = document.geometry();
    let margin = geometry.margin();
    let width = geometry.printable_size().width;

    let body_band = geometry.band(RegionKind::Body, page_number, is_last_page);
    let border = tracker.border().clone();
    let (head, tracked) = tracker.into_rows();

    let head_row = head.element.map(|element| Row {
        element,
        position: Point::new(margin.left, body_band.offset),
        height: head.height,
        background: None,
    });

    let rows = tracked
        .into_iter()
        .map(|row| Row {
            element: row.element,
            position: Point::new(margin.left, body_band.offset + row.offset),
            height: row.height,
            background: row.background,
        })
        .collect();

    let mut page = CompletedPage {
        number: page_number,
        is_last: is_last_page,
        document: document_index,
        size: geometry.page_size(),
        body: BodyFrame {
            position: Point::new(margin.left, body_band.offset),
            size: Size::new(width, body_band.length),
            border,
            head: head_row,
            rows,
        },
        regions: Vec::new(),
        debug_overlay: document.options().debug_overlay,
    };

    for kind in RegionKind::APPENDIXES {
        add_region(document, &mut page, kind)?;
    }

    Ok(page)
}

fn add_region(document: &dyn PrintDocument, page: &mut CompletedPage, kind: RegionKind) -> Result<()> {
    if !document
        .inclusion()
        .should_include(kind, page.number, page.is_last)
    {
        return Ok(());
    }

    let element = document.region(kind).ok_or(Error::MissingRegion(kind))?;

    let geometry = document.geometry();
    let band = geometry.band(kind, page.number, page.is_last);

    log::debug!("Print {} on page #{}", kind, page.number);
    page.regions.push(Placement {
        kind,
        content: PlacedContent::Element(element),
        position: Point::new(geometry.margin().left, band.offset),
        size: Size::new(geometry.printable_size().width, band.length),
    });

    Ok(())
}

/// Stamp a "position | total" label onto a page.
///
/// `position` is the page's place in the numbering run, which may differ
/// from `page.number` when numbering is continuous across documents.
/// Returns `false` when the inclusion policy skips page numbers there.
pub(crate) fn stamp_page_number(
    document: &dyn PrintDocument,
    page: &mut CompletedPage,
    position: u32,
    total: u32,
) -> bool {
    if !document
        .inclusion()
        .should_include(RegionKind::PageNumbers, position, page.is_last)
    {
        return false;
    }

    let geometry = document.geometry();
    let band = geometry.band(RegionKind::PageNumbers, position, page.is_last);

    log::debug!("Print page numbers on page #{}", position);
    page.regions.push(Placement {
        kind: RegionKind::PageNumbers,
        content: PlacedContent::Text(format!("{} | {}", position, total)),
        position: Point::new(geometry.margin().left, band.offset),
        size: Size::new(geometry.printable_size().width, band.length),
    });

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::PrintRule;
    use crate::dimension::PrintDimension;
    use crate::document::{SimpleDocument, TableHead};
    use crate::model::{Margin, TextElement};

    fn document() -> SimpleDocument {
        SimpleDocument::new()
            .with_dimension(PrintDimension::new(
                Size::new(300.0, 400.0),
                Margin::uniform(20.0),
                Default::default(),
            ))
            .with_region(RegionKind::Header, TextElement::new("Header", 40.0), PrintRule::AllPages)
            .with_region(RegionKind::Summary, TextElement::new("Total", 30.0), PrintRule::LastPage)
            .with_rule(RegionKind::PageNumbers, PrintRule::AllButFirst, 10.0)
            .with_table_head(TableHead::new(TextElement::new("Columns", 15.0).shared(), 260.0))
    }

    #[test]
    fn test_compose_positions_body_and_regions() {
        let doc = document();
        let mut tracker = PageSpaceTracker::new(doc.geometry(), doc.table_head());
        tracker.push_row(TextElement::new("Line 1", 25.0).shared(), 25.0, None);

        let page = compose_page(&doc, tracker, 1, true, 0).unwrap();

        // Header 20..60, body from 60
        assert_eq!(page.body.position, Point::new(20.0, 60.0));
        // Last page: summary takes 30pt, page numbers excluded on page 1
        assert_eq!(page.body.size, Size::new(260.0, 290.0));
        assert_eq!(page.body.head.as_ref().map(|h| h.position.y), Some(60.0));
        assert_eq!(page.body.rows[0].position, Point::new(20.0, 75.0));

        let header = page.region(RegionKind::Header).unwrap();
        assert_eq!(header.position, Point::new(20.0, 20.0));
        assert_eq!(header.size, Size::new(260.0, 40.0));

        let summary = page.region(RegionKind::Summary).unwrap();
        assert_eq!(summary.position.y, 350.0);
        assert_eq!(summary.content.label(), "Total");
    }

    #[test]
    fn test_compose_skips_excluded_regions() {
        let doc = document();
        let tracker = PageSpaceTracker::new(doc.geometry(), doc.table_head());
        let page = compose_page(&doc, tracker, 1, false, 0).unwrap();

        assert!(page.has_region(RegionKind::Header));
        assert!(!page.has_region(RegionKind::Summary));
        assert!(page.is_empty());
    }

    #[test]
    fn test_missing_region_is_fatal() {
        let doc = document().with_rule(RegionKind::Footer, PrintRule::AllPages, 20.0);
        let tracker = PageSpaceTracker::new(doc.geometry(), doc.table_head());

        let result = compose_page(&doc, tracker, 1, false, 0);
        assert!(matches!(result, Err(Error::MissingRegion(RegionKind::Footer))));
    }

    #[test]
    fn test_stamp_page_number_respects_policy() {
        let doc = document();
        let tracker = PageSpaceTracker::new(doc.geometry(), doc.table_head());
        let mut first = compose_page(&doc, tracker, 1, false, 0).unwrap();
        assert!(!stamp_page_number(&doc, &mut first, 1, 2));
        assert!(first.page_number_text().is_none());

        let tracker = PageSpaceTracker::new(doc.geometry(), doc.table_head());
        let mut second = compose_page(&doc, tracker, 2, true, 0).unwrap();
        assert!(stamp_page_number(&doc, &mut second, 2, 2));
        assert_eq!(second.page_number_text(), Some("2 | 2"));
        let numbers = second.region(RegionKind::PageNumbers).unwrap();
        assert_eq!(numbers.position.y, 370.0);
    }
}
