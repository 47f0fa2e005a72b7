//! A ready-made invoice layout for demos and tests.
//!
//! The mix of bare and px-suffixed dimension values is intentional: real
//! documents carry both forms, so the template doubles as a fixture for the
//! tolerant dimension parsing.

use placard_core::{
    Dimension, Element, ElementId, ElementKind, ElementStore, Position, StoreResult,
};

/// A 1x1 transparent PNG, stands in for an uploaded logo.
const LOGO_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAA\
fFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn text(id: &str, top: f64, left: f64, width: &str, height: &str, content: &str) -> Element {
    Element {
        id: ElementId::from(id),
        kind: ElementKind::Text,
        position: Position::new(top, left),
        dimension: Dimension::new(width, height),
        content: content.to_string(),
    }
}

/// Build a small invoice document: logo, header, line-item placeholder,
/// payment details and totals.
pub fn sample_invoice() -> StoreResult<ElementStore> {
    let mut store = ElementStore::new();

    store.insert(Element {
        id: ElementId::from("IMAGE__1616154982257__0"),
        kind: ElementKind::Image,
        position: Position::new(-21.92, -1.0),
        dimension: Dimension::new("114px", "114px"),
        content: LOGO_URI.to_string(),
    })?;

    store.insert(text(
        "TEXT__1616155060789__1",
        16.08,
        126.0,
        "174px",
        "50px",
        "<p><strong style=\"font-size: 20px;\">Northwind Traders</strong></p>",
    ))?;
    store.insert(text(
        "TEXT__1616155106456__2",
        43.0,
        130.0,
        "100px",
        "50px",
        "<p>Invoice</p>",
    ))?;
    store.insert(text(
        "TEXT__1616155168276__3",
        9.0,
        1065.0,
        "150",
        "50",
        "<p><strong>Date: </strong>18/Mar/2021</p><p><strong>Time: </strong>5.30PM</p>",
    ))?;
    store.insert(text(
        "TEXT__1616155232172__4",
        86.08,
        3.0,
        "1220px",
        "254px",
        "<p class=\"ql-align-center\"><span style=\"font-size: 20px;\">Line Items</span></p>",
    ))?;
    store.insert(text(
        "TEXT__1616155481995__5",
        356.0,
        21.0,
        "113px",
        "50px",
        "<p><strong style=\"font-size: 16px;\"><u>Payment Info</u></strong></p>",
    ))?;
    store.insert(text(
        "TEXT__1616155336963__6",
        384.0,
        19.0,
        "153px",
        "50px",
        "<p><strong style=\"font-size: 12px;\">Account No: </strong>\
         <span style=\"font-size: 12px;\">#123213</span></p>",
    ))?;
    store.insert(text(
        "TEXT__1616156900518__7",
        390.0,
        909.0,
        "100px",
        "50px",
        "<p><strong>Sub-Total</strong></p>",
    ))?;
    store.insert(text(
        "TEXT__1616157060762__8",
        389.0,
        1021.0,
        "150",
        "50",
        "<p>$400.00</p>",
    ))?;
    store.insert(text(
        "TEXT__1616157140477__9",
        455.0,
        893.0,
        "190px",
        "50px",
        "<p><strong style=\"font-size: 20px;\">Grand Total: </strong>\
         <span style=\"font-size: 20px;\">$800</span></p>",
    ))?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::CanvasController;
    use std::collections::HashSet;

    #[test]
    fn test_template_inserts_without_duplicates() {
        let store = sample_invoice().unwrap();
        assert_eq!(store.len(), 10);

        let ids: HashSet<_> = store.ids().collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_template_dimensions_parse_in_both_forms() {
        let store = sample_invoice().unwrap();
        for element in store.elements() {
            let size = element.dimension.to_size();
            assert!(size.width > 0.0, "width failed to parse for {}", element.id);
            assert!(size.height > 0.0);
        }
    }

    #[test]
    fn test_template_drives_a_controller() {
        let store = sample_invoice().unwrap();
        let mut controller = CanvasController::with_store(store);

        controller.select_all();
        assert_eq!(controller.selection().len(), 10);
        controller.delete_selected();
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_logo_carries_a_data_uri() {
        let store = sample_invoice().unwrap();
        let logo = store
            .get(&placard_core::ElementId::from("IMAGE__1616154982257__0"))
            .unwrap();
        assert!(logo.content.starts_with("data:image/png;base64,"));
        assert_eq!(logo.kind, ElementKind::Image);
    }
}
