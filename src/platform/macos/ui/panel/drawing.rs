//! Drawing functions for the panel view.
//!
//! The view's `drawRect:` hands the rows over to [`draw_panel`]; layout
//! comes from [`crate::panel::row_rect`] so it stays testable.

use crate::model::constants::{PANEL_CORNER_RADIUS, ROW_FONT_SIZE};
use crate::panel::{row_rect, PanelRow};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nsstring_id, CGFloat, NSPoint, NSRect, NSSize,
};

/// Text alignment within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

impl Align {
    /// `NSTextAlignment` raw value.
    fn raw(self) -> isize {
        match self {
            Align::Left => 0,
            Align::Right => 2,
        }
    }
}

/// Draw the panel background and one row per city.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context
/// of a flipped view.
pub unsafe fn draw_panel(bounds: NSRect, rows: &[PanelRow]) {
    draw_background(bounds);

    let attributes_left = text_attributes(Align::Left);
    let attributes_right = text_attributes(Align::Right);

    for (index, row) in rows.iter().enumerate() {
        let (origin, size) = row_rect(index, bounds.size.width);
        let rect = NSRect::new(
            NSPoint::new(origin.x, origin.y + text_baseline_offset(size.height)),
            NSSize::new(size.width, size.height),
        );
        let name = nsstring_id(&row.name);
        let _: () = msg_send![name, drawInRect: rect, withAttributes: attributes_left];
        let time = nsstring_id(&row.time);
        let _: () = msg_send![time, drawInRect: rect, withAttributes: attributes_right];
    }
}

/// Semi-transparent rounded background.
unsafe fn draw_background(bounds: NSRect) {
    let path: id = msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: bounds,
        xRadius: PANEL_CORNER_RADIUS,
        yRadius: PANEL_CORNER_RADIUS
    ];
    let fill: id = msg_send![
        get_class("NSColor"),
        colorWithCalibratedWhite: 0.1f64,
        alpha: 0.75f64
    ];
    let _: () = msg_send![fill, set];
    let _: () = msg_send![path, fill];
}

/// Vertical nudge that centers a single line of text in a row.
fn text_baseline_offset(row_height: f64) -> f64 {
    ((row_height - ROW_FONT_SIZE * 1.2) / 2.0).max(0.0)
}

/// Monospaced white text with the given alignment.
unsafe fn text_attributes(align: Align) -> id {
    const FONT_WEIGHT_MEDIUM: CGFloat = 0.23;
    let font: id = msg_send![
        get_class("NSFont"),
        monospacedSystemFontOfSize: ROW_FONT_SIZE as CGFloat,
        weight: FONT_WEIGHT_MEDIUM
    ];
    let color: id = msg_send![get_class("NSColor"), whiteColor];
    let style: id = msg_send![get_class("NSMutableParagraphStyle"), new];
    let _: () = msg_send![style, setAlignment: align.raw()];
    // NSLineBreakByTruncatingTail
    let _: () = msg_send![style, setLineBreakMode: 4usize];
    let _: id = msg_send![style, autorelease];

    let dict: id = msg_send![get_class("NSMutableDictionary"), dictionary];
    let _: () = msg_send![dict, setObject: font, forKey: nsstring_id("NSFont")];
    let _: () = msg_send![dict, setObject: color, forKey: nsstring_id("NSColor")];
    let _: () = msg_send![dict, setObject: style, forKey: nsstring_id("NSParagraphStyle")];
    dict
}
