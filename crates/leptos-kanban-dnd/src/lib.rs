//! Leptos Kanban DragDrop
//!
//! Mouse-event drag and drop for board layouts.
//! Uses movement threshold to distinguish click from drag; drop targets are
//! picked by closest-corners proximity among registered droppable surfaces.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Payload attached to a droppable surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DropData {
    /// A card inside a column (owning column id, current position)
    Card {
        card_id: String,
        column_id: String,
        position: i32,
    },
    /// A column card surface (current card count)
    Column {
        column_id: String,
        card_count: usize,
    },
}

/// One resolved move: insert the dragged card into a column at a position.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveIntent {
    pub card_id: String,
    pub target_column_id: String,
    pub position: i32,
}

/// Id prefix for bare column drop zones that carry no payload.
pub const COLUMN_ZONE_PREFIX: &str = "column-";

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DropRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn from_dom_rect(r: &web_sys::DomRect) -> Self {
        Self::new(r.left(), r.top(), r.width(), r.height())
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.right, self.bottom),
            (self.left, self.bottom),
        ]
    }
}

/// Average distance between corresponding corners of two rects.
pub fn corner_distance(a: &DropRect, b: &DropRect) -> f64 {
    a.corners()
        .iter()
        .zip(b.corners().iter())
        .map(|((ax, ay), (bx, by))| (ax - bx).hypot(ay - by))
        .sum::<f64>()
        / 4.0
}

/// Index of the candidate with the strictly smallest corner distance.
/// On an exact tie the earlier candidate is kept.
pub fn closest_corners(active: &DropRect, candidates: &[DropRect]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, rect) in candidates.iter().enumerate() {
        let d = corner_distance(active, rect);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Resolve a finished drag into at most one move.
///
/// Card payloads insert the dragged card immediately before the target card;
/// column payloads append to the column's tail. A payload-free target is
/// understood as a bare `column-<id>` zone and appends, or abandons the
/// gesture when the column id is unknown.
pub fn resolve_drop<F>(
    dragged_card_id: &str,
    over: Option<(&str, Option<&DropData>)>,
    column_card_count: F,
) -> Option<MoveIntent>
where
    F: Fn(&str) -> Option<usize>,
{
    let (over_id, data) = over?;
    match data {
        Some(DropData::Card {
            column_id, position, ..
        }) => Some(MoveIntent {
            card_id: dragged_card_id.to_string(),
            target_column_id: column_id.clone(),
            position: *position,
        }),
        Some(DropData::Column {
            column_id,
            card_count,
        }) => Some(MoveIntent {
            card_id: dragged_card_id.to_string(),
            target_column_id: column_id.clone(),
            position: *card_count as i32,
        }),
        None => {
            let column_id = over_id.strip_prefix(COLUMN_ZONE_PREFIX)?;
            let count = column_card_count(column_id)?;
            Some(MoveIntent {
                card_id: dragged_card_id.to_string(),
                target_column_id: column_id.to_string(),
                position: count as i32,
            })
        }
    }
}

/// A registered droppable surface.
#[derive(Clone)]
pub struct Droppable {
    pub id: String,
    pub element: web_sys::Element,
    pub data: Option<DropData>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Id of the droppable currently under the drag, per closest-corners
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Live pointer position, for the floating drag preview
    pub pointer_x_read: ReadSignal<i32>,
    pub pointer_x_write: WriteSignal<i32>,
    pub pointer_y_read: ReadSignal<i32>,
    pub pointer_y_write: WriteSignal<i32>,
    /// Source element rect captured when the drag started
    drag_rect_read: ReadSignal<Option<DropRect>>,
    drag_rect_write: WriteSignal<Option<DropRect>>,
    droppables: StoredValue<Vec<Droppable>, LocalStorage>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_x_read, pointer_x_write) = signal(0i32);
    let (pointer_y_read, pointer_y_write) = signal(0i32);
    let (drag_rect_read, drag_rect_write) = signal(None::<DropRect>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_x_read,
        pointer_x_write,
        pointer_y_read,
        pointer_y_write,
        drag_rect_read,
        drag_rect_write,
        droppables: StoredValue::new_local(Vec::new()),
    }
}

/// Register or refresh a droppable surface. Re-registering an id replaces
/// its element and payload, so surfaces can update after each board reload.
pub fn register_droppable(
    dnd: &DndSignals,
    id: String,
    element: web_sys::Element,
    data: Option<DropData>,
) {
    dnd.droppables.update_value(|list| {
        if let Some(existing) = list.iter_mut().find(|d| d.id == id) {
            existing.element = element;
            existing.data = data;
        } else {
            list.push(Droppable { id, element, data });
        }
    });
}

pub fn unregister_droppable(dnd: &DndSignals, id: &str) {
    dnd.droppables.update_value(|list| list.retain(|d| d.id != id));
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_rect_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(
    dnd: DndSignals,
    card_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, textarea or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            dnd.pending_id_write.set(Some(card_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
            dnd.pointer_x_write.set(ev.client_x());
            dnd.pointer_y_write.set(ev.client_y());
        }
    }
}

fn rect_of(droppable: &Droppable) -> DropRect {
    DropRect::from_dom_rect(&droppable.element.get_bounding_client_rect())
}

/// Recompute the drop target from the current pointer position: the dragged
/// rect is translated by the pointer delta and matched against every
/// registered droppable except the dragged card itself.
fn update_drop_target(dnd: &DndSignals, dragging: &str) {
    let Some(start_rect) = dnd.drag_rect_read.get_untracked() else {
        return;
    };
    let dx = (dnd.pointer_x_read.get_untracked() - dnd.start_x_read.get_untracked()) as f64;
    let dy = (dnd.pointer_y_read.get_untracked() - dnd.start_y_read.get_untracked()) as f64;
    let active = start_rect.translate(dx, dy);

    let winner = dnd.droppables.with_value(|list| {
        let candidates: Vec<&Droppable> = list.iter().filter(|d| d.id != dragging).collect();
        let rects: Vec<DropRect> = candidates.iter().map(|d| rect_of(d)).collect();
        closest_corners(&active, &rects).map(|i| candidates[i].id.clone())
    });
    dnd.drop_target_write.set(winner);
}

/// Create mousemove handler for document - starts drag if moved enough,
/// then tracks the pointer and refreshes the closest-corners drop target.
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if let Some(pending_id) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                let start_x = dnd.start_x_read.get_untracked();
                let start_y = dnd.start_y_read.get_untracked();
                let dx = (ev.client_x() - start_x).abs();
                let dy = (ev.client_y() - start_y).abs();

                // Start dragging if moved beyond threshold
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    let rect = dnd.droppables.with_value(|list| {
                        list.iter().find(|d| d.id == pending_id).map(rect_of)
                    });
                    dnd.drag_rect_write.set(rect);
                    dnd.dragging_id_write.set(Some(pending_id));
                }
            }
        }

        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            dnd.pointer_x_write.set(ev.client_x());
            dnd.pointer_y_write.set(ev.client_y());
            update_drop_target(&dnd, &dragging);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` receives the dragged card id, the winning droppable id and its
/// payload; clicks that never crossed the threshold do not fire it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, String, Option<DropData>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            let data = dnd
                .droppables
                .with_value(|list| list.iter().find(|d| d.id == target).and_then(|d| d.data.clone()));
            end_drag(&dnd);
            on_drop(dragged, target, data);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_data(card_id: &str, column_id: &str, position: i32) -> DropData {
        DropData::Card {
            card_id: card_id.to_string(),
            column_id: column_id.to_string(),
            position,
        }
    }

    #[test]
    fn corner_distance_of_identical_rects_is_zero() {
        let r = DropRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(corner_distance(&r, &r), 0.0);
    }

    #[test]
    fn corner_distance_of_translated_rect_is_the_offset() {
        let a = DropRect::new(0.0, 0.0, 100.0, 50.0);
        let b = a.translate(3.0, 4.0);
        assert_eq!(corner_distance(&a, &b), 5.0);
    }

    #[test]
    fn closest_corners_picks_strictly_smallest() {
        let active = DropRect::new(0.0, 0.0, 100.0, 50.0);
        let far = active.translate(300.0, 0.0);
        let near = active.translate(10.0, 0.0);
        let candidates = vec![far, near];
        assert_eq!(closest_corners(&active, &candidates), Some(1));
    }

    #[test]
    fn closest_corners_keeps_earlier_candidate_on_tie() {
        let active = DropRect::new(0.0, 0.0, 100.0, 50.0);
        let left = active.translate(-20.0, 0.0);
        let right = active.translate(20.0, 0.0);
        assert_eq!(closest_corners(&active, &[left, right]), Some(0));
    }

    #[test]
    fn closest_corners_with_no_candidates_is_none() {
        let active = DropRect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(closest_corners(&active, &[]), None);
    }

    #[test]
    fn drop_on_card_inserts_before_it() {
        let data = card_data("other", "col-b", 2);
        let intent = resolve_drop("dragged", Some(("other", Some(&data))), |_| None).unwrap();
        assert_eq!(intent.card_id, "dragged");
        assert_eq!(intent.target_column_id, "col-b");
        assert_eq!(intent.position, 2);
    }

    #[test]
    fn drop_on_column_surface_appends() {
        let data = DropData::Column {
            column_id: "col-a".to_string(),
            card_count: 4,
        };
        let intent = resolve_drop("dragged", Some(("column-col-a", Some(&data))), |_| None).unwrap();
        assert_eq!(intent.target_column_id, "col-a");
        assert_eq!(intent.position, 4);
    }

    #[test]
    fn drop_on_empty_column_surface_appends_at_zero() {
        let data = DropData::Column {
            column_id: "col-a".to_string(),
            card_count: 0,
        };
        let intent = resolve_drop("dragged", Some(("column-col-a", Some(&data))), |_| None).unwrap();
        assert_eq!(intent.position, 0);
    }

    #[test]
    fn bare_column_zone_resolves_by_prefix() {
        let intent = resolve_drop(
            "dragged",
            Some(("column-col-c", None)),
            |id| if id == "col-c" { Some(3) } else { None },
        )
        .unwrap();
        assert_eq!(intent.target_column_id, "col-c");
        assert_eq!(intent.position, 3);
    }

    #[test]
    fn bare_zone_with_unknown_column_abandons() {
        assert_eq!(resolve_drop("dragged", Some(("column-gone", None)), |_| None), None);
    }

    #[test]
    fn unprefixed_payload_free_target_abandons() {
        assert_eq!(resolve_drop("dragged", Some(("stray", None)), |_| Some(1)), None);
    }

    #[test]
    fn no_target_abandons() {
        assert_eq!(resolve_drop("dragged", None, |_| Some(1)), None);
    }
}
