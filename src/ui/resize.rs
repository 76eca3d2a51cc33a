// Appointment Resize System
//
// Duration-only resizing by dragging the handle on an appointment block's
// bottom edge. The committed value replaces `duration_slots` verbatim; the
// drag-reflow clamp does not run on this path.

use chrono::{NaiveTime, Timelike};
use egui::{Context, Id, Pos2, Rect, Vec2};

use crate::models::appointment::{Appointment, AppointmentId};
use crate::services::timegrid::SLOT_MINUTES;
use crate::ui::drag::DragView;

/// Size of the resize handle hit area
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Context for an active resize operation
#[derive(Clone, Debug)]
pub struct ResizeContext {
    pub appointment_id: AppointmentId,
    pub start: NaiveTime,
    pub original_duration_slots: u32,
    /// Slot start time the pointer is currently over
    pub hovered_time: Option<NaiveTime>,
    pub pointer_pos: Option<Pos2>,
    pub view: DragView,
}

impl ResizeContext {
    pub fn from_appointment(appointment: &Appointment, view: DragView) -> Self {
        Self {
            appointment_id: appointment.id.clone(),
            start: appointment.start,
            original_duration_slots: appointment.duration_slots,
            hovered_time: None,
            pointer_pos: None,
            view,
        }
    }

    /// Duration implied by the hovered slot: the block runs from `start`
    /// through the hovered row inclusive, never below one slot.
    pub fn hovered_duration(&self) -> Option<u32> {
        let hovered = self.hovered_time?;
        let start_minutes = self.start.num_seconds_from_midnight() as i64 / 60;
        let hovered_minutes = hovered.num_seconds_from_midnight() as i64 / 60;
        let slots = (hovered_minutes - start_minutes) / SLOT_MINUTES + 1;
        Some(slots.max(1) as u32)
    }
}

/// Manager for resize operations (same shape as DragManager)
pub struct ResizeManager;

impl ResizeManager {
    fn storage_id() -> Id {
        Id::new("agenda_appointment_resize_state")
    }

    pub fn begin(ctx: &Context, context: ResizeContext) {
        ctx.memory_mut(|mem| {
            mem.data.insert_persisted(Self::storage_id(), context);
        });
    }

    pub fn active(ctx: &Context) -> Option<ResizeContext> {
        ctx.memory_mut(|mem| mem.data.get_persisted::<ResizeContext>(Self::storage_id()))
    }

    pub fn active_for_view(ctx: &Context, view: DragView) -> Option<ResizeContext> {
        Self::active(ctx).filter(|ctx_data| ctx_data.view == view)
    }

    pub fn is_active_for_view(ctx: &Context, view: DragView) -> bool {
        Self::active_for_view(ctx, view).is_some()
    }

    pub fn update_hover(ctx: &Context, time: NaiveTime, pointer_pos: Pos2) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_persisted::<ResizeContext>(id) {
                state.hovered_time = Some(time);
                state.pointer_pos = Some(pointer_pos);
                mem.data.insert_persisted(id, state);
            }
        });
    }

    pub fn finish_for_view(ctx: &Context, view: DragView) -> Option<ResizeContext> {
        let id = Self::storage_id();
        let mut result = None;
        ctx.memory_mut(|mem| {
            if let Some(current) = mem.data.get_persisted::<ResizeContext>(id) {
                if current.view == view {
                    result = Some(current);
                    mem.data.remove::<ResizeContext>(id);
                }
            }
        });
        result
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<ResizeContext>(Self::storage_id());
        });
    }
}

/// Hit zone along an appointment block's bottom edge.
pub fn bottom_handle_rect(block_rect: Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(block_rect.left(), block_rect.bottom() - HANDLE_SIZE),
        Vec2::new(block_rect.width(), HANDLE_SIZE),
    )
}

/// Draw the handle circle centered on the bottom edge.
pub fn draw_bottom_handle(ui: &mut egui::Ui, block_rect: Rect, hovered: bool, color: egui::Color32) {
    let center = Pos2::new(
        block_rect.center().x,
        block_rect.bottom() - HANDLE_VISUAL_SIZE / 2.0 - 2.0,
    );
    let radius = if hovered {
        HANDLE_VISUAL_SIZE / 2.0 + 1.0
    } else {
        HANDLE_VISUAL_SIZE / 2.0
    };

    ui.painter().circle_filled(
        center,
        radius,
        if hovered {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_rgba_unmultiplied(
                color.r().saturating_add(60),
                color.g().saturating_add(60),
                color.b().saturating_add(60),
                color.a(),
            )
        },
    );
    ui.painter()
        .circle_stroke(center, radius, egui::Stroke::new(1.0, color.linear_multiply(0.6)));
}
