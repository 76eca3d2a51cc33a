use egui::{Context, Id, Pos2, Rect, Vec2};

use crate::models::appointment::{Appointment, AppointmentId};
use crate::services::appointment::SlotRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragView {
    Day,
    Week,
}

#[derive(Clone, Debug)]
pub struct DragContext {
    pub appointment_id: AppointmentId,
    pub origin: SlotRef,
    pub duration_slots: u32,
    #[allow(dead_code)]
    pub pointer_offset: Vec2,
    pub pointer_pos: Option<Pos2>,
    pub hovered_slot: Option<SlotRef>,
    pub hovered_rect: Option<Rect>,
    pub view: DragView,
}

impl DragContext {
    pub fn from_appointment(appointment: &Appointment, pointer_offset: Vec2, view: DragView) -> Self {
        let origin = SlotRef::new(appointment.date, appointment.cabin_id, appointment.start);
        Self {
            appointment_id: appointment.id.clone(),
            origin,
            duration_slots: appointment.duration_slots,
            pointer_offset,
            pointer_pos: None,
            hovered_slot: Some(origin),
            hovered_rect: None,
            view,
        }
    }
}

pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("agenda_appointment_drag_state")
    }

    pub fn begin(ctx: &Context, context: DragContext) {
        ctx.memory_mut(|mem| {
            mem.data.insert_persisted(Self::storage_id(), context);
        });
    }

    pub fn active(ctx: &Context) -> Option<DragContext> {
        ctx.memory_mut(|mem| mem.data.get_persisted::<DragContext>(Self::storage_id()))
    }

    pub fn active_for_view(ctx: &Context, view: DragView) -> Option<DragContext> {
        Self::active(ctx).filter(|ctx_data| ctx_data.view == view)
    }

    pub fn is_active_for_view(ctx: &Context, view: DragView) -> bool {
        Self::active_for_view(ctx, view).is_some()
    }

    pub fn update_hover(ctx: &Context, slot: SlotRef, rect: Rect, pointer_pos: Pos2) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_persisted::<DragContext>(id) {
                state.hovered_slot = Some(slot);
                state.hovered_rect = Some(rect);
                state.pointer_pos = Some(pointer_pos);
                mem.data.insert_persisted(id, state);
            }
        });
    }

    pub fn finish_for_view(ctx: &Context, view: DragView) -> Option<DragContext> {
        let id = Self::storage_id();
        let mut result = None;
        ctx.memory_mut(|mem| {
            if let Some(current) = mem.data.get_persisted::<DragContext>(id) {
                if current.view == view {
                    result = Some(current);
                    mem.data.remove::<DragContext>(id);
                }
            }
        });
        result
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<DragContext>(Self::storage_id());
        });
    }
}
