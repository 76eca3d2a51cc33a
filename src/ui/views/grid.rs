//! Time-grid rendering shared by the daily and weekly agenda views.
//!
//! Composes `time slots x active cabins` (x day columns) into the cell
//! matrix, places appointment blocks by their `(date, cabin, start)` triple,
//! and owns the pointer interactions: click-to-book, click-to-edit,
//! drag-to-move (committed through the book's reflow pass) and the bottom
//! resize handle.

use chrono::{Local, NaiveDate, Timelike};
use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Stroke, Vec2};

use super::{weekday_name_es, GridOutcome, GridPalette};
use crate::models::appointment::Appointment;
use crate::models::clinic::ClinicConfig;
use crate::services::appointment::{AppointmentBook, ReflowOutcome, SlotRef};
use crate::services::cabin;
use crate::services::timegrid::{self, ROW_HEIGHT};
use crate::ui::drag::{DragContext, DragManager, DragView};
use crate::ui::resize::{self, ResizeContext, ResizeManager};
use crate::ui::theme::AgendaTheme;

pub const TIME_LABEL_WIDTH: f32 = 80.0;
pub const COLUMN_SPACING: f32 = 1.0;
/// Narrowest usable cabin column.
pub const MIN_CABIN_WIDTH: f32 = 52.0;

/// A rendered appointment block: the rect spans `duration_slots` rows below
/// its start cell.
struct Block {
    rect: Rect,
    appointment: Appointment,
}

/// Render the full agenda grid for a set of day columns.
pub fn render_agenda_grid(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    config: &ClinicConfig,
    book: &mut AppointmentBook,
    theme: &AgendaTheme,
    view: DragView,
) -> GridOutcome {
    let mut outcome = GridOutcome::default();
    let palette = GridPalette::from_theme(theme);
    let cabins: Vec<_> = cabin::active_ordered(&config.cabins)
        .into_iter()
        .cloned()
        .collect();

    let slots = timegrid::time_slots(&config.open_time, &config.close_time);
    if slots.is_empty() || cabins.is_empty() || dates.is_empty() {
        ui.label("Sin horario configurado para esta clínica");
        return outcome;
    }

    let today = Local::now().date_naive();

    let available = ui.available_width();
    let spacing_total = COLUMN_SPACING * dates.len() as f32;
    let cabin_width = ((available - TIME_LABEL_WIDTH - spacing_total)
        / (dates.len() * cabins.len()) as f32)
        .max(MIN_CABIN_WIDTH);
    let day_width = cabin_width * cabins.len() as f32;

    // Remove vertical spacing between rows so pixel offsets track slot math
    ui.spacing_mut().item_spacing.y = 0.0;

    render_header_row(ui, dates, &cabins, &palette, theme, day_width, cabin_width, today, view, &mut outcome);

    let grid_left = ui.min_rect().left();
    let body_top = ui.cursor().top();
    let mut blocks: Vec<Block> = Vec::new();

    for slot in &slots {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            // Time label column
            ui.allocate_ui_with_layout(
                Vec2::new(TIME_LABEL_WIDTH, ROW_HEIGHT),
                egui::Layout::left_to_right(egui::Align::Min),
                |ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(timegrid::slot_label(*slot))
                            .size(12.0)
                            .color(palette.time_label),
                    );
                },
            );

            for (day_idx, date) in dates.iter().enumerate() {
                ui.add_space(COLUMN_SPACING);
                for cabin in &cabins {
                    let slot_ref = SlotRef::new(*date, cabin.id, *slot);
                    let cell = render_cell(
                        ui,
                        cabin_width,
                        *date == today,
                        day_idx % 2 == 0,
                        slot.minute() == 0,
                        &palette,
                    );

                    collect_blocks(&cell, &slot_ref, book, &mut blocks);
                    handle_cell_interaction(
                        ui,
                        &cell,
                        slot_ref,
                        config,
                        book,
                        &blocks,
                        view,
                        &mut outcome,
                    );
                }
            }
        });
    }

    draw_blocks(ui, &blocks, &palette, theme);
    draw_resize_preview(ui, &blocks, view);
    draw_drop_target(ui, &palette, view);
    draw_current_time_indicator(
        ui,
        dates,
        config,
        &palette,
        grid_left,
        body_top,
        day_width,
        today,
    );

    outcome
}

struct CellHit {
    rect: Rect,
    response: egui::Response,
}

#[allow(clippy::too_many_arguments)]
fn render_header_row(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    cabins: &[crate::models::cabin::Cabin],
    palette: &GridPalette,
    theme: &AgendaTheme,
    day_width: f32,
    cabin_width: f32,
    today: NaiveDate,
    view: DragView,
    outcome: &mut GridOutcome,
) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        ui.allocate_ui_with_layout(
            Vec2::new(TIME_LABEL_WIDTH, 64.0),
            egui::Layout::left_to_right(egui::Align::Min),
            |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Hora")
                        .size(12.0)
                        .color(palette.header_sub_text),
                );
            },
        );

        for date in dates {
            ui.add_space(COLUMN_SPACING);
            ui.vertical(|ui| {
                ui.set_width(day_width);
                let is_today = *date == today;

                let title = format!(
                    "{} {}",
                    weekday_name_es(*date),
                    date.format("%d/%m/%Y")
                );
                let heading = ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .size(14.0)
                            .strong()
                            .color(if is_today {
                                palette.time_label
                            } else {
                                palette.header_text
                            }),
                    )
                    .sense(if view == DragView::Week {
                        Sense::click()
                    } else {
                        Sense::hover()
                    }),
                );
                if view == DragView::Week {
                    if heading.hovered() {
                        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                    }
                    if heading.clicked() {
                        outcome.day_header_clicked = Some(*date);
                    }
                }

                // Cabin strip: one colored code cell per active cabin
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for cabin in cabins {
                        let (rect, _) = ui
                            .allocate_exact_size(Vec2::new(cabin_width, 22.0), Sense::hover());
                        let fill = AgendaTheme::hex_to_color(&cabin.color)
                            .unwrap_or(theme.accent);
                        ui.painter().rect_filled(rect, 0.0, fill);
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            &cabin.code,
                            egui::FontId::proportional(10.0),
                            Color32::WHITE,
                        );
                    }
                });
            });
        }
    });
}

fn render_cell(
    ui: &mut egui::Ui,
    width: f32,
    is_today: bool,
    alt_column: bool,
    is_hour_start: bool,
    palette: &GridPalette,
) -> CellHit {
    let desired_size = Vec2::new(width, ROW_HEIGHT);
    let drag_sense = Sense::click_and_drag().union(Sense::hover());
    let (rect, response) = ui.allocate_exact_size(desired_size, drag_sense);

    let bg_color = if is_today {
        palette.today_bg
    } else if alt_column {
        palette.alt_column_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 0.0, bg_color);

    // Horizontal grid line
    let line_color = if is_hour_start {
        palette.hour_line
    } else {
        palette.slot_line
    };
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), rect.top()),
            Pos2::new(rect.right(), rect.top()),
        ],
        Stroke::new(1.0, line_color),
    );

    // Vertical grid line
    ui.painter().line_segment(
        [
            Pos2::new(rect.right(), rect.top()),
            Pos2::new(rect.right(), rect.bottom()),
        ],
        Stroke::new(1.0, palette.divider),
    );

    if is_today {
        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.top()),
                Pos2::new(rect.left(), rect.bottom()),
            ],
            Stroke::new(1.0, palette.today_border),
        );
    }

    if response.hovered() {
        ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    CellHit { rect, response }
}

/// Record block rects for the appointments starting in this cell.
fn collect_blocks(cell: &CellHit, slot_ref: &SlotRef, book: &AppointmentBook, blocks: &mut Vec<Block>) {
    for appointment in book.at_slot(slot_ref) {
        let height = appointment.duration_slots as f32 * ROW_HEIGHT - 4.0;
        let rect = Rect::from_min_size(
            Pos2::new(cell.rect.left() + 1.0, cell.rect.top() + 2.0),
            Vec2::new(cell.rect.width() - 2.0, height.max(ROW_HEIGHT - 4.0)),
        );
        blocks.push(Block {
            rect,
            appointment: appointment.clone(),
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_cell_interaction(
    ui: &mut egui::Ui,
    cell: &CellHit,
    slot_ref: SlotRef,
    config: &ClinicConfig,
    book: &mut AppointmentBook,
    blocks: &[Block],
    view: DragView,
    outcome: &mut GridOutcome,
) {
    let pointer_pos = cell
        .response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));

    let block_under_pointer = |pos: Pos2| blocks.iter().rev().find(|b| b.rect.contains(pos));

    // Click: edit the block under the pointer, or open the booking flow on
    // an empty cell of an active cabin
    if cell.response.clicked() {
        match pointer_pos.and_then(|pos| block_under_pointer(pos)) {
            Some(block) => outcome.appointment_clicked = Some(block.appointment.clone()),
            None => {
                // Missing or deactivated cabins silently ignore the click
                let bookable = config
                    .cabins
                    .iter()
                    .any(|c| c.id == slot_ref.cabin_id && c.is_active);
                if bookable {
                    outcome.slot_clicked = Some(slot_ref);
                }
            }
        }
    }

    // Drag start: resize when grabbing the bottom handle, move otherwise
    if cell.response.drag_started() {
        if let Some(pos) = cell.response.interact_pointer_pos() {
            if let Some(block) = block_under_pointer(pos) {
                if resize::bottom_handle_rect(block.rect).contains(pos) {
                    ResizeManager::begin(
                        ui.ctx(),
                        ResizeContext::from_appointment(&block.appointment, view),
                    );
                    ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeVertical);
                } else {
                    DragManager::begin(
                        ui.ctx(),
                        DragContext::from_appointment(
                            &block.appointment,
                            pos - block.rect.min,
                            view,
                        ),
                    );
                    ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
                }
            }
        }
    }

    // Hover tracking for active drag/resize gestures
    let pointer_for_hover = ui
        .ctx()
        .pointer_interact_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));
    if let Some(pointer) = pointer_for_hover {
        if cell.rect.contains(pointer) {
            DragManager::update_hover(ui.ctx(), slot_ref, cell.rect, pointer);
            if ResizeManager::is_active_for_view(ui.ctx(), view) {
                ResizeManager::update_hover(ui.ctx(), slot_ref.time, pointer);
            }

            if DragManager::is_active_for_view(ui.ctx(), view) {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
                ui.ctx().request_repaint();
            }
            if ResizeManager::is_active_for_view(ui.ctx(), view) {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeVertical);
                ui.ctx().request_repaint();
            }
        }
    }

    // Completed drag: run the reflow pass against the hovered destination.
    // A release outside any cell has no resolved destination and is a no-op.
    if cell.response.drag_stopped() {
        if let Some(drag_context) = DragManager::finish_for_view(ui.ctx(), view) {
            let release_pos = ui.input(|i| i.pointer.latest_pos());
            let dest = match (release_pos, drag_context.hovered_rect) {
                (Some(pos), Some(rect)) if rect.contains(pos) => drag_context.hovered_slot,
                _ => None,
            };

            if let Some(dest) = dest {
                if let Some(source) = book.position_of(&drag_context.appointment_id) {
                    if book.reflow(source, dest) == ReflowOutcome::Committed {
                        outcome.moved = true;
                    }
                } else {
                    log::debug!(
                        "Drop ignored, appointment {} vanished mid-drag",
                        drag_context.appointment_id
                    );
                }
            }
        }
    }

    // Completed resize: replace the duration with the hovered extent
    let primary_released = ui.input(|i| i.pointer.primary_released());
    if primary_released && ResizeManager::is_active_for_view(ui.ctx(), view) {
        if let Some(resize_context) = ResizeManager::finish_for_view(ui.ctx(), view) {
            if let Some(new_duration) = resize_context.hovered_duration() {
                if book.resize(&resize_context.appointment_id, new_duration) {
                    outcome.resized = true;
                }
            }
        }
    }
}

fn draw_blocks(ui: &mut egui::Ui, blocks: &[Block], palette: &GridPalette, theme: &AgendaTheme) {
    let pointer_pos = ui.input(|i| i.pointer.hover_pos());
    let dragging = DragManager::active(ui.ctx());

    for block in blocks {
        let appointment = &block.appointment;
        let fill = AgendaTheme::hex_to_color(&appointment.color).unwrap_or(theme.accent);

        // Ghost the block at its origin while it is being dragged
        let fill = if dragging
            .as_ref()
            .map(|d| d.appointment_id == appointment.id)
            .unwrap_or(false)
        {
            Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 110)
        } else {
            fill
        };

        ui.painter()
            .rect_filled(block.rect, egui::Rounding::same(2.0), fill);

        let text_pos = Pos2::new(block.rect.left() + 5.0, block.rect.top() + 4.0);
        let width = block.rect.width() - 10.0;
        let name_job = egui::text::LayoutJob::simple(
            appointment.client_name.clone(),
            egui::FontId::proportional(11.0),
            Color32::WHITE,
            width,
        );
        let name_galley = ui.fonts(|f| f.layout_job(name_job));
        let name_height = name_galley.size().y;
        ui.painter().galley(text_pos, name_galley, Color32::WHITE);

        if block.rect.height() > name_height + 14.0 {
            let service_job = egui::text::LayoutJob::simple(
                appointment.service.clone(),
                egui::FontId::proportional(9.0),
                Color32::from_rgba_unmultiplied(255, 255, 255, 230),
                width,
            );
            let service_galley = ui.fonts(|f| f.layout_job(service_job));
            ui.painter().galley(
                Pos2::new(text_pos.x, text_pos.y + name_height + 1.0),
                service_galley,
                Color32::WHITE,
            );
        }

        if appointment.completed {
            ui.painter().text(
                Pos2::new(block.rect.right() - 8.0, block.rect.bottom() - 8.0),
                egui::Align2::CENTER_CENTER,
                "✔",
                egui::FontId::proportional(10.0),
                Color32::WHITE,
            );
        }

        // Bottom resize handle on hover, outside active gestures
        if let Some(pos) = pointer_pos {
            let resizing = ResizeManager::active(ui.ctx()).is_some();
            if block.rect.contains(pos) && dragging.is_none() && !resizing {
                let on_handle = resize::bottom_handle_rect(block.rect).contains(pos);
                resize::draw_bottom_handle(ui, block.rect, on_handle, fill);
                if on_handle {
                    ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeVertical);
                }
            }
        }
    }
}

/// Silhouette of the new extent while a resize drag is in flight.
fn draw_resize_preview(ui: &mut egui::Ui, blocks: &[Block], view: DragView) {
    let Some(resize_context) = ResizeManager::active_for_view(ui.ctx(), view) else {
        return;
    };
    let Some(duration) = resize_context.hovered_duration() else {
        return;
    };
    let Some(block) = blocks
        .iter()
        .find(|b| b.appointment.id == resize_context.appointment_id)
    else {
        return;
    };

    let preview = Rect::from_min_size(
        block.rect.min,
        Vec2::new(block.rect.width(), duration as f32 * ROW_HEIGHT - 4.0),
    );
    ui.painter().rect_stroke(
        preview,
        egui::Rounding::same(2.0),
        Stroke::new(1.5, Color32::WHITE),
    );
}

fn draw_drop_target(ui: &mut egui::Ui, palette: &GridPalette, view: DragView) {
    if let Some(drag_state) = DragManager::active_for_view(ui.ctx(), view) {
        if let Some(rect) = drag_state.hovered_rect {
            let highlight = rect.shrink2(Vec2::new(2.0, 1.0));
            ui.painter()
                .rect_filled(highlight, 2.0, palette.drop_target);
            ui.painter().rect_stroke(
                highlight,
                2.0,
                Stroke::new(1.5, palette.time_label),
            );
        }
    }
}

/// Draw the current time indicator line across today's day column.
#[allow(clippy::too_many_arguments)]
fn draw_current_time_indicator(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    config: &ClinicConfig,
    palette: &GridPalette,
    grid_left: f32,
    body_top: f32,
    day_width: f32,
    today: NaiveDate,
) {
    let Some(day_index) = dates.iter().position(|d| *d == today) else {
        return;
    };

    let now = Local::now().time();
    // Grid-body offset: the header correction applies to the outer scroll
    // area, not the painter
    let Some(relative_y) =
        timegrid::current_time_position(now, &config.open_time, &config.close_time, true)
    else {
        return;
    };

    let y_position = body_top + relative_y;
    let x_start = grid_left
        + TIME_LABEL_WIDTH
        + COLUMN_SPACING
        + day_index as f32 * (day_width + COLUMN_SPACING);
    let x_end = x_start + day_width;

    let painter = ui.painter();
    painter.circle_filled(egui::pos2(x_start - 4.0, y_position), 3.0, palette.current_time);
    painter.line_segment(
        [
            egui::pos2(x_start, y_position),
            egui::pos2(x_end, y_position),
        ],
        Stroke::new(2.0, palette.current_time),
    );
}
