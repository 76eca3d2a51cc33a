//! Cabin registry operations.
//!
//! Pure functions over a clinic's cabin list: the ordered active view the
//! grid consumes, and the reorder/delete/upsert operations driven by the
//! settings dialog's cabin table.

use crate::models::cabin::Cabin;

/// Active cabins in display order (ascending `order`).
pub fn active_ordered(cabins: &[Cabin]) -> Vec<&Cabin> {
    let mut active: Vec<&Cabin> = cabins.iter().filter(|c| c.is_active).collect();
    active.sort_by_key(|c| c.order);
    active
}

/// All cabins in display order, inactive included (settings table view).
pub fn all_ordered(cabins: &[Cabin]) -> Vec<&Cabin> {
    let mut ordered: Vec<&Cabin> = cabins.iter().collect();
    ordered.sort_by_key(|c| c.order);
    ordered
}

/// Case-insensitive filter on name or code, as the settings search box does.
pub fn filter<'a>(cabins: &'a [Cabin], text: &str) -> Vec<&'a Cabin> {
    let needle = text.to_lowercase();
    all_ordered(cabins)
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Direction for a reorder step in the settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Swap `order` with the neighbor in the ordered listing.
///
/// Moving the first cabin up or the last one down is a no-op. Returns true
/// when a swap happened.
pub fn move_cabin(cabins: &mut [Cabin], cabin_id: u32, direction: MoveDirection) -> bool {
    let mut order: Vec<usize> = (0..cabins.len()).collect();
    order.sort_by_key(|&i| cabins[i].order);

    let Some(pos) = order.iter().position(|&i| cabins[i].id == cabin_id) else {
        return false;
    };

    let neighbor = match direction {
        MoveDirection::Up if pos > 0 => order[pos - 1],
        MoveDirection::Down if pos + 1 < order.len() => order[pos + 1],
        _ => return false,
    };
    let current = order[pos];

    let tmp = cabins[current].order;
    cabins[current].order = cabins[neighbor].order;
    cabins[neighbor].order = tmp;
    true
}

/// Delete a cabin by id. Remaining `order` values keep their gaps.
pub fn remove(cabins: &mut Vec<Cabin>, cabin_id: u32) -> bool {
    let before = cabins.len();
    cabins.retain(|c| c.id != cabin_id);
    cabins.len() != before
}

/// Update an existing cabin by id, or insert a new one when the incoming
/// id is 0 (the table's "new cabin" row): the fresh id is `max + 1` and the
/// new cabin goes to the end of the display order.
pub fn upsert(cabins: &mut Vec<Cabin>, mut cabin: Cabin) {
    if cabin.id == 0 {
        let next_id = cabins.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        cabin.id = next_id;
        cabin.order = cabins.iter().map(|c| c.order).max().unwrap_or(0) + 1;
        cabins.push(cabin);
        return;
    }

    match cabins.iter_mut().find(|c| c.id == cabin.id) {
        Some(existing) => *existing = cabin,
        None => cabins.push(cabin),
    }
}
