use crate::map::Map;
use crate::player::PlayerState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

/// Translate the player along its facing direction, checking each axis
/// against the map independently. A blocked axis is a silent no-op while the
/// other axis may still move, which lets the player slide along walls when
/// pushing into a corner diagonally.
pub fn translate(map: &Map, player: &mut PlayerState, direction: MoveDirection, speed: f32) {
    let signed = match direction {
        MoveDirection::Forward => speed,
        MoveDirection::Backward => -speed,
    };
    let dx = player.dir[0] * signed;
    let dy = player.dir[1] * signed;

    let y_cell = player.pos[1].floor() as i32;
    if !map.is_wall((player.pos[0] + dx).floor() as i32, y_cell) {
        player.pos[0] += dx;
    }
    // The y check sees the committed x, matching the order the axes are
    // applied in.
    let x_cell = player.pos[0].floor() as i32;
    if !map.is_wall(x_cell, (player.pos[1] + dy).floor() as i32) {
        player.pos[1] += dy;
    }
}
