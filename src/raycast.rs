use crate::map::Map;
use crate::player::PlayerState;

/// Floor for reported wall distances. Degenerate poses (player standing on a
/// grid line shared with a wall) would otherwise project a zero-height or
/// infinite-height column.
const MIN_DISTANCE: f32 = 1e-4;

/// Sentinel for an axis the ray never crosses. An explicit branch assigns it
/// when a ray-direction component is exactly zero instead of relying on
/// division producing an IEEE infinity.
const NO_STEP: f32 = f32::MAX;

/// Which grid axis the DDA crossed when it found the wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

/// Per-column result of a ray march: perpendicular wall distance, the axis
/// that was hit and the wall cell itself.
#[derive(Clone, Copy, Debug)]
pub struct RayResult {
    pub distance: f32,
    pub side: Side,
    pub cell: [i32; 2],
}

/// March one ray per screen column, in column order.
pub fn cast(map: &Map, player: &PlayerState, screen_width: usize) -> Vec<RayResult> {
    (0..screen_width)
        .map(|column| cast_column(map, player, column, screen_width))
        .collect()
}

/// March a single column's ray through the map with a DDA walk. Pure in
/// (map, player, column), so columns are independent of each other.
pub fn cast_column(
    map: &Map,
    player: &PlayerState,
    column: usize,
    screen_width: usize,
) -> RayResult {
    // camera_x fans the ray across the view: -1 at the left edge, +1 at the
    // right edge.
    let camera_x = 2.0 * column as f32 / screen_width as f32 - 1.0;
    let ray_dir = [
        player.dir[0] + player.plane[0] * camera_x,
        player.dir[1] + player.plane[1] * camera_x,
    ];

    let mut cell = [player.pos[0].floor() as i32, player.pos[1].floor() as i32];
    let (delta_x, mut side_dist_x, step_x) = axis_setup(ray_dir[0], player.pos[0], cell[0]);
    let (delta_y, mut side_dist_y, step_y) = axis_setup(ray_dir[1], player.pos[1], cell[1]);

    // A direction-less ray cannot march anywhere. Only reachable if the
    // configured plane vector dominates the direction vector.
    if step_x == 0 && step_y == 0 {
        return RayResult {
            distance: MIN_DISTANCE,
            side: Side::X,
            cell,
        };
    }

    // Advance whichever axis has the nearer grid line until the entered cell
    // is a wall. The enclosed border guarantees termination.
    let mut side = Side::X;
    loop {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_x;
            cell[0] += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_y;
            cell[1] += step_y;
            side = Side::Y;
        }
        if map.is_wall(cell[0], cell[1]) {
            break;
        }
    }

    // Distance along the hit axis only, not euclidean ray length; projecting
    // onto the camera direction is what keeps straight walls straight.
    let raw = match side {
        Side::X => (cell[0] as f32 - player.pos[0] + (1 - step_x) as f32 / 2.0) / ray_dir[0],
        Side::Y => (cell[1] as f32 - player.pos[1] + (1 - step_y) as f32 / 2.0) / ray_dir[1],
    };

    RayResult {
        distance: guard_distance(raw),
        side,
        cell,
    }
}

/// Per-axis DDA setup: distance between grid lines along the ray, distance
/// from the start position to the first grid line, and the cell step. A zero
/// direction component yields the non-stepping sentinel.
fn axis_setup(ray_dir: f32, pos: f32, cell: i32) -> (f32, f32, i32) {
    if ray_dir == 0.0 {
        return (NO_STEP, NO_STEP, 0);
    }
    let delta = (1.0 / ray_dir).abs();
    if ray_dir < 0.0 {
        (delta, (pos - cell as f32) * delta, -1)
    } else {
        (delta, (cell as f32 + 1.0 - pos) * delta, 1)
    }
}

#[inline]
fn guard_distance(raw: f32) -> f32 {
    if raw.is_finite() {
        raw.max(MIN_DISTANCE)
    } else {
        MIN_DISTANCE
    }
}
