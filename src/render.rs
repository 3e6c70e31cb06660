use crate::raycast::{RayResult, Side};

/// One vertical wall strip, addressed by screen column. The hit side selects
/// between the two wall colors at raster time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    pub column: usize,
    pub y_start: usize,
    pub y_end: usize,
    pub side: Side,
}

#[inline]
const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    // BGRX in little-endian memory, alpha byte left at 0
    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
}

pub const BACKGROUND_COLOR: u32 = pack_rgb(0, 0, 0);
const X_WALL_COLOR: u32 = pack_rgb(255, 0, 0);
const Y_WALL_COLOR: u32 = pack_rgb(0, 0, 255);

#[inline]
pub fn wall_color(side: Side) -> u32 {
    match side {
        Side::X => X_WALL_COLOR,
        Side::Y => Y_WALL_COLOR,
    }
}

/// Project each column's wall distance to a clamped vertical strip centered
/// on the horizon. Closer walls get taller strips.
pub fn project(results: &[RayResult], screen_height: usize) -> Vec<DrawCommand> {
    let h = screen_height as i32;
    results
        .iter()
        .enumerate()
        .map(|(column, result)| {
            let line_height = (screen_height as f32 / result.distance).round() as i32;
            let y_start = (h / 2 - line_height / 2).clamp(0, h - 1);
            let y_end = (h / 2 + line_height / 2).clamp(0, h - 1);
            DrawCommand {
                column,
                y_start: y_start as usize,
                y_end: y_end as usize,
                side: result.side,
            }
        })
        .collect()
}

/// Write a frame's draw commands into the framebuffer: clear to the
/// background, then one vertical strip per command.
pub fn rasterize(frame: &mut [u32], width: usize, height: usize, commands: &[DrawCommand]) {
    frame.fill(BACKGROUND_COLOR);

    for command in commands {
        debug_assert!(command.column < width);
        debug_assert!(command.y_start <= command.y_end && command.y_end < height);

        let color = wall_color(command.side);
        let mut idx = command.y_start * width + command.column;
        for _y in command.y_start..=command.y_end {
            frame[idx] = color;
            idx += width;
        }
    }
}
