/// Player pose in map-cell units: position, facing direction and the camera
/// plane. The plane is kept perpendicular to the direction; its length
/// relative to the direction's length fixes the horizontal field of view
/// (half-FOV = atan(|plane| / |dir|)).
pub struct PlayerState {
    pub pos: [f32; 2],
    pub dir: [f32; 2],
    pub plane: [f32; 2],
}

impl PlayerState {
    pub fn new(pos: [f32; 2], dir: [f32; 2], plane: [f32; 2]) -> Self {
        Self { pos, dir, plane }
    }

    /// Rotate the direction and camera-plane vectors by `angle` radians
    /// (positive turns left). Both vectors get the same rotation so the FOV
    /// never changes.
    pub fn rotate(&mut self, angle: f32) {
        let c = angle.cos();
        let s = angle.sin();

        // Both output components must come from the pre-rotation vector, so
        // cache x before overwriting it.
        let old_dir_x = self.dir[0];
        self.dir[0] = self.dir[0] * c - self.dir[1] * s;
        self.dir[1] = old_dir_x * s + self.dir[1] * c;

        let old_plane_x = self.plane[0];
        self.plane[0] = self.plane[0] * c - self.plane[1] * s;
        self.plane[1] = old_plane_x * s + self.plane[1] * c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(v: [f32; 2]) -> f32 {
        (v[0] * v[0] + v[1] * v[1]).sqrt()
    }

    #[test]
    fn single_rotation_matches_closed_form() {
        let mut player = PlayerState::new([22.5, 12.5], [-1.0, 0.0], [0.0, 0.66]);
        player.rotate(0.05);

        let (c, s) = (0.05f32.cos(), 0.05f32.sin());
        assert!((player.dir[0] - -c).abs() < 1e-6);
        assert!((player.dir[1] - -s).abs() < 1e-6);
        assert!((player.plane[0] - -0.66 * s).abs() < 1e-6);
        assert!((player.plane[1] - 0.66 * c).abs() < 1e-6);
    }

    #[test]
    fn repeated_rotation_preserves_magnitudes() {
        let mut player = PlayerState::new([22.5, 12.5], [-1.0, 0.0], [0.0, 0.66]);
        for _ in 0..37 {
            player.rotate(0.05);
        }
        assert!((magnitude(player.dir) - 1.0).abs() < 1e-4);
        assert!((magnitude(player.plane) - 0.66).abs() < 1e-4);
    }

    #[test]
    fn rotation_keeps_vectors_orthogonal() {
        let mut player = PlayerState::new([22.5, 12.5], [-1.0, 0.0], [0.0, 0.66]);
        for _ in 0..11 {
            player.rotate(-0.31);
        }
        let dot = player.dir[0] * player.plane[0] + player.dir[1] * player.plane[1];
        assert!(dot.abs() < 1e-4);
    }
}
