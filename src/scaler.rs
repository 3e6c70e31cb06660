use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Precomputed nearest source index per destination row and column, rebuilt
/// whenever the window size changes.
pub struct StretchLut {
    src_x: Vec<usize>,
    src_y: Vec<usize>,
}

impl StretchLut {
    pub fn empty() -> Self {
        Self {
            src_x: Vec::new(),
            src_y: Vec::new(),
        }
    }

    pub fn build(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> Self {
        let src_x = (0..dst_w)
            .map(|x| (x * src_w / dst_w).min(src_w - 1))
            .collect();
        let src_y = (0..dst_h)
            .map(|y| (y * src_h / dst_h).min(src_h - 1))
            .collect();
        Self { src_x, src_y }
    }
}

/// Nearest-neighbor stretch of the render target into the window buffer.
/// Destination rows are independent, so they are filled in parallel.
pub fn blit_stretch(dst: &mut [u32], dst_w: usize, src: &[u32], src_w: usize, lut: &StretchLut) {
    dst.par_chunks_mut(dst_w).enumerate().for_each(|(y, dst_row)| {
        let row = lut.src_y[y] * src_w;
        for (x, pixel) in dst_row.iter_mut().enumerate() {
            *pixel = src[row + lut.src_x[x]];
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_size_copies_the_source() {
        let src: Vec<u32> = (0..12).collect();
        let mut dst = vec![0u32; 12];
        let lut = StretchLut::build(4, 3, 4, 3);
        blit_stretch(&mut dst, 4, &src, 4, &lut);
        assert_eq!(dst, src);
    }

    #[test]
    fn doubling_repeats_each_source_pixel() {
        let src = vec![1u32, 2, 3, 4]; // 2x2
        let mut dst = vec![0u32; 16]; // 4x4
        let lut = StretchLut::build(4, 4, 2, 2);
        blit_stretch(&mut dst, 4, &src, 2, &lut);
        assert_eq!(
            dst,
            vec![1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }
}
