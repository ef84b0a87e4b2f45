use super::{Distribution, Spacer};

/// Back-to-back from offset 0 with `remaining / (n - 1)` between images,
/// capped at `max_spacing`.
#[derive(Debug, Clone, Copy)]
pub struct UniformRemainder {
    max_spacing: u32,
}

impl UniformRemainder {
    pub fn new(max_spacing: u32) -> Self {
        Self { max_spacing }
    }
}

impl Spacer for UniformRemainder {
    fn min_gap(&self) -> u32 {
        0
    }

    fn distribute(&self, long: u32, extents: &[u32]) -> Distribution {
        let total: u32 = extents.iter().sum();
        let remaining = long.saturating_sub(total);
        let spacing = if extents.len() > 1 {
            (remaining / (extents.len() as u32 - 1)).min(self.max_spacing)
        } else {
            0
        };
        let mut offsets = Vec::with_capacity(extents.len());
        let mut cursor = 0u32;
        for ext in extents {
            offsets.push(cursor);
            cursor += *ext + spacing;
        }
        Distribution { offsets, spacing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_is_capped() {
        let d = UniformRemainder::new(10).distribute(1000, &[100, 100, 100]);
        assert_eq!(d.spacing, 10);
        assert_eq!(d.offsets, vec![0, 110, 220]);
    }

    #[test]
    fn tight_band_uses_remainder() {
        // remaining = 13 over 2 gaps -> 6
        let d = UniformRemainder::new(10).distribute(313, &[100, 100, 100]);
        assert_eq!(d.spacing, 6);
        assert_eq!(d.offsets, vec![0, 106, 212]);
    }

    #[test]
    fn single_image_has_no_spacing() {
        let d = UniformRemainder::new(10).distribute(500, &[120]);
        assert_eq!(d.spacing, 0);
        assert_eq!(d.offsets, vec![0]);
    }
}
