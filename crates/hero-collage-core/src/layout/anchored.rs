use super::{Distribution, Spacer};

/// First image at offset 0, last image flush with the far edge, middle images
/// evenly spaced with a floor of `min_spacing`.
#[derive(Debug, Clone, Copy)]
pub struct AnchoredEnds {
    min_spacing: u32,
}

impl AnchoredEnds {
    pub fn new(min_spacing: u32) -> Self {
        Self { min_spacing }
    }
}

impl Spacer for AnchoredEnds {
    fn min_gap(&self) -> u32 {
        self.min_spacing
    }

    fn distribute(&self, long: u32, extents: &[u32]) -> Distribution {
        match extents {
            [] => Distribution {
                offsets: Vec::new(),
                spacing: 0,
            },
            [_] => Distribution {
                offsets: vec![0],
                spacing: 0,
            },
            [first, last] => Distribution {
                offsets: vec![0, long.saturating_sub(*last)],
                spacing: long.saturating_sub(*first + *last),
            },
            [first, middle @ .., last] => {
                let middle_sum: u32 = middle.iter().sum();
                let free = long.saturating_sub(*first + *last + middle_sum);
                let gaps = middle.len() as u32 + 1;
                let spacing = (free / gaps).max(self.min_spacing);

                let mut offsets = Vec::with_capacity(extents.len());
                offsets.push(0);
                let mut cursor = *first + spacing;
                for ext in middle {
                    offsets.push(cursor);
                    cursor += *ext + spacing;
                }
                offsets.push(long.saturating_sub(*last));
                Distribution { offsets, spacing }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_images_anchor_to_both_ends() {
        let d = AnchoredEnds::new(2).distribute(800, &[300, 200]);
        assert_eq!(d.offsets, vec![0, 600]);
        assert_eq!(d.spacing, 300);
    }

    #[test]
    fn middle_images_share_free_space() {
        // free = 100 - 10 - 10 - 20 = 60 over 3 gaps
        let d = AnchoredEnds::new(2).distribute(100, &[10, 10, 10, 10]);
        assert_eq!(d.spacing, 20);
        assert_eq!(d.offsets, vec![0, 30, 60, 90]);
    }

    #[test]
    fn spacing_never_drops_below_floor() {
        // free = 2 over 2 gaps -> 1, floored to 2
        let d = AnchoredEnds::new(2).distribute(23, &[7, 7, 7]);
        assert_eq!(d.spacing, 2);
    }
}
