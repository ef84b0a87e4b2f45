use crate::model::Rect;
use image::{Rgb, RgbImage};

/// Blit `src` into `canvas` with its top-left at (dx, dy).
///
/// Pixels falling outside the canvas are dropped, so an oversized hero is
/// clipped rather than wrapped.
pub fn paste_rgb(src: &RgbImage, canvas: &mut RgbImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    if dx >= cw || dy >= ch {
        return;
    }
    let rw = sw.min(cw - dx);
    let rh = sh.min(ch - dy);
    for yy in 0..rh {
        for xx in 0..rw {
            let px = *src.get_pixel(xx, yy);
            canvas.put_pixel(dx + xx, dy + yy, px);
        }
    }
}

/// Draw a 1px outline around `r` (debug), clipped to the canvas.
pub fn outline_rgb(canvas: &mut RgbImage, r: &Rect, color: Rgb<u8>) {
    let (cw, ch) = canvas.dimensions();
    if r.w == 0 || r.h == 0 {
        return;
    }
    let right = r.x as u64 + r.w as u64 - 1;
    let bottom = r.y as u64 + r.h as u64 - 1;
    for xx in 0..r.w {
        let x = r.x as u64 + xx as u64;
        if x >= cw as u64 {
            break;
        }
        if (r.y as u64) < ch as u64 {
            canvas.put_pixel(x as u32, r.y, color);
        }
        if bottom < ch as u64 {
            canvas.put_pixel(x as u32, bottom as u32, color);
        }
    }
    for yy in 0..r.h {
        let y = r.y as u64 + yy as u64;
        if y >= ch as u64 {
            break;
        }
        if (r.x as u64) < cw as u64 {
            canvas.put_pixel(r.x, y as u32, color);
        }
        if right < cw as u64 {
            canvas.put_pixel(right as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_clips_to_canvas() {
        let src = RgbImage::from_pixel(8, 8, Rgb([9, 9, 9]));
        let mut canvas = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        paste_rgb(&src, &mut canvas, 6, 6);
        assert_eq!(*canvas.get_pixel(9, 9), Rgb([9, 9, 9]));
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn paste_outside_is_noop() {
        let src = RgbImage::from_pixel(2, 2, Rgb([9, 9, 9]));
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([1, 1, 1]));
        paste_rgb(&src, &mut canvas, 4, 0);
        assert!(canvas.pixels().all(|p| *p == Rgb([1, 1, 1])));
    }
}
