//! Two-color gradient fills
//!
//! Both fills interpolate each channel as `c1 + (c2 - c1) * t` and truncate the
//! result toward zero. `t` never reaches 1, so the last row/pixel is close to,
//! but not exactly, the second color.

use image::{ImageBuffer, Rgb, RgbImage};

/// Top-to-bottom gradient, `t = y / height`
pub fn linear_vertical(width: u32, height: u32, from: Rgb<u8>, to: Rgb<u8>) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (y, row) in img.enumerate_rows_mut() {
        let color = lerp(from, to, y as f32 / height as f32);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }

    img
}

/// Top-left to bottom-right gradient, `t = (x / width + y / height) / 2`
pub fn diagonal(width: u32, height: u32, from: Rgb<u8>, to: Rgb<u8>) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let t = (x as f32 / width as f32 + y as f32 / height as f32) / 2.0;
            img.put_pixel(x, y, lerp(from, to, t));
        }
    }

    img
}

fn lerp(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: Rgb<u8> = Rgb([212, 175, 55]);
    const CRIMSON: Rgb<u8> = Rgb([196, 30, 58]);

    fn distance(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
        a.0.iter()
            .zip(b.0.iter())
            .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs())
            .sum()
    }

    fn within(value: u8, a: u8, b: u8) -> bool {
        value >= a.min(b) && value <= a.max(b)
    }

    #[test]
    fn vertical_starts_at_first_color_and_moves_toward_second() {
        let img = linear_vertical(7, 50, GOLD, CRIMSON);
        assert_eq!(img.dimensions(), (7, 50));
        assert_eq!(*img.get_pixel(0, 0), GOLD);
        assert_eq!(*img.get_pixel(6, 0), GOLD);

        let last = *img.get_pixel(3, 49);
        assert!(distance(last, CRIMSON) < distance(GOLD, CRIMSON));
        assert_ne!(last, CRIMSON);
    }

    #[test]
    fn vertical_rows_are_uniform_and_monotonic() {
        let img = linear_vertical(5, 40, Rgb([0, 255, 100]), Rgb([255, 0, 100]));
        let mut previous = *img.get_pixel(0, 0);
        for y in 0..40 {
            let first = *img.get_pixel(0, y);
            for x in 1..5 {
                assert_eq!(*img.get_pixel(x, y), first);
            }
            assert!(first[0] >= previous[0]);
            assert!(first[1] <= previous[1]);
            assert_eq!(first[2], 100);
            previous = first;
        }
    }

    #[test]
    fn vertical_truncates_fractional_channels() {
        // Row 1 of 3: 0 + 10 * (1/3) = 3.33 and 100 - 50 * (1/3) = 83.33
        let img = linear_vertical(1, 3, Rgb([0, 100, 0]), Rgb([10, 50, 0]));
        assert_eq!(*img.get_pixel(0, 1), Rgb([3, 83, 0]));
    }

    #[test]
    fn diagonal_starts_at_first_color() {
        let img = diagonal(20, 30, GOLD, CRIMSON);
        assert_eq!(*img.get_pixel(0, 0), GOLD);
    }

    #[test]
    fn diagonal_corner_approaches_second_color_as_size_grows() {
        let black = Rgb([0, 0, 0]);
        let white = Rgb([255, 255, 255]);

        let small = diagonal(4, 4, black, white);
        let large = diagonal(400, 400, black, white);
        let small_corner = *small.get_pixel(3, 3);
        let large_corner = *large.get_pixel(399, 399);

        assert!(distance(large_corner, white) < distance(small_corner, white));
        assert_ne!(large_corner, white);
    }

    #[test]
    fn diagonal_never_overshoots() {
        let img = diagonal(33, 17, GOLD, CRIMSON);
        for pixel in img.pixels() {
            for c in 0..3 {
                assert!(within(pixel[c], GOLD[c], CRIMSON[c]));
            }
        }
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            diagonal(64, 32, GOLD, CRIMSON),
            diagonal(64, 32, GOLD, CRIMSON)
        );
        assert_eq!(
            linear_vertical(64, 32, GOLD, CRIMSON),
            linear_vertical(64, 32, GOLD, CRIMSON)
        );
    }
}
