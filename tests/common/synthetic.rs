#![allow(dead_code)]

use cascade_detector::cascade::{Cascade, HaarFeature, HaarRect, Stage, WeakClassifier};
use cascade_detector::integral::IntegralTables;

/// 1-pixel checkerboard alternating `lo` / `hi`.
pub fn checkerboard(width: usize, height: usize, lo: f32, hi: f32) -> Vec<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = if (x + y) % 2 == 0 { lo } else { hi };
        }
    }
    img
}

/// Constant image.
pub fn flat(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Black image with 0/100 checkerboard squares `(x0, y0, size)` painted on it.
pub fn patches(width: usize, height: usize, squares: &[(usize, usize, usize)]) -> Vec<f32> {
    let mut img = flat(width, height, 0.0);
    for &(sx, sy, size) in squares {
        for y in sy..(sy + size).min(height) {
            for x in sx..(sx + size).min(width) {
                img[y * width + x] = if (x + y) % 2 == 0 { 0.0 } else { 100.0 };
            }
        }
    }
    img
}

/// Padded `(sum, sumSq, tilted)` tables for a `width × height` image.
///
/// Cell `(x, y)` of `sum` holds the total of pixels with `px < x` and
/// `py < y`; pixel `(px, py)` sits at padded cell `(px + 1, py + 1)`.
/// `tilted` follows the rotated recurrence
/// `R(x,y) = R(x−1,y−1) + R(x+1,y−1) − R(x,y−2) + I(x,y) + I(x,y−1)`.
pub fn integral_tables(width: usize, height: usize, pixels: &[f32]) -> IntegralTables {
    assert_eq!(pixels.len(), width * height);
    let stride = width + 2;
    let rows = height + 2;
    let px = |x: usize, y: usize| -> f64 {
        if x >= 1 && y >= 1 && x <= width && y <= height {
            f64::from(pixels[(y - 1) * width + (x - 1)])
        } else {
            0.0
        }
    };

    let mut sum = vec![0.0f64; stride * rows];
    let mut sq = vec![0.0f64; stride * rows];
    for y in 1..rows {
        for x in 1..stride {
            let p = px(x, y);
            let i = x + y * stride;
            sum[i] = p + sum[i - 1] + sum[i - stride] - sum[i - stride - 1];
            sq[i] = p * p + sq[i - 1] + sq[i - stride] - sq[i - stride - 1];
        }
    }

    let mut tilted = vec![0.0f64; stride * rows];
    let at = |t: &[f64], x: isize, y: isize| -> f64 {
        if x < 0 || y < 0 || x as usize >= stride || y as usize >= rows {
            0.0
        } else {
            t[x as usize + y as usize * stride]
        }
    };
    for y in 1..rows {
        for x in 0..stride {
            let (xi, yi) = (x as isize, y as isize);
            let v = at(&tilted, xi - 1, yi - 1) + at(&tilted, xi + 1, yi - 1)
                - at(&tilted, xi, yi - 2)
                + px(x, y)
                + px(x, y - 1);
            tilted[x + y * stride] = v;
        }
    }

    let to_f32 = |v: Vec<f64>| v.into_iter().map(|x| x as f32).collect::<Vec<f32>>();
    IntegralTables::new(width, height, to_f32(sum), to_f32(sq), to_f32(tilted))
        .expect("synthetic tables have padded size")
}

/// Stump over one upright rectangle covering the whole base window.
pub fn whole_window_stump(threshold: f64) -> WeakClassifier {
    WeakClassifier::stump(
        threshold,
        -1.0,
        1.0,
        HaarFeature::upright(vec![HaarRect::new(-1.0, -1.0, 1.0, 1.0, 1.0)]),
    )
}

/// One stage with one whole-window stump that every textured window clears.
pub fn always_pass_cascade() -> Cascade {
    Cascade::new(vec![Stage::new(0.5, vec![whole_window_stump(-10.0)])])
}

/// First stage rejects every window; later stages are never reached.
pub fn reject_first_cascade(first_stage_size: usize, later_stages: usize) -> Cascade {
    let mut stages = vec![Stage::new(
        1.0e6,
        vec![whole_window_stump(0.0); first_stage_size],
    )];
    for _ in 0..later_stages {
        stages.push(Stage::new(0.0, vec![whole_window_stump(0.0); 8]));
    }
    Cascade::new(stages)
}
