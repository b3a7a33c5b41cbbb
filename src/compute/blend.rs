//! Color-combination policies for newborn and surviving cells.

use super::Rgb;
use crate::schema::BlendMode;

/// Channel sum below which a combined color counts as dim and receives a
/// dominant-channel boost.
const DIM_THRESHOLD: i32 = 400;

/// Combine the elementwise color sums of `alive` live neighbors into the
/// cell's next color under the given mode.
///
/// Channels are clamped to `[0, 255]` as the final step in both modes, so
/// intermediate values may leave the byte range.
pub fn blend_color(mode: BlendMode, alive: u32, sums: [u32; 3]) -> Rgb {
    match mode {
        BlendMode::Vibrant => vibrant(alive, sums),
        BlendMode::Average => average(alive, sums),
    }
}

/// Averages when more than one neighbor contributes, otherwise keeps the raw
/// sums. Dim results gain +100 on the dominant channel and lose 50 on the
/// other two before clamping, overshooting toward a saturated hue.
fn vibrant(alive: u32, sums: [u32; 3]) -> Rgb {
    let mut color = sums.map(|c| if alive > 1 { (c / alive) as i32 } else { c as i32 });
    if color.iter().sum::<i32>() < DIM_THRESHOLD {
        let dominant = dominant_channel(color);
        for (i, channel) in color.iter_mut().enumerate() {
            *channel += if i == dominant { 100 } else { -50 };
        }
    }
    clamp(color)
}

/// Plain elementwise average over the live neighbors, all zero when none
/// are live. Dim results lift only the dominant channel, capped at 255.
fn average(alive: u32, sums: [u32; 3]) -> Rgb {
    let mut color = if alive > 0 {
        sums.map(|c| (c / alive) as i32)
    } else {
        [0; 3]
    };
    if color.iter().sum::<i32>() < DIM_THRESHOLD {
        let dominant = dominant_channel(color);
        color[dominant] = (color[dominant] + 100).min(255);
    }
    clamp(color)
}

/// Index of the largest channel. Ties resolve in R, G, B priority order.
fn dominant_channel(color: [i32; 3]) -> usize {
    let [r, g, b] = color;
    if r >= g && r >= b {
        0
    } else if g >= r && g >= b {
        1
    } else {
        2
    }
}

fn clamp(color: [i32; 3]) -> Rgb {
    color.map(|c| c.clamp(0, 255) as u8)
}
