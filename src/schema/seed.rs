//! Seed types producing the generation-zero field.

use std::fs;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::{Field, Rgb};
use crate::schema::SimulationConfig;

/// Complete seed specification for field initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
    /// RNG seed for scatter positions and random cell colors. A fixed value
    /// makes the whole run reproducible; `None` draws fresh entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random,
            rng_seed: None,
        }
    }
}

/// Seeding strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Scatter `width * height / 4` random live points.
    Random,
    /// ASCII art read from a text file: digits `1`-`9` seed that vitality,
    /// any other non-space character seeds vitality 1, centered on the
    /// field when smaller than it.
    TextArt {
        /// Path to the text file.
        path: PathBuf,
    },
    /// Raster image stretched to the field dimensions; bright pixels seed
    /// saturated cells, dim ones newborns.
    Image {
        /// Path to the image file.
        path: PathBuf,
    },
}

/// Errors while reading a seed source file.
///
/// Always recovered: [`Seed::generate`] logs the error and falls back to
/// random seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

impl Seed {
    /// Produce a fully-populated generation-zero field.
    ///
    /// Never fails: file-based patterns fall back to [`Pattern::Random`]
    /// with a logged warning when their source is missing, unreadable, or
    /// not decodable.
    pub fn generate(&self, config: &SimulationConfig) -> Field {
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match &self.pattern {
            Pattern::Random => random_field(config, &mut rng),
            Pattern::TextArt { path } => match fs::read_to_string(path) {
                Ok(text) => text_art_field(&text, config, &mut rng),
                Err(err) => fall_back(path, &SeedError::Io(err), config, &mut rng),
            },
            Pattern::Image { path } => match load_image(path, config) {
                Ok(field) => field,
                Err(err) => fall_back(path, &err, config, &mut rng),
            },
        }
    }
}

fn fall_back(path: &Path, err: &SeedError, config: &SimulationConfig, rng: &mut StdRng) -> Field {
    log::warn!("{}: {}; seeding randomly instead", path.display(), err);
    random_field(config, rng)
}

/// Scatter random live seed points over a quarter of the field's area.
///
/// Coordinates are drawn with replacement; duplicates simply overwrite.
fn random_field(config: &SimulationConfig, rng: &mut StdRng) -> Field {
    let mut field = Field::new(config.width, config.height, config.blend_mode);
    for _ in 0..config.grid_size() / 4 {
        let x = rng.gen_range(0..config.width) as i64;
        let y = rng.gen_range(0..config.height) as i64;
        field.set(x, y, 1, random_color(rng));
    }
    field
}

fn random_color(rng: &mut StdRng) -> Rgb {
    [
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    ]
}

/// Stamp ASCII art into a field, centered when smaller than the grid.
///
/// Characters past the field's bounds are silently ignored.
fn text_art_field(text: &str, config: &SimulationConfig, rng: &mut StdRng) -> Field {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let max_w = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let max_h = lines.len();
    let offset_x = config.width.saturating_sub(max_w) / 2;
    let offset_y = config.height.saturating_sub(max_h) / 2;

    let mut field = Field::new(config.width, config.height, config.blend_mode);
    for (y, line) in lines.iter().enumerate() {
        if y >= config.height {
            break;
        }
        for (x, ch) in line.chars().enumerate() {
            if x >= config.width {
                break;
            }
            let vitality = match ch {
                ' ' => continue,
                '1'..='9' => ch as u8 - b'0',
                _ => 1,
            };
            field.set(
                (x + offset_x) as i64,
                (y + offset_y) as i64,
                vitality,
                random_color(rng),
            );
        }
    }
    field
}

/// Decode a raster image and stretch it over the whole field.
///
/// The image is resized to exactly the field dimensions; it is not cropped
/// or centered at native resolution.
fn load_image(path: &Path, config: &SimulationConfig) -> Result<Field, SeedError> {
    let img = image::open(path)?.into_rgb8();
    let img = image::imageops::resize(
        &img,
        config.width as u32,
        config.height as u32,
        image::imageops::FilterType::Triangle,
    );
    Ok(image_field(&img, config))
}

/// Classify each pixel by brightness: any channel above 128 seeds a
/// saturated cell (vitality 9), any channel above 16 a newborn (vitality 1),
/// anything darker stays dead. Seeded cells keep the pixel's exact color.
fn image_field(img: &image::RgbImage, config: &SimulationConfig) -> Field {
    let mut field = Field::new(config.width, config.height, config.blend_mode);
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let vitality = if r > 128 || g > 128 || b > 128 {
            9
        } else if r > 16 || g > 16 || b > 16 {
            1
        } else {
            continue;
        };
        field.set(x as i64, y as i64, vitality, [r, g, b]);
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Cell, FieldStats};
    use crate::schema::BlendMode;
    use tempfile::tempdir;

    fn test_config(width: usize, height: usize) -> SimulationConfig {
        SimulationConfig {
            width,
            height,
            blend_mode: BlendMode::Vibrant,
        }
    }

    #[test]
    fn random_scatter_covers_at_most_a_quarter() {
        let config = test_config(32, 32);
        let seed = Seed {
            pattern: Pattern::Random,
            rng_seed: Some(42),
        };
        let live = FieldStats::from_field(&seed.generate(&config)).live_cells;
        assert!(live > 0 && live <= 32 * 32 / 4, "unexpected live count {live}");
    }

    #[test]
    fn fixed_rng_seed_reproduces_the_run() {
        let config = test_config(24, 24);
        let seed = Seed {
            pattern: Pattern::Random,
            rng_seed: Some(7),
        };
        let mut a = seed.generate(&config);
        let mut b = seed.generate(&config);
        assert_eq!(a, b);

        for _ in 0..5 {
            a = a.next_round();
            b = b.next_round();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn text_art_centers_on_the_field() {
        let config = test_config(8, 8);
        let mut rng = StdRng::seed_from_u64(0);
        let field = text_art_field("1 1\n 1 \n1 1", &config, &mut rng);

        for (x, y) in [(2, 2), (4, 2), (3, 3), (2, 4), (4, 4)] {
            assert_eq!(field.get(x, y).vitality, 1, "expected live cell at ({x}, {y})");
        }
        assert_eq!(FieldStats::from_field(&field).live_cells, 5);
    }

    #[test]
    fn text_art_digits_set_explicit_vitality() {
        let config = test_config(8, 8);
        let mut rng = StdRng::seed_from_u64(0);
        // a single glyph lands at the centering offset
        let field = text_art_field("9", &config, &mut rng);
        assert_eq!(field.get(3, 3).vitality, 9);

        let field = text_art_field("x", &config, &mut rng);
        assert_eq!(field.get(3, 3).vitality, 1);
    }

    #[test]
    fn oversized_text_art_is_clipped() {
        let config = test_config(4, 4);
        let mut rng = StdRng::seed_from_u64(0);
        let field = text_art_field("111111\n\n\n\n11", &config, &mut rng);

        // row 0 keeps its first four columns; row 4 is past the field entirely
        assert_eq!(FieldStats::from_field(&field).live_cells, 4);
        for x in 0..4 {
            assert_eq!(field.get(x, 0).vitality, 1);
        }
    }

    #[test]
    fn text_art_loads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("art.txt");
        fs::write(&path, " 1 \n111").unwrap();

        let config = test_config(9, 9);
        let seed = Seed {
            pattern: Pattern::TextArt { path },
            rng_seed: Some(3),
        };
        assert_eq!(FieldStats::from_field(&seed.generate(&config)).live_cells, 4);
    }

    #[test]
    fn missing_seed_file_falls_back_to_random() {
        let config = test_config(16, 16);
        let seed = Seed {
            pattern: Pattern::TextArt {
                path: PathBuf::from("does-not-exist.txt"),
            },
            rng_seed: Some(11),
        };
        assert!(FieldStats::from_field(&seed.generate(&config)).live_cells > 0);
    }

    #[test]
    fn undecodable_image_falls_back_to_random() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-an-image.dat");
        fs::write(&path, b"junk").unwrap();

        let config = test_config(12, 12);
        let seed = Seed {
            pattern: Pattern::Image { path },
            rng_seed: Some(5),
        };
        assert!(FieldStats::from_field(&seed.generate(&config)).live_cells > 0);
    }

    #[test]
    fn image_pixels_classify_by_brightness() {
        let config = test_config(3, 1);
        let img = image::RgbImage::from_fn(3, 1, |x, _| match x {
            0 => image::Rgb([200, 0, 0]),
            1 => image::Rgb([0, 20, 0]),
            _ => image::Rgb([10, 10, 10]),
        });

        let field = image_field(&img, &config);
        assert_eq!(field.get(0, 0), Cell::new(9, [200, 0, 0]));
        assert_eq!(field.get(1, 0), Cell::new(1, [0, 20, 0]));
        assert_eq!(field.get(2, 0), Cell::DEAD);
    }
}
