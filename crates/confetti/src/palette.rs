//! Confetti colour palettes

use rand::Rng;

use crate::error::{ExplosionError, Result};

/// Colours used when none are configured
pub const DEFAULT_COLORS: [&str; 11] = [
    "#e67e22", "#2ecc71", "#3498db", "#84AAC2", "#E6D68D", "#F67933", "#42A858", "#4F50A2",
    "#A86BB7", "#e74c3c", "#1abc9c",
];

pub(crate) fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

/// A non-empty list of colour strings handed to the canvas verbatim
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ExplosionError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Uniformly random colour
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.colors[rng.gen_range(0..self.colors.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(ExplosionError::EmptyPalette)
        ));
    }

    #[test]
    fn test_pick_reaches_every_colour() {
        let palette = Palette::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = vec![0usize; palette.colors().len()];

        for _ in 0..5_000 {
            let color = palette.pick(&mut rng);
            let idx = palette.colors().iter().position(|c| c == color).unwrap();
            seen[idx] += 1;
        }

        // Edge colours are as likely as middle ones
        assert!(seen.iter().all(|&n| n > 300), "{seen:?}");
    }

    #[test]
    fn test_single_colour() {
        let palette = Palette::new(vec!["gold".into()]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(palette.pick(&mut rng), "gold");
    }
}
