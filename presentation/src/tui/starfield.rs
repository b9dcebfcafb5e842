//! Twinkling star field behind the hero block
//!
//! Positions are fixed per seed (fractions of the hero area, so they scale
//! with the terminal) and each star cycles through brightness levels on its
//! own period and phase.

/// How bright a star is on a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twinkle {
    Dim,
    Normal,
    Bright,
}

impl Twinkle {
    pub fn glyph(&self) -> char {
        match self {
            Twinkle::Dim => '·',
            Twinkle::Normal => '+',
            Twinkle::Bright => '✦',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    /// Horizontal position in thousandths of the width
    x: u16,
    /// Vertical position in thousandths of the height
    y: u16,
    /// Ticks per full twinkle cycle
    period: u16,
    phase: u16,
}

impl Star {
    /// Cell inside a `width` × `height` area
    pub fn position(&self, width: u16, height: u16) -> (u16, u16) {
        let x = (self.x as u32 * width as u32 / 1000) as u16;
        let y = (self.y as u32 * height as u32 / 1000) as u16;
        (x.min(width.saturating_sub(1)), y.min(height.saturating_sub(1)))
    }

    pub fn twinkle(&self, tick: u64) -> Twinkle {
        let step = ((tick + self.phase as u64) % self.period as u64) as u16;
        let third = self.period / 3;
        if step < third {
            Twinkle::Dim
        } else if step < 2 * third {
            Twinkle::Normal
        } else {
            Twinkle::Bright
        }
    }
}

/// A fixed set of stars
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut state = seed;
        let stars = (0..count)
            .map(|_| Star {
                x: (splitmix64(&mut state) % 1000) as u16,
                y: (splitmix64(&mut state) % 1000) as u16,
                period: 6 + (splitmix64(&mut state) % 12) as u16,
                phase: (splitmix64(&mut state) % 18) as u16,
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
