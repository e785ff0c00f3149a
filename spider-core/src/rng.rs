/// Source of uniform random numbers for point placement and wandering.
///
/// Hosts plug in whatever generator they have: `rand`'s thread RNG under
/// std, `Math.random` in the browser, or [`SimpleRng`] where a repeatable
/// sequence is wanted.
pub trait RandomSource {
    /// Uniform float in `[0.0, 1.0)`
    fn next_f32(&mut self) -> f32;

    /// Uniform float in `[min, max)`
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let value = min + self.next_f32() * (max - min);
        // Rounding can land exactly on `max` for wide ranges
        if value < max {
            value
        } else {
            min
        }
    }
}

/// Simple pseudo-random number generator using LCG (Linear Congruential Generator).
/// Not cryptographic; good enough for scattering dots and jittering spiders.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        // LCG parameters from Numerical Recipes
        const A: u32 = 1664525;
        const C: u32 = 1013904223;

        self.state = self.state.wrapping_mul(A).wrapping_add(C);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, keeping the result below 1.0
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(feature = "std")]
impl RandomSource for rand::rngs::ThreadRng {
    fn next_f32(&mut self) -> f32 {
        use rand::Rng;
        self.gen::<f32>()
    }
}
