pub const PARTICLE_CLASS: &str = "particle";

const MAX_DELAY_S: f64 = 20.0;
const MIN_DURATION_S: f64 = 15.0;
const DURATION_SPREAD_S: f64 = 10.0;

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[cfg(target_arch = "wasm32")]
pub struct JsRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_percent: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleStyle {
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self {
            left_percent: rng.next_unit() * 100.0,
            delay_s: rng.next_unit() * MAX_DELAY_S,
            duration_s: MIN_DURATION_S + rng.next_unit() * DURATION_SPREAD_S,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "left: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_percent, self.delay_s, self.duration_s
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    count: usize,
    particles: Vec<ParticleStyle>,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            particles: Vec::with_capacity(count),
        }
    }

    pub fn particles(&self) -> &[ParticleStyle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Appends `count` fresh particles without touching existing ones.
    pub fn init(&mut self, rng: &mut dyn RandomSource) -> usize {
        self.particles
            .extend((0..self.count).map(|_| ParticleStyle::random(rng)));
        self.count
    }

    /// Replaces the whole field, keeping its size at `count`.
    pub fn regenerate(&mut self, rng: &mut dyn RandomSource) -> usize {
        self.particles.clear();
        self.init(rng)
    }
}
