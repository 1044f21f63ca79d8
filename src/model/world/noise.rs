// Seeded value noise with smoothstep interpolation and octave blending.

const OCTAVES: u32 = 3;
const PERSISTENCE: f32 = 0.5;
const LACUNARITY: f32 = 2.0;

/// Stateless 2D noise field. Same seed and coordinates always give the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseField {
    seed: i64,
}

impl NoiseField {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// 2D FBM over `OCTAVES` layers. Negative sums clamp to 0, so the result is in [0, 1].
    pub fn noise(&self, x: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..OCTAVES {
            total += self.smooth_noise(x * frequency, z * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= PERSISTENCE;
            frequency *= LACUNARITY;
        }

        // total / max_amplitude lies in [-1, 1]
        (total / max_amplitude).clamp(0.0, 1.0)
    }

    /// Alias of [`NoiseField::noise`]
    pub fn value(&self, x: f32, z: f32) -> f32 {
        self.noise(x, z)
    }

    /// Bilinear blend of the four surrounding lattice values with a smoothstep fade
    pub fn smooth_noise(&self, x: f32, z: f32) -> f32 {
        let ix = x.floor() as i32;
        let iz = z.floor() as i32;
        let fx = x - ix as f32;
        let fz = z - iz as f32;

        let a = self.raw_noise(ix, iz);
        let b = self.raw_noise(ix.wrapping_add(1), iz);
        let c = self.raw_noise(ix, iz.wrapping_add(1));
        let d = self.raw_noise(ix.wrapping_add(1), iz.wrapping_add(1));

        let u = smoothstep(fx);
        let v = smoothstep(fz);

        let x1 = lerp(a, b, u);
        let x2 = lerp(c, d, u);
        lerp(x1, x2, v)
    }

    /// Integer lattice hash mapped to [-1, 1]
    pub fn raw_noise(&self, ix: i32, iz: i32) -> f32 {
        // the seed contributes its low 32 bits, matching a truncating int cast
        let seed_term = self.seed.wrapping_mul(131) as i32;
        let mut n = ix.wrapping_add(iz.wrapping_mul(57)).wrapping_add(seed_term);
        n = n.wrapping_shl(13) ^ n;
        let nn = n
            .wrapping_mul(
                n.wrapping_mul(n)
                    .wrapping_mul(60493)
                    .wrapping_add(19990303),
            )
            .wrapping_add(1376312589)
            & 0x7fff_ffff;
        1.0 - (nn as f32 / 1_073_741_824.0)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
