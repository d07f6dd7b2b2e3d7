use crate::core::base::*;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// PCG32 generator. Cheap to construct, so every path bounce gets its own.
#[derive(Debug, PartialEq, Clone)]
pub struct RNG {
    pub state: u64,
    pub inc: u64,
}

impl RNG {
    pub fn new() -> Self {
        RNG {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    pub fn new_sequence(initseq: u64) -> Self {
        let mut r = Self::new();
        r.set_sequence(initseq);
        return r;
    }

    pub fn set_sequence(&mut self, initseq: u64) {
        self.state = 0;
        self.inc = (initseq << 1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        self.uniform_uint32();
    }

    #[inline]
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate: u64 = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted: u32 = ((oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27)) as u32;
        let rot: u32 = (oldstate.wrapping_shr(59)) as u32;
        return (xorshifted.wrapping_shr(rot))
            | (xorshifted.wrapping_shl(((!rot).wrapping_add(1)) & 31));
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn uniform_float(&mut self) -> Float {
        let f: f32 = self.uniform_uint32() as f32 * 2.3283064365386963e-10;
        return FLOAT_ONE_MINUS_EPSILON.min(f);
    }
}

impl Default for RNG {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds a list of words into a 64-bit sequence id (splitmix64 finalizer per word).
pub fn mix_seed(words: &[u64]) -> u64 {
    let mut h: u64 = 0x9e3779b97f4a7c15;
    for w in words {
        let mut z = h ^ w.wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        h = z ^ (z >> 31);
    }
    return h;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut rng = RNG::new();
        let a: f32 = rng.uniform_float();
        let astate = rng.state;
        let b: f32 = rng.uniform_float();
        let bstate = rng.state;
        assert_ne!(a, b);
        assert_ne!(astate, bstate);
    }

    #[test]
    fn test_002() {
        let mut a = RNG::new_sequence(42);
        let mut b = RNG::new_sequence(42);
        for _ in 0..16 {
            assert_eq!(a.uniform_uint32(), b.uniform_uint32());
        }
    }

    #[test]
    fn test_003() {
        assert_eq!(mix_seed(&[1, 2, 3]), mix_seed(&[1, 2, 3]));
        assert_ne!(mix_seed(&[1, 2, 3]), mix_seed(&[1, 2, 4]));
        assert_ne!(mix_seed(&[1, 2]), mix_seed(&[2, 1]));
    }

    #[test]
    fn test_004() {
        let mut rng = RNG::new_sequence(7);
        for _ in 0..1000 {
            let u = rng.uniform_float();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
