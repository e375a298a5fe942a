use std::hash::{BuildHasher, Hash, Hasher};

/// A float that compares with IEEE semantics, so `IeeeFloat(NAN) != IeeeFloat(NAN)`. The [`Eq`]
/// impl is a lie on purpose, it lets NaN into a set.
#[derive(Debug, Clone, Copy)]
pub struct IeeeFloat(pub f64);

impl PartialEq for IeeeFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for IeeeFloat {}

impl Hash for IeeeFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so they need the same hash.
        if self.0 == 0.0 {
            0_u64.hash(state)
        } else {
            self.0.to_bits().hash(state)
        }
    }
}

/// A Hasher which ignores its input, so every item collides.
#[derive(Debug)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Builds [`ConstantHasher`]s.
#[derive(Debug, Default, Clone)]
pub struct ConstantHasherBuilder;

impl BuildHasher for ConstantHasherBuilder {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ConstantHasher
    }
}
