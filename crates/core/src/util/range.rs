use anyhow::anyhow;
use derive_more::Display;
use rand::{
    distributions::uniform::{SampleRange, SampleUniform, UniformSampler},
    RngCore,
};
use serde::Serialize;
use std::{fmt::Display, ops};

/// A type of value that we can create ranges of, where a range has a min and
/// max.
pub trait Rangeable:
    Copy + Display + PartialOrd + ops::Sub<Self, Output = Self>
{
}

impl<T> Rangeable for T where
    T: Copy + Display + PartialOrd + ops::Sub<Self, Output = Self>
{
}

/// A range between two numeric values, inclusive on both ends.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Build the smallest range that holds every value in the iterator.
    /// Returns `None` if the iterator is empty.
    pub fn covering(mut values: impl Iterator<Item = T>) -> Option<Self> {
        let first = values.next()?;
        Some(values.fold(Self::new(first, first), |range, value| {
            Self::new(
                if value < range.min { value } else { range.min },
                if value > range.max { value } else { range.max },
            )
        }))
    }

    /// Max minus min
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks if the value is in this range. If it isn't, return an error.
    /// `name` is used to identify the value in the error message.
    pub fn ensure_contains(&self, name: &str, value: T) -> anyhow::Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(anyhow!("{} must be in {}, but was {}", name, self, value))
        }
    }
}

// allow generating samples in the range
impl<T: Rangeable + SampleUniform> SampleRange<T> for NumRange<T> {
    #[inline]
    fn sample_single<R: RngCore + ?Sized>(self, rng: &mut R) -> T {
        T::Sampler::sample_single_inclusive(self.min, self.max, rng)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.min > self.max
    }
}
