use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Rating value {0} is out of range")]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub const fn is_valid_raw(val: i64) -> bool {
        val >= Self::min().0 as i64 && val <= Self::max().0 as i64
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if !Self::is_valid_raw(from) {
            return Err(RatingValueOutOfRange(from));
        }
        // The range check above guarantees a lossless conversion
        Ok(Self(from as i8))
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i64 {
    fn from(from: RatingValue) -> Self {
        i64::from(from.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

/// Accumulates rating values into an average that keeps
/// only two digits after the decimal point.
///
/// The digits are cut off and not rounded: the scaled sum
/// is divided by the count using integer division.
#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        self.acc += i64::from(val);
        self.cnt += 1;
    }

    pub const fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            let truncated = self.acc * 100 / self.cnt as i64;
            AvgRatingValue::from(truncated as f64 / 100.0)
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl FromIterator<RatingValue> for AvgRatingValueBuilder {
    fn from_iter<I: IntoIterator<Item = RatingValue>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, val| {
            acc += val;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avg(values: &[i64]) -> f64 {
        values
            .iter()
            .map(|v| RatingValue::try_from(*v).unwrap())
            .collect::<AvgRatingValueBuilder>()
            .build()
            .into()
    }

    #[test]
    fn rating_value_range() {
        assert!(RatingValue::try_from(0).is_err());
        assert!(RatingValue::try_from(-1).is_err());
        assert!(RatingValue::try_from(6).is_err());
        assert!(RatingValue::try_from(i64::MAX).is_err());
        assert!(RatingValue::try_from(i64::MIN).is_err());
        for v in 1..=5 {
            assert_eq!(i64::from(RatingValue::try_from(v).unwrap()), v);
        }
    }

    #[test]
    fn out_of_range_error_keeps_value() {
        assert_eq!(RatingValue::try_from(6), Err(RatingValueOutOfRange(6)));
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(avg(&[]), 0.0);
    }

    #[test]
    fn average_without_remainder() {
        assert_eq!(avg(&[5, 3, 4]), 4.0);
        assert_eq!(avg(&[1]), 1.0);
    }

    #[test]
    fn average_is_truncated_not_rounded() {
        assert_eq!(avg(&[5, 5, 4]), 4.66);
        assert_eq!(avg(&[1, 1, 2]), 1.33);
        assert_eq!(avg(&[2, 2, 1]), 1.66);
    }

    #[test]
    fn builder_counts_values() {
        let mut builder = AvgRatingValueBuilder::default();
        builder += RatingValue::max();
        builder += RatingValue::min();
        assert_eq!(builder.count(), 2);
        assert_eq!(f64::from(builder.build()), 3.0);
    }
}
