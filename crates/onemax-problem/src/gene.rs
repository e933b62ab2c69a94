//! Boolean interpretation of genome elements.
//!
//! A genome is any slice whose elements implement [`Gene`]. Each element is read as either
//! *set* (counts toward the onemax score) or *unset*:
//!
//! | element type             | set when              |
//! |--------------------------|-----------------------|
//! | `bool`                   | `true`                |
//! | integer primitives       | nonzero               |
//! | `f32` / `f64`            | nonzero (NaN is set)  |
//! | `str` / `String`         | non-empty             |
//! | `Option<G>`              | `Some(g)` and `g` set |
//!
//! Element types without a boolean reading are rejected at compile time.
//!
//! ```
//! use onemax_problem::gene::Gene;
//!
//! assert!(true.is_set());
//! assert!(!0_u8.is_set());
//! assert!((-3_i32).is_set());
//! assert!(f64::NAN.is_set());
//! assert!(!"".is_set());
//! assert!(!None::<bool>.is_set());
//! ```

/// A genome element that reads as either set or unset.
pub trait Gene {
    /// Returns `true` if this element counts toward the onemax score.
    fn is_set(&self) -> bool;
}

impl Gene for bool {
    #[inline]
    fn is_set(&self) -> bool {
        *self
    }
}

macro_rules! impl_gene_for_nonzero {
    ($zero:literal => $($ty:ty),* $(,)?) => {
        $(
            impl Gene for $ty {
                #[inline]
                fn is_set(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_gene_for_nonzero!(0 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_gene_for_nonzero!(0.0 => f32, f64);

impl Gene for str {
    #[inline]
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Gene for String {
    #[inline]
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<G> Gene for Option<G>
where
    G: Gene,
{
    #[inline]
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(Gene::is_set)
    }
}

impl<G> Gene for &G
where
    G: Gene + ?Sized,
{
    #[inline]
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_set_when_nonzero() {
        assert!(!0_i64.is_set());
        assert!(1_i64.is_set());
        assert!((-1_i64).is_set());
        assert!(u128::MAX.is_set());
    }

    #[test]
    fn test_floats_are_set_when_nonzero() {
        assert!(!0.0_f64.is_set());
        assert!(!(-0.0_f32).is_set());
        assert!(0.5_f32.is_set());
        assert!(f64::INFINITY.is_set());
        assert!(f32::NAN.is_set());
    }

    #[test]
    fn test_strings_are_set_when_non_empty() {
        assert!("0".is_set());
        assert!(!String::new().is_set());
        assert!(String::from("x").is_set());
    }

    #[test]
    fn test_option_requires_set_payload() {
        assert!(Some(true).is_set());
        assert!(!Some(false).is_set());
        assert!(!None::<u8>.is_set());
    }

    #[test]
    fn test_references_forward_to_referent() {
        let value = 7_u16;
        let by_ref: &u16 = &value;
        assert!(by_ref.is_set());
        assert!(!(&&false).is_set());
    }
}
