#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The rewrite applied by a single call to the reducer.
///
/// In the formulas below, `c(...)` is a group scaled by the coefficient `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Step {
    /// `c(a + b) = (ca + cb)`
    /// `c(a / b) = (ca / b)`
    DistributeCoefficient,

    /// `a + (b + c) = a + b + c`
    /// `a * c(b * d) = a * cb * d`
    FlattenGroup,

    /// `a * cb = c(a * b)`
    HoistCoefficient,

    /// `c(a) = ca`
    CollapseGroup,

    /// `a/c + b/c = (a + b)/c`
    CombineFractions,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `a+0 = a`
    AddZero,

    /// `0(a * b) = 0`
    MultiplyZero,

    /// `ca * db = cd(a * b)`
    MultiplyCoefficients,

    /// `a * 1 = a`
    MultiplyNumber,

    /// `a * b/c = ab/c`
    /// `a/b * c/d = ac/bd`
    MultiplyFraction,

    /// `(a+b)*c = a*c + b*c`
    DistributiveProperty,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^(2+3)`
    CombineLikeFactors,

    /// `a^(b^c) = a^(b*c)`
    FoldExponent,

    /// `(a^b)^c = a^(b*c)`
    PowerPower,

    /// `a^0 = 1`
    PowerZero,

    /// `a^-n = 1/a^n`
    NegativeExponent,

    /// `a^3 = a*a*a`
    ExpandPower,

    /// `8^(1/3) = 2^1`
    IntegerRoot,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    ZeroNumerator,

    /// `(a/b)/c = a/b * 1/c`
    /// `a/(b/c) = a/1 * c/b`
    MultiplyReciprocal,

    /// `a/a = 1`
    DivideSelf,

    /// `ab/ac = b/c`
    CancelFactor,

    /// `6x/4y = 3x/2y`
    CancelCommonFactor,
}
