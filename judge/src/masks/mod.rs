//! # Mask Generators
//!
//! One [`MaskGenerator`](crate::traits::mask_generator::MaskGenerator) per lexeme type.
//! The aligner picks the generator matching the common type of the two lexemes
//! being compared, so numeric rules only apply when both sides are numeric.
//!
//! The available generators are:
//! - [`string_mask`]: exact, position-wise character comparison.
//! - [`int_mask`]: sign and magnitude comparison, ignoring leading zeros and `+`.
//! - [`float_mask`]: integer rules for the whole part, precision-bounded digits for the fraction.

pub mod float_mask;
pub mod int_mask;
pub mod string_mask;

pub use float_mask::FloatMask;
pub use int_mask::IntMask;
pub use string_mask::StringMask;
