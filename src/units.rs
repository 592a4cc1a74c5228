//! Physical constants for the surface kernel.
//!
//! Base units are SI:
//! - Length: metre (the surface is a 1 m x 1 m square)
//! - Charge: coulomb
//! - Force: newton
//!
//! Everything is single precision to match the rest of the kernel.

/// Coulomb's constant in N⋅m²/C².
pub const COULOMB_CONSTANT_SI: f64 = 8.987_551_792_3e9;
/// Elementary charge in coulombs.
pub const ELEMENTARY_CHARGE_SI: f64 = 1.602_176_634e-19;

/// Coulomb's constant `K` as used by the kernel.
pub const K: f32 = COULOMB_CONSTANT_SI as f32;
/// Magnitude of the electron charge `Q`.
pub const Q: f32 = ELEMENTARY_CHARGE_SI as f32;

/// `K⋅Q⋅Q`, the force in newtons between two electrons one metre apart.
///
/// Evaluated left to right in `f32`; `Q⋅Q` alone sits close to the bottom of
/// the normal `f32` range, so the order matters for the low bits.
pub fn pair_constant() -> f32 {
    K * Q * Q
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pair_constant_matches_double_precision() {
        let expected = COULOMB_CONSTANT_SI * ELEMENTARY_CHARGE_SI * ELEMENTARY_CHARGE_SI;
        assert_relative_eq!(pair_constant() as f64, expected, max_relative = 1e-6);
        assert!(pair_constant().is_normal());
    }
}
