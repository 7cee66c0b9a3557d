//! Internal macros.
//!
//! Every arithmetic type implements its operators once on references
//! (`&A op &B`); these macros derive the by-value and mixed variants from it.

/// Define the owned and mixed-borrow variants of a binary operator.
macro_rules! impl_binop_variants {
    ($trait:ident, $method:ident, LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: &'b $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(&self, rhs)
            }
        }

        impl<'a> $trait<$rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(self, &rhs)
            }
        }

        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(&self, &rhs)
            }
        }
    };
}

/// Define both `OpAssign` variants in terms of `&LHS op &RHS`.
macro_rules! impl_assign_variants {
    ($trait:ident, $method:ident, $op:tt, LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl $trait<&$rhs> for $lhs {
            fn $method(&mut self, rhs: &$rhs) {
                *self = &*self $op rhs;
            }
        }

        impl $trait<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                *self = &*self $op &rhs;
            }
        }
    };
}

/// Define `Neg` for the owned type in terms of `-&T`.
macro_rules! impl_neg_variant {
    ($ty:ty) => {
        impl Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                -&self
            }
        }
    };
}
