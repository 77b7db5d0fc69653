//! Operator forwarding.
//!
//! Each layer implements its arithmetic once, on `&T op &T`. These macros
//! derive the owned and mixed forms from that single implementation.

macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl core::ops::$imp<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                core::ops::$imp::$method(&self, &rhs)
            }
        }

        impl core::ops::$imp<&$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                core::ops::$imp::$method(&self, rhs)
            }
        }

        impl core::ops::$imp<$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                core::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_ref_unop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl core::ops::$imp for $t {
            type Output = $t;

            #[inline]
            fn $method(self) -> $t {
                core::ops::$imp::$method(&self)
            }
        }
    };
}

pub(crate) use forward_ref_binop;
pub(crate) use forward_ref_unop;
