//! Sub-vector projections (`v.xy()`, `v.xzw()`, ...) and the matching replacement methods.
//!
//! Getters copy the named components into a smaller vector; setters write the given vector
//! back into exactly those components, leaving all others untouched.

use crate::Vector;

macro_rules! swizzles {
    ($n:literal => $( $get:ident $set:ident ($m:literal) [$($idx:literal),+] ),+ $(,)?) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Projects onto the `", stringify!($get), "` components.")]
                #[inline]
                pub fn $get(self) -> Vector<T, $m> {
                    Vector::from([$(self[$idx]),+])
                }

                #[doc = concat!(
                    "Replaces the `", stringify!($get), "` components, leaving the rest untouched.",
                )]
                #[inline]
                pub fn $set(&mut self, value: Vector<T, $m>) {
                    let mut elems = value.into_array().into_iter();
                    $( self[$idx] = elems.next().unwrap(); )+
                }
            )+
        }
    };
}

swizzles!(2 =>
    yx set_yx (2) [1, 0],
);

swizzles!(3 =>
    xy set_xy (2) [0, 1],
    xz set_xz (2) [0, 2],
    yx set_yx (2) [1, 0],
    yz set_yz (2) [1, 2],
    zx set_zx (2) [2, 0],
    zy set_zy (2) [2, 1],
    xzy set_xzy (3) [0, 2, 1],
    yzx set_yzx (3) [1, 2, 0],
    zxy set_zxy (3) [2, 0, 1],
);

swizzles!(4 =>
    xy set_xy (2) [0, 1],
    xz set_xz (2) [0, 2],
    xw set_xw (2) [0, 3],
    yz set_yz (2) [1, 2],
    yw set_yw (2) [1, 3],
    zw set_zw (2) [2, 3],
    xyz set_xyz (3) [0, 1, 2],
    xyw set_xyw (3) [0, 1, 3],
    xzw set_xzw (3) [0, 2, 3],
    yzw set_yzw (3) [1, 2, 3],
);
