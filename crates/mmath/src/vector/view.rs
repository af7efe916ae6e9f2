//! Named accessors over the elements of a vector.
//!
//! Positional names (`x`, `y`, `z`, `w`) and color channel names (`r`, `g`, `b`, `a`) both index
//! into the same backing array; writing through one is visible through the other.

use crate::Scalar;

use super::Vector;

macro_rules! accessors {
    ($n:literal: $($name:ident / $name_mut:ident / $set:ident = $index:literal),+) => {
        impl Vector<$n> {
            $(
                #[inline]
                pub const fn $name(&self) -> Scalar {
                    self.0[$index]
                }

                #[inline]
                pub fn $name_mut(&mut self) -> &mut Scalar {
                    &mut self.0[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: Scalar) {
                    self.0[$index] = value;
                }
            )+
        }
    };
}

accessors!(2:
    x / x_mut / set_x = 0,
    y / y_mut / set_y = 1
);

accessors!(3:
    x / x_mut / set_x = 0,
    y / y_mut / set_y = 1,
    z / z_mut / set_z = 2,
    r / r_mut / set_r = 0,
    g / g_mut / set_g = 1,
    b / b_mut / set_b = 2
);

accessors!(4:
    x / x_mut / set_x = 0,
    y / y_mut / set_y = 1,
    z / z_mut / set_z = 2,
    w / w_mut / set_w = 3,
    r / r_mut / set_r = 0,
    g / g_mut / set_g = 1,
    b / b_mut / set_b = 2,
    a / a_mut / set_a = 3
);
