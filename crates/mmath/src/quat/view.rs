use crate::Scalar;

use super::Quat;

macro_rules! components {
    ($($name:ident / $set:ident = $index:literal),+) => {
        impl Quat {
            $(
                #[inline]
                pub fn $name(&self) -> Scalar {
                    self.vec[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: Scalar) {
                    self.vec[$index] = value;
                }
            )+
        }
    };
}

components!(
    x / set_x = 0,
    y / set_y = 1,
    z / set_z = 2,
    w / set_w = 3
);

#[cfg(test)]
mod tests {
    use crate::{vec3, Quat};

    #[test]
    fn components() {
        let mut q = Quat::IDENTITY;
        assert_eq!([q.x(), q.y(), q.z(), q.w()], [0.0, 0.0, 0.0, 1.0]);

        q.set_x(2.0);
        q.set_w(-1.0);
        assert_eq!(q.axis(), vec3(2.0, 0.0, 0.0));
        assert_eq!(q.w(), -1.0);
    }
}
