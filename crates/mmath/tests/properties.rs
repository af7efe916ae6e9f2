//! Randomized checks of algebraic identities, with fixed seeds.

use mmath::*;

const LOG: bool = false;
const ITERATIONS: usize = 200;

fn init_logger() {
    if LOG {
        env_logger::builder()
            .is_test(true)
            .filter_module("mmath", log::LevelFilter::Trace)
            .try_init()
            .ok();
    }
}

struct Gen(fastrand::Rng);

impl Gen {
    fn new(seed: u64) -> Self {
        init_logger();
        Self(fastrand::Rng::with_seed(seed))
    }

    fn scalar(&mut self, min: Scalar, max: Scalar) -> Scalar {
        min + (max - min) * self.0.f64() as Scalar
    }

    fn vec3(&mut self, range: Scalar) -> Vec3 {
        Vec3::from_fn(|_| self.scalar(-range, range))
    }

    fn vec4(&mut self, range: Scalar) -> Vec4 {
        Vec4::from_fn(|_| self.scalar(-range, range))
    }

    fn unit_quat(&mut self) -> Quat {
        loop {
            if let Some(q) = Quat::from_vec(self.vec4(1.0)).try_normalize() {
                return q;
            }
        }
    }

    fn transform(&mut self, uniform_scale: bool) -> Transform {
        let scale = if uniform_scale {
            Vec3::splat(self.scalar(0.5, 2.0))
        } else {
            Vec3::from_fn(|_| self.scalar(0.5, 2.0))
        };
        Transform::new(self.vec3(10.0), scale, self.unit_quat())
    }
}

#[test]
fn normalize_yields_unit_length() {
    let mut gen = Gen::new(0x6a09e667f3bcc908);
    for _ in 0..ITERATIONS {
        let v = gen.vec3(100.0);
        if v.length() < 1e-3 {
            continue;
        }
        assert_approx_eq!(v.normalize().length(), 1.0, "{v:?}").abs(1e-5);
        assert_approx_eq!(v.normalize().dot(v), v.length(), "{v:?}").rel(1e-5);
    }
}

#[test]
fn cross_product() {
    let mut gen = Gen::new(0xbb67ae8584caa73b);
    for _ in 0..ITERATIONS {
        let (a, b) = (gen.vec3(10.0), gen.vec3(10.0));
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_approx_eq!(c.dot(a), 0.0, "{a:?} x {b:?}").abs(1e-2);
        assert_approx_eq!(c.dot(b), 0.0, "{a:?} x {b:?}").abs(1e-2);
    }
}

#[test]
fn identity_laws() {
    let mut gen = Gen::new(0x3c6ef372fe94f82b);
    for _ in 0..ITERATIONS {
        let v = gen.vec4(100.0);
        assert_eq!(v * Mat4::IDENTITY, v);
        assert_eq!(Mat4::IDENTITY.mul_vec(v), v);

        let m = Mat4::from_fn(|_, _| gen.scalar(-10.0, 10.0));
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);

        let p = gen.vec3(100.0);
        assert_eq!(Quat::IDENTITY.rotate(p), p);

        let t = gen.transform(false);
        assert_eq!(Transform::IDENTITY * t, t);
    }
}

#[test]
fn lerp_endpoints() {
    let mut gen = Gen::new(0xa54ff53a5f1d36f1);
    for _ in 0..ITERATIONS {
        let (a, b) = (gen.vec3(100.0), gen.vec3(100.0));
        assert_eq!(a.lerp(b, 0.0), a);
        // `a + (b - a) * 1.0` rounds twice, so `b` is only reached approximately.
        assert_approx_eq!(a.lerp(b, 1.0), b).abs(1e-4);
    }
}

#[test]
fn slerp_endpoints() {
    let mut gen = Gen::new(0x510e527fade682d1);
    for _ in 0..ITERATIONS {
        let f = gen.unit_quat();
        let mut l = gen.unit_quat();
        if f.dot(l) < 0.0 {
            l = -l;
        }
        assert_approx_eq!(f.slerp(l, 0.0), f, "{f:?} -> {l:?}").abs(1e-4);
        assert_approx_eq!(f.slerp(l, 1.0), l, "{f:?} -> {l:?}").abs(1e-4);
    }
}

#[test]
fn slerp_angle_is_monotonic() {
    let mut gen = Gen::new(0x9b05688c2b3e6c1f);
    for _ in 0..ITERATIONS {
        let f = gen.unit_quat();
        let l = gen.unit_quat();
        let dot = f.dot(l);
        if !(0.0..0.95).contains(&dot) {
            continue;
        }

        let mut prev = 0.0;
        for step in 0..=20 {
            let q = f.slerp(l, step as Scalar / 20.0);
            let angle = f.as_vec4().abs_angle_to(q.as_vec4());
            assert!(
                angle + 1e-4 >= prev,
                "{f:?} -> {l:?}: angle {angle} < {prev} at step {step}"
            );
            prev = angle;
        }
    }
}

#[test]
fn rotate_matches_rotation_matrix() {
    let mut gen = Gen::new(0x1f83d9abfb41bd6b);
    for _ in 0..ITERATIONS {
        let q = gen.unit_quat();
        let v = gen.vec3(10.0);
        assert_approx_eq!(q.rotate(v), v * q.to_mat3(), "{q:?}").abs(1e-4);
        assert_approx_eq!(q.rotate(v).length(), v.length()).abs(1e-4);
        assert_approx_eq!(q.inverse().rotate(q.rotate(v)), v).abs(1e-4);

        let theta = gen.scalar(-consts::PI, consts::PI);
        let y = Quat::from_axis_angle(Vec3::Y, theta);
        assert_approx_eq!(y.rotate(v), v * y.to_mat3()).abs(1e-4);
        assert_approx_eq!(y.rotate(v), v * Mat3::rotation_y(theta)).abs(1e-4);
    }
}

#[test]
fn compose_is_associative() {
    let mut gen = Gen::new(0x5be0cd19137e2179);
    for _ in 0..ITERATIONS {
        // Rotation and scale compose associatively for any scale.
        let (a, b, c) = (gen.transform(false), gen.transform(false), gen.transform(false));
        let (left, right) = ((a * b) * c, a * (b * c));
        assert_approx_eq!(left.rotation, right.rotation).abs(1e-5);
        assert_approx_eq!(left.scale, right.scale).abs(1e-5);

        // Position also does when the inner scale is uniform.
        let (a, b, c) = (gen.transform(true), gen.transform(true), gen.transform(true));
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-3);
    }
}

#[test]
fn mat3_inverse() {
    let mut gen = Gen::new(0x428a2f98d728ae22);
    for _ in 0..ITERATIONS {
        let m = Mat3::from_fn(|_, _| gen.scalar(-2.0, 2.0));
        match m.checked_inverse() {
            Some(inv) if m.determinant().abs() > 0.1 => {
                assert_approx_eq!(m * inv, Mat3::IDENTITY, "{m:?}").abs(1e-3);
            }
            _ => {}
        }
    }
}
