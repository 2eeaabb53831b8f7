//! Elementwise vector semantics across element types.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quiver::{vec2, vec3, vec4, Vec3i, Vec4i, Vector};

fn hash_of<T: Hash>(value: T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_vectors_hash_equal() {
    let fixtures: [[i32; 4]; 4] = [
        [0, 0, 0, 0],
        [1, 2, 3, 4],
        [i32::MIN, i32::MAX, i32::MIN, i32::MAX],
        [-982_917_223, 454_923_701, 2_038_074_743, -472_882_049],
    ];
    for elems in fixtures {
        // Build each side independently so the hashes come from distinct values.
        let a = Vec4i::from(elems);
        let b = Vec4i::from_slice(&elems);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }
    assert_ne!(
        hash_of(Vec4i::from(fixtures[0])),
        hash_of(Vec4i::from(fixtures[1]))
    );
}

#[test]
fn mixed_sign_arithmetic() {
    assert_eq!(vec2(1, 2) + vec2(-10, -20), vec2(-9, -18));
    assert_eq!(vec3(-10, -20, -30) / vec3(2, 3, 4), vec3(-5, -6, -7));
    assert_eq!(vec4(-10, -20, -30, -40) % vec4(2, 3, 4, 5), vec4(0, -2, -2, 0));
    assert_eq!(vec2(-10.0f32, -20.0) / vec2(2.0, 3.0), vec2(-5.0, -6.6666665));
}

#[test]
fn overflow_is_reported_not_fatal() {
    let (wrapped, overflowed) = vec3(i32::MAX, 0, 1).overflowing_add(vec3(1, 1, 1));
    assert_eq!(wrapped, vec3(i32::MIN, 1, 2));
    assert!(overflowed);

    let (same, overflowed) = vec3(5, 6, 7).overflowing_add(vec3(1, 1, 1));
    assert_eq!(same, vec3(6, 7, 8));
    assert!(!overflowed);

    // Division by zero leaves the dividend in place and reports overflow.
    let (result, overflowed) = vec3(5, 6, 7).overflowing_div(vec3(1, 0, 1));
    assert_eq!(result, vec3(5, 6, 7));
    assert!(overflowed);

    let (result, overflowed) = Vec3i::splat(i32::MIN).overflowing_div(Vec3i::splat(-1));
    assert_eq!(result, Vec3i::splat(i32::MIN));
    assert!(overflowed);
}

#[test]
fn wrapping_matches_two_complement() {
    assert_eq!(
        Vec4i::splat(i32::MAX).wrapping_add(Vec4i::splat(1)),
        Vec4i::splat(i32::MIN)
    );
    assert_eq!(
        Vec4i::splat(i32::MIN).wrapping_sub(Vec4i::splat(1)),
        Vec4i::splat(i32::MAX)
    );
}

#[test]
fn comparisons_are_a_partial_order() {
    // Every element must satisfy the comparison; mixed outcomes yield `false` both ways.
    assert!(vec2(1, 2).elementwise_le(vec2(1, 3)));
    assert!(!vec2(1, 2).elementwise_lt(vec2(1, 3)));
    assert!(!vec2(1, 2).elementwise_gt(vec2(1, 3)));
    assert!(vec3(4, 5, 6).elementwise_gt(vec3(1, 2, 3)));
    assert!(!vec2(f32::NAN, 0.0).elementwise_le(vec2(f32::NAN, 1.0)));
}

#[test]
fn clamp_and_min_max() {
    let lower = vec3(0, 0, 0);
    let upper = vec3(10, 10, 10);
    assert_eq!(vec3(-5, 5, 15).clamp(lower, upper), vec3(0, 5, 10));

    assert_eq!(vec3(1, 9, 4).min(vec3(3, 2, 4)), vec3(1, 2, 4));
    assert_eq!(vec3(1, 9, 4).max(vec3(3, 2, 4)), vec3(3, 9, 4));
}

#[test]
fn from_slice_requires_exact_arity() {
    assert_eq!(Vector::from_slice(&[1, 2, 3]), vec3(1, 2, 3));

    let result = std::panic::catch_unwind(|| Vec3i::from_slice(&[1, 2]));
    assert!(result.is_err());
}

#[test]
fn boxed_vectors_round_trip_through_any() {
    use std::any::Any;

    let boxed: Box<dyn Any> = Box::new(vec3(1, 2, 3));
    let restored = boxed.downcast::<quiver::Vec3i>().unwrap();
    assert_eq!(*restored, vec3(1, 2, 3));

    // Downcasting to the wrong vector type fails instead of reinterpreting.
    let boxed: Box<dyn Any> = Box::new(vec3(1.0_f32, 2.0, 3.0));
    assert!(boxed.downcast::<quiver::Vec3i>().is_err());
}

#[test]
fn float_members() {
    assert!(vec3(1.0, 2.0, 3.0).is_finite());
    assert!(!vec3(1.0, f32::INFINITY, 3.0).is_finite());
    assert!(vec2(f32::NAN, 0.0).is_nan());
    assert!(!vec2(1.0, 0.0).is_nan());
}
