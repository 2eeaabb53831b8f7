use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::Quat;

/// Field view of a [`Quat`], accessible through its [`Deref`] impl.
///
/// The imaginary components come first, the real component `w` is last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct IJKW<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub w: T,
    _priv: (),
}

impl<T> Deref for Quat<T> {
    type Target = IJKW<T>;

    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute::<&Self, &Self::Target>(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute::<&mut Self, &mut Self::Target>(self) }
    }
}

#[cfg(test)]
mod tests {
    use crate::Quat;

    #[test]
    fn field_access() {
        let mut q = Quat::from_components(1, 2, 3, 4);
        assert_eq!(q.i, 1);
        assert_eq!(q.j, 2);
        assert_eq!(q.k, 3);
        assert_eq!(q.w, 4);
        q.w = 9;
        assert_eq!(q.to_vec().w, 9);
    }
}
