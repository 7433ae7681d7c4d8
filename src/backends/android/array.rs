//! Java primitive arrays.

use super::lookup::checked;
use crate::error::Result;
use jni::objects::JIntArray;
use jni::sys::jint;
use jni::JNIEnv;
use std::ops::Index;

/// Native copy of a Java primitive array.
///
/// The elements are read out of the JVM once, at construction; the Java side
/// is not referenced afterwards, so element access is stable for the lifetime
/// of the value and nothing needs releasing on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JniArray<T> {
    data: Vec<T>,
}

impl JniArray<jint> {
    /// Marshal an `int[]`.
    pub fn from_int_array(env: &mut JNIEnv<'_>, array: &JIntArray<'_>) -> Result<Self> {
        let length = env.get_array_length(array);
        let length = checked(env, length)?;

        let mut data = vec![0; usize::try_from(length).unwrap_or(0)];
        let copied = env.get_int_array_region(array, 0, &mut data);
        checked(env, copied)?;

        Ok(Self { data })
    }
}

impl<T: Copy> JniArray<T> {
    /// Element at `idx`, `None` when out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.data.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }
}

impl<T> JniArray<T> {
    /// Number of elements; equals the Java array's length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Length as the JVM reports it (`GetArrayLength`).
    pub fn get_length(&self) -> i32 {
        self.data.len() as i32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for JniArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for JniArray<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_access_match_contents() {
        let ids = JniArray::from(vec![3, 11, 42]);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.get_length(), 3);
        assert_eq!(ids[1], 11);
        assert_eq!(ids.get(2), Some(42));
        assert_eq!(ids.get(3), None);
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec![3, 11, 42]);
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_end_panics() {
        let ids: JniArray<jint> = JniArray::from(vec![1]);
        let _ = ids[1];
    }
}
