//! Basic combiners: Count, Sum, Min, Max, ToList

use super::CombineFn;
use std::cmp::Ord;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Count ===================== */

/// Number of values seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }
    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }
    fn merge(&self, acc: &mut u64, other: u64) {
        *acc += other;
    }
    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

/* ===================== Sum<T> ===================== */

/// Sum of values.
///
/// - Accumulator: `T`
/// - Output: `T`
///
/// Requires `T: Add<Output=T> + Default`; the empty sum is `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);
impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: 'static + Send + Sync + Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn merge(&self, acc: &mut T, other: T) {
        *acc = take(acc) + other;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Min<T> ===================== */

/// Minimum value (requires `Ord`); `None` when nothing was seen.
///
/// Ties keep the earliest value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(pub PhantomData<T>);
impl<T> Min<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, Option<T>> for Min<T>
where
    T: 'static + Send + Sync + Ord,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(b) = other {
            self.add_input(acc, b);
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/* ===================== Max<T> ===================== */

/// Maximum value (requires `Ord`); `None` when nothing was seen.
///
/// Ties keep the earliest value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(pub PhantomData<T>);
impl<T> Max<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, Option<T>> for Max<T>
where
    T: 'static + Send + Sync + Ord,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(b) = other {
            self.add_input(acc, b);
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/* ===================== ToList ===================== */

/// Gather values into a `Vec` in encounter order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToList;

impl<V: 'static> CombineFn<V, Vec<V>, Vec<V>> for ToList {
    fn create(&self) -> Vec<V> {
        Vec::new()
    }
    fn add_input(&self, acc: &mut Vec<V>, v: V) {
        acc.push(v);
    }
    fn merge(&self, acc: &mut Vec<V>, other: Vec<V>) {
        acc.extend(other);
    }
    fn finish(&self, acc: Vec<V>) -> Vec<V> {
        acc
    }
}
