use std::any::type_name;
use std::fmt;

use crate::{ReleaseHook, SparseArray};

/// Builder for creating an instance of [`SparseArray`].
///
/// You only need to use this builder if you want to customize the array configuration,
/// such as choosing a grow step different from the initial capacity. The constructors
/// on [`SparseArray`] are sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use sparse_array::SparseArray;
///
/// let array = SparseArray::<u32>::builder()
///     .capacity(16)
///     .grow_step(4)
///     .build();
///
/// assert_eq!(array.capacity(), 16);
/// assert_eq!(array.grow_step(), 4);
/// ```
#[must_use]
pub struct SparseArrayBuilder<T> {
    capacity: usize,
    grow_step: Option<usize>,
    release_hook: Option<ReleaseHook<T>>,
}

impl<T> fmt::Debug for SparseArrayBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseArrayBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.capacity)
            .field("grow_step", &self.grow_step)
            .field("has_release_hook", &self.release_hook.is_some())
            .finish()
    }
}

impl<T> SparseArrayBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: SparseArray::<T>::AUTO_CAPACITY,
            grow_step: None,
            release_hook: None,
        }
    }

    /// Sets the initial capacity, in slots.
    ///
    /// Defaults to [`SparseArray::AUTO_CAPACITY`].
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the increment applied when the array grows.
    ///
    /// Defaults to the configured capacity, matching what the plain constructors do.
    /// A zero grow step turns growth into a precondition violation, which is only
    /// useful for arrays that must never outgrow their initial capacity.
    pub fn grow_step(mut self, grow_step: usize) -> Self {
        self.grow_step = Some(grow_step);
        self
    }

    /// Registers the [release hook][ReleaseHook] through which the array will
    /// relinquish ownership of values it releases.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_array::SparseArray;
    ///
    /// let array = SparseArray::<String>::builder()
    ///     .release_hook(|value| println!("releasing {value}"))
    ///     .build();
    /// ```
    pub fn release_hook(mut self, release_hook: impl FnMut(T) + 'static) -> Self {
        self.release_hook = Some(Box::new(release_hook));
        self
    }

    /// Builds the sparse array with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_array::SparseArray;
    ///
    /// let array = SparseArray::<u32>::builder().build();
    /// ```
    #[must_use]
    pub fn build(self) -> SparseArray<T> {
        let grow_step = self.grow_step.unwrap_or(self.capacity);

        SparseArray::new_inner(self.capacity, grow_step, self.release_hook)
    }
}
