use std::any::type_name;
use std::fmt;

use crate::SparseArrayBuilder;

/// Caller-supplied callback through which a [`SparseArray`] relinquishes ownership of one value.
///
/// When a hook is configured, the array invokes it exactly once for every live value it
/// releases: on overwrite via [`set()`][1], on bulk clearing via [`purge()`][2] and on
/// teardown when the array is dropped. It is never invoked on growth, on [`pop()`][3]
/// (ownership transfers to the caller there) or on read access.
///
/// The hook receives ownership of the value and is responsible for fully releasing it.
/// It runs during teardown as well, so it must be safe to call from a destructor.
///
/// [1]: SparseArray::set
/// [2]: SparseArray::purge
/// [3]: SparseArray::pop
pub type ReleaseHook<T> = Box<dyn FnMut(T)>;

/// A dynamically growing array of owned values that supports both stack discipline
/// (push/pop/top/pick) and direct random-access indexing (get/set), with an optional
/// [release hook][ReleaseHook] invoked whenever the array relinquishes ownership of a value.
///
/// # Capacity and growth
///
/// The array allocates a fixed number of slots up front and grows on demand, by a
/// configurable increment called the *grow step* (initially equal to the starting
/// capacity). [`push()`][1] grows a full array to `capacity + grow_step`; [`set()`][2]
/// past the capacity grows to `index + grow_step`, pre-allocating headroom beyond the
/// written index. The two growth targets are deliberately different amortization
/// policies and both are part of the contract. Capacity never shrinks.
///
/// # Length, the cursor and holes
///
/// The logical length (the *cursor*) counts slots from index 0 that are in range for
/// the stack operations. Writing via [`set()`][2] beyond the current length advances
/// the length to `index + 1` and leaves the skipped slots as *holes*: vacant slots
/// inside the logical range. Reads of a hole return [`None`] rather than a value, and
/// [`pop()`][3] over a hole returns [`None`] while still consuming the slot.
///
/// # Ownership
///
/// The array exclusively owns every live value it holds. Ownership leaves the array in
/// exactly four ways: [`pop()`][3] transfers it to the caller; overwriting via
/// [`set()`][2], clearing via [`purge()`][4] and dropping the array release the value
/// in place, through the [release hook][ReleaseHook] when one is configured and by
/// dropping the value otherwise.
///
/// # Example
///
/// ```rust
/// use sparse_array::SparseArray;
///
/// let mut array = SparseArray::<String>::new(2);
///
/// array.push("first".to_string());
/// array.push("second".to_string());
/// assert!(array.is_full());
///
/// // A third push grows the array by one grow step (2 slots).
/// array.push("third".to_string());
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.len(), 3);
///
/// assert_eq!(array.get(0).map(String::as_str), Some("first"));
/// assert_eq!(array.pop().as_deref(), Some("third"));
/// ```
///
/// # Thread safety
///
/// The array has no internal locking and promises no thread mobility - the release
/// hook is an arbitrary boxed closure. Callers that need shared access wrap the array
/// in their own synchronization.
///
/// [1]: Self::push
/// [2]: Self::set
/// [3]: Self::pop
/// [4]: Self::purge
pub struct SparseArray<T> {
    /// The backing slots. The length of this Vec is the capacity of the array: every
    /// slot within capacity is materialized, holding either a live value or `None`,
    /// the explicit vacant marker. Slots at or beyond the cursor are always `None`.
    slots: Vec<Option<T>>,

    /// The logical length. Slots at `[0, cursor)` are in range for stack operations.
    /// Never exceeds `slots.len()`.
    cursor: usize,

    /// The increment applied by auto-growth. A zero grow step makes growth a
    /// precondition violation rather than a silent no-op.
    grow_step: usize,

    release_hook: Option<ReleaseHook<T>>,
}

impl<T> SparseArray<T> {
    /// The capacity, in slots, chosen by [`new_auto()`][1] and [`new_auto_with()`][2]
    /// when the caller does not want to pick one.
    ///
    /// [1]: Self::new_auto
    /// [2]: Self::new_auto_with
    pub const AUTO_CAPACITY: usize = 8;

    #[must_use]
    pub(crate) fn new_inner(
        capacity: usize,
        grow_step: usize,
        release_hook: Option<ReleaseHook<T>>,
    ) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);

        Self {
            slots,
            cursor: 0,
            grow_step,
            release_hook,
        }
    }

    /// Creates a new [`SparseArray`] with `capacity` vacant slots and a grow step
    /// equal to that capacity.
    ///
    /// A zero capacity is valid: the array then also starts with a zero grow step, so
    /// a non-zero grow step must be configured via [`set_grow_step()`][1] before
    /// anything can be stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_array::SparseArray;
    ///
    /// let array = SparseArray::<u32>::new(4);
    ///
    /// assert_eq!(array.capacity(), 4);
    /// assert_eq!(array.grow_step(), 4);
    /// assert!(array.is_empty());
    /// ```
    ///
    /// [1]: Self::set_grow_step
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::new_inner(capacity, capacity, None)
    }

    /// Creates a new [`SparseArray`] like [`new()`][1] does, with a
    /// [release hook][ReleaseHook] registered up front.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use sparse_array::SparseArray;
    ///
    /// let released = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&released);
    ///
    /// let mut array = SparseArray::new_with(4, move |_value: String| {
    ///     counter.set(counter.get() + 1);
    /// });
    ///
    /// array.push("transient".to_string());
    /// array.purge();
    ///
    /// assert_eq!(released.get(), 1);
    /// ```
    ///
    /// [1]: Self::new
    #[must_use]
    pub fn new_with(capacity: usize, release_hook: impl FnMut(T) + 'static) -> Self {
        Self::new_inner(capacity, capacity, Some(Box::new(release_hook)))
    }

    /// Creates a new [`SparseArray`] with the default [`AUTO_CAPACITY`][Self::AUTO_CAPACITY].
    #[must_use]
    pub fn new_auto() -> Self {
        Self::new(Self::AUTO_CAPACITY)
    }

    /// Creates a new [`SparseArray`] with the default
    /// [`AUTO_CAPACITY`][Self::AUTO_CAPACITY] and a [release hook][ReleaseHook]
    /// registered up front.
    #[must_use]
    pub fn new_auto_with(release_hook: impl FnMut(T) + 'static) -> Self {
        Self::new_with(Self::AUTO_CAPACITY, release_hook)
    }

    /// Starts building a new [`SparseArray`].
    ///
    /// Use this when you want to customize the configuration beyond what the
    /// constructors offer, such as a grow step different from the initial capacity.
    ///
    /// # Example
    ///
    /// ```rust
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
    pub fn builder() -> SparseArrayBuilder<T> {
        SparseArrayBuilder::new()
    }

    /// Attaches a [release hook][ReleaseHook], replacing any previous one.
    ///
    /// Attaching a hook does not retroactively release already-stored values; it only
    /// governs releases that happen afterwards.
    pub fn set_release_hook(&mut self, release_hook: impl FnMut(T) + 'static) {
        self.release_hook = Some(Box::new(release_hook));
    }

    /// The total number of slots currently allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of slots added when growth is triggered.
    #[must_use]
    pub fn grow_step(&self) -> usize {
        self.grow_step
    }

    /// Changes the increment used by future auto-growth.
    ///
    /// Already-allocated capacity is unaffected.
    pub fn set_grow_step(&mut self, grow_step: usize) {
        self.grow_step = grow_step;
    }

    /// The logical length: the number of slots, counted from index 0, that are in
    /// range for the stack operations. Holes created by out-of-order [`set()`][1]
    /// calls count toward the length despite holding no value.
    ///
    /// [1]: Self::set
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Whether the logical length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Whether the logical length has reached the capacity, meaning the next
    /// [`push()`][Self::push] will trigger growth.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cursor == self.slots.len()
    }

    /// Grows the backing storage to exactly `new_capacity` slots.
    ///
    /// Existing slot contents, holes included, are preserved in place; the added
    /// slots start vacant. Growth never invokes the release hook. A `new_capacity`
    /// equal to the current capacity is a no-op.
    ///
    /// Growth is all-or-nothing: allocation failure aborts the process rather than
    /// leaving the array partially resized.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is less than the current capacity - the array never
    /// shrinks, and asking it to is a caller bug.
    pub fn resize(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.slots.len(),
            "cannot shrink a SparseArray of {} from {} to {new_capacity} slots",
            type_name::<T>(),
            self.slots.len(),
        );

        if new_capacity == self.slots.len() {
            return;
        }

        self.slots.resize_with(new_capacity, || None);
    }

    /// Stores `value` in the slot at the current length and advances the length.
    ///
    /// If the array is full, it first grows by exactly one grow step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_array::SparseArray;
    ///
    /// let mut array = SparseArray::<u32>::new(2);
    ///
    /// array.push(42);
    /// array.push(43);
    /// array.push(44); // Triggers growth to 4 slots.
    ///
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the array is full and the grow step is zero.
    pub fn push(&mut self, value: T) {
        #[cfg(debug_assertions)]
        self.integrity_check();

        if self.is_full() {
            assert!(
                self.grow_step > 0,
                "cannot push into a full SparseArray of {} with a zero grow step",
                type_name::<T>()
            );

            let new_capacity = self
                .slots
                .len()
                .checked_add(self.grow_step)
                .expect("growing past usize::MAX slots would exhaust virtual memory long before this point");

            self.resize(new_capacity);
        }

        let slot = self
            .slots
            .get_mut(self.cursor)
            .expect("cursor is below capacity after growth");

        debug_assert!(slot.is_none(), "slots at or beyond the cursor are vacant");
        *slot = Some(value);

        self.cursor = self
            .cursor
            .checked_add(1)
            .expect("cursor cannot exceed capacity, which fits in usize");
    }

    /// Removes the top slot and returns its contents, transferring ownership to the
    /// caller. The release hook is not invoked.
    ///
    /// Returns [`None`] when the top slot was a hole left behind by an out-of-order
    /// [`set()`][1]; the slot is consumed and the length decremented either way.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. An empty pop is a caller bug, not a recoverable
    /// miss - check [`is_empty()`][2] first.
    ///
    /// [1]: Self::set
    /// [2]: Self::is_empty
    pub fn pop(&mut self) -> Option<T> {
        assert!(
            self.cursor > 0,
            "cannot pop from an empty SparseArray of {}",
            type_name::<T>()
        );

        self.cursor = self
            .cursor
            .checked_sub(1)
            .expect("guarded by the emptiness assertion above");

        self.slots
            .get_mut(self.cursor)
            .expect("cursor stays below capacity")
            .take()
    }

    /// Borrows the top slot without removing it.
    ///
    /// Returns [`None`] when the top slot is a hole.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        assert!(
            self.cursor > 0,
            "cannot peek into an empty SparseArray of {}",
            type_name::<T>()
        );

        let index = self
            .cursor
            .checked_sub(1)
            .expect("guarded by the emptiness assertion above");

        self.slot(index)
    }

    /// Borrows the slot `back_index` positions below the top: 0 is the top itself,
    /// 1 is one below it, and so on.
    ///
    /// Returns [`None`] when the addressed slot is a hole.
    ///
    /// # Panics
    ///
    /// Panics if `back_index` is not less than the length.
    #[must_use]
    pub fn pick(&self, back_index: usize) -> Option<&T> {
        assert!(
            back_index < self.cursor,
            "pick({back_index}) reaches below the bottom of a SparseArray of {} with length {}",
            type_name::<T>(),
            self.cursor,
        );

        let index = self
            .cursor
            .checked_sub(1)
            .and_then(|top| top.checked_sub(back_index))
            .expect("guarded by the range assertion above");

        self.slot(index)
    }

    /// Borrows the slot at `index`.
    ///
    /// Returns [`None`] both for an index at or beyond the capacity (a pure read
    /// miss - no growth, no panic) and for a hole within range. The two cases are
    /// deliberately indistinguishable to the reader: there is no value either way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_array::SparseArray;
    ///
    /// let mut array = SparseArray::<u32>::new(4);
    /// array.set(1, 7);
    ///
    /// assert_eq!(array.get(1), Some(&7));
    /// assert_eq!(array.get(0), None); // Hole.
    /// assert_eq!(array.get(100), None); // Beyond capacity.
    /// assert_eq!(array.capacity(), 4); // Reads never grow the array.
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot(index)
    }

    /// Stores `value` in the slot at `index`, growing the array if the index is
    /// beyond the current capacity.
    ///
    /// Growth targets `index + grow_step` slots, pre-allocating headroom beyond the
    /// written index. If the slot already holds a live value, that value is released
    /// (through the hook when one is configured) before the new value becomes
    /// visible. Writing at or beyond the current length advances the length to
    /// `index + 1`, leaving any skipped slots as holes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_array::SparseArray;
    ///
    /// let mut array = SparseArray::<u32>::new(4);
    /// array.set(10, 99);
    ///
    /// // Growth targeted index + grow step: 10 + 4 slots.
    /// assert_eq!(array.capacity(), 14);
    /// assert_eq!(array.len(), 11);
    /// assert_eq!(array.get(10), Some(&99));
    /// assert_eq!(array.get(5), None); // One of the holes at 0..=9.
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if growth is required and the grow step is zero - a capacity of
    /// `index + 0` could never contain the written slot.
    pub fn set(&mut self, index: usize, value: T) {
        if index >= self.slots.len() {
            assert!(
                self.grow_step > 0,
                "cannot grow a SparseArray of {} to reach index {index} with a zero grow step",
                type_name::<T>()
            );

            let new_capacity = index
                .checked_add(self.grow_step)
                .expect("growing past usize::MAX slots would exhaust virtual memory long before this point");

            self.resize(new_capacity);
        }

        let previous = self
            .slots
            .get_mut(index)
            .expect("index is below capacity after growth")
            .take();

        // The old value is released before the new one becomes visible.
        if let Some(previous) = previous {
            self.release(previous);
        }

        *self
            .slots
            .get_mut(index)
            .expect("index is below capacity after growth") = Some(value);

        if index >= self.cursor {
            self.cursor = index
                .checked_add(1)
                .expect("a slot exists at this index, so index + 1 fits in usize");
        }
    }

    /// Releases every live value in the array and resets the length to zero.
    ///
    /// The release hook, when configured, is invoked exactly once per live value.
    /// Capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sparse_array::SparseArray;
    ///
    /// let mut array = SparseArray::<u32>::new(4);
    /// array.push(1);
    /// array.push(2);
    ///
    /// array.purge();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 4);
    /// assert_eq!(array.get(0), None);
    /// ```
    pub fn purge(&mut self) {
        if let Some(hook) = self.release_hook.as_mut() {
            for slot in &mut self.slots {
                if let Some(value) = slot.take() {
                    hook(value);
                }
            }
        } else {
            // No hook configured: dropping the values in bulk is the entire release.
            self.slots.fill_with(|| None);
        }

        self.cursor = 0;
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Relinquishes ownership of one value. Without a hook the value is dropped
    /// right here, which for owned values is the release.
    fn release(&mut self, value: T) {
        if let Some(hook) = self.release_hook.as_mut() {
            hook(value);
        }
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        assert!(
            self.cursor <= self.slots.len(),
            "cursor {} runs past the capacity {} in a SparseArray of {}",
            self.cursor,
            self.slots.len(),
            type_name::<T>()
        );
    }
}

impl<T> Drop for SparseArray<T> {
    fn drop(&mut self) {
        // Remaining live values go through the release hook; the backing storage is
        // freed by the Vec once we are done here.
        self.purge();
    }
}

impl<T> Default for SparseArray<T> {
    /// Creates a new [`SparseArray`] with the default
    /// [`AUTO_CAPACITY`][SparseArray::AUTO_CAPACITY].
    fn default() -> Self {
        Self::new_auto()
    }
}

impl<T> fmt::Debug for SparseArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseArray")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("grow_step", &self.grow_step)
            .field("has_release_hook", &self.release_hook.is_some())
            .finish()
    }
}
