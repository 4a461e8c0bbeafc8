//! Category-partitioned slab with stable ids.
//!
//! [`CategorySlab`] keeps every record reachable under a stable id while
//! maintaining a permutation of storage positions that groups records by
//! category. Moving a record between categories swaps it across partition
//! boundaries instead of touching the record itself, so reclassification
//! is O(distance between categories) with no allocation.

use core::iter::FusedIterator;
use core::mem;
use core::ops;

use crate::error::{CategoryError, InsertError};
use crate::id::Id;

/// Capacity reserved by [`CategorySlab::new`].
const DEFAULT_CAPACITY: usize = 100;

/// A slab of records partitioned into a fixed set of categories.
///
/// Every record gets a stable id on insert. Ids survive any number of
/// reclassifications and are only released by [`remove`](Self::remove).
/// Internally the slab keeps two mutually inverse permutation arrays:
/// one mapping ids to positions, one mapping positions back to ids. The
/// position space is tiled by per-category ranges, with a hidden free
/// pool after the last visible category:
///
/// ```text
/// positions: [ cat 0 | cat 1 | ... | cat C-1 | free pool ]
///              ^offsets[0]                    ^offsets[C] == len()
/// ```
///
/// Inserting takes the left-most free-pool position and walks it down
/// into the target category; removing walks a position up into the free
/// pool and resets the record to `T::default()`, which is why `T` must
/// implement [`Default`]. A record in the free pool is never observable
/// through the public surface.
///
/// # Complexity
///
/// | Operation | Cost |
/// |-----------|------|
/// | `insert` / `remove` | O(C) amortized |
/// | `get` / `get_in` / `contains` | O(1) |
/// | `set_category` | O(category distance) |
/// | `category_of` | O(C) |
/// | growth | O(new capacity), amortized O(1) per insert |
///
/// C is the number of categories, intended to be small; the per-category
/// bookkeeping scans are linear in it.
///
/// # Example
///
/// ```
/// use category_slab::CategorySlab;
///
/// const OPEN: usize = 0;
/// const PARTIAL: usize = 1;
/// const FILLED: usize = 2;
///
/// let mut orders: CategorySlab<u64> = CategorySlab::new(3);
///
/// let id = orders.insert_into(5000, OPEN).unwrap();
/// assert_eq!(orders.category_of(id), Some(OPEN));
///
/// // A partial fill reclassifies without disturbing the id
/// orders.set_category(id, PARTIAL).unwrap();
/// *orders.get_mut(id).unwrap() -= 1200;
/// assert_eq!(orders.get(id), Some(&3800));
///
/// orders.set_category(id, FILLED).unwrap();
/// assert_eq!(orders.category_len(FILLED), 1);
///
/// // Done: the id is released and the slot recycled
/// assert_eq!(orders.remove(id), Some(3800));
/// assert!(!orders.contains(id));
/// ```
///
/// # Iteration
///
/// [`iter`](Self::iter) walks live records in ascending id order;
/// [`category_iter`](Self::category_iter) walks one category in its
/// positional order. Both borrow the slab, so the borrow checker rejects
/// structural mutation while an iterator is alive.
#[derive(Clone)]
pub struct CategorySlab<T, I: Id = u32> {
    /// Number of visible categories. The free pool is category `categories`.
    categories: usize,
    /// Live records across all visible categories.
    len: usize,
    /// Records indexed by id. Freed slots hold `T::default()`.
    items: Vec<T>,
    /// Records per category, free pool last. Length `categories + 1`.
    counts: Vec<usize>,
    /// Start position of each category's range. Length `categories + 1`.
    offsets: Vec<usize>,
    /// Position of each id. Inverse of `ids`.
    positions: Vec<usize>,
    /// Id at each position. Inverse of `positions`.
    ids: Vec<I>,
    /// Smallest live id, 0 when empty.
    min_id: usize,
    /// Largest live id, 0 when empty.
    max_id: usize,
    /// Capacity multiplier on growth, at least 2.
    growth_factor: usize,
}

impl<T: Default, I: Id> Default for CategorySlab<T, I> {
    /// Creates a slab with one category and no reserved capacity.
    fn default() -> Self {
        Self::with_capacity(1, 0)
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Default, I: Id> CategorySlab<T, I> {
    /// Creates a slab with `categories` categories and a default
    /// reserved capacity of 100 records.
    ///
    /// # Panics
    ///
    /// Panics if `categories` is 0.
    pub fn new(categories: usize) -> Self {
        Self::with_capacity(categories, DEFAULT_CAPACITY)
    }

    /// Creates a slab with `categories` categories and room for
    /// `capacity` records before the first growth.
    ///
    /// # Panics
    ///
    /// Panics if `categories` is 0 or `capacity` exceeds the id type's
    /// maximum (`I::LIMIT`).
    pub fn with_capacity(categories: usize, capacity: usize) -> Self {
        assert!(categories > 0, "slab needs at least one category");
        assert!(
            capacity <= I::LIMIT.as_usize(),
            "capacity exceeds id type maximum"
        );

        let mut items = Vec::new();
        items.resize_with(capacity, T::default);

        let mut counts = vec![0; categories + 1];
        counts[categories] = capacity;

        Self {
            categories,
            len: 0,
            items,
            counts,
            offsets: vec![0; categories + 1],
            positions: (0..capacity).collect(),
            ids: (0..capacity).map(I::from_usize).collect(),
            min_id: 0,
            max_id: 0,
            growth_factor: 2,
        }
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<T, I: Id> CategorySlab<T, I> {
    /// Returns the number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no records are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live records in `category`.
    ///
    /// A category that does not exist holds no records, so out-of-range
    /// categories report 0.
    #[inline]
    pub fn category_len(&self, category: usize) -> usize {
        if category < self.categories {
            self.counts[category]
        } else {
            0
        }
    }

    /// Returns the number of slots currently backed by storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of categories.
    #[inline]
    pub fn categories(&self) -> usize {
        self.categories
    }

    /// Returns the largest capacity this slab can grow to, bounded by
    /// the id type.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        I::LIMIT.as_usize()
    }

    /// Returns the capacity multiplier applied on growth.
    #[inline]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Sets the capacity multiplier applied on growth.
    ///
    /// Values below 2 are ignored; growth must strictly enlarge.
    pub fn set_growth_factor(&mut self, factor: usize) {
        if factor >= 2 {
            self.growth_factor = factor;
        }
    }

    /// Returns `true` if `id` refers to a live record.
    #[inline]
    pub fn contains(&self, id: I) -> bool {
        self.is_live(id.as_usize())
    }

    /// Returns the smallest live id, or `None` if the slab is empty.
    #[inline]
    pub fn min_id(&self) -> Option<I> {
        (self.len > 0).then(|| I::from_usize(self.min_id))
    }

    /// Returns the largest live id, or `None` if the slab is empty.
    #[inline]
    pub fn max_id(&self) -> Option<I> {
        (self.len > 0).then(|| I::from_usize(self.max_id))
    }

    /// Returns the category of the record with `id`, or `None` if the
    /// id is not live.
    pub fn category_of(&self, id: I) -> Option<usize> {
        let id = id.as_usize();
        if !self.is_live(id) {
            return None;
        }
        Some(self.category_at(self.positions[id]))
    }

    /// Returns the category owning raw `position` in the partition, or
    /// `None` if the position is past `capacity()`.
    ///
    /// Positions at or past `len()` belong to the free pool, reported
    /// as `categories()`. The boundary scan is O(C), like
    /// [`category_of`](Self::category_of).
    pub fn category_in(&self, position: usize) -> Option<usize> {
        if position >= self.ids.len() {
            return None;
        }
        Some(self.category_at(position))
    }

    /// Returns a reference to the record with `id`.
    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        let id = id.as_usize();
        if !self.is_live(id) {
            return None;
        }
        Some(&self.items[id])
    }

    /// Returns a mutable reference to the record with `id`.
    #[inline]
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        let id = id.as_usize();
        if !self.is_live(id) {
            return None;
        }
        Some(&mut self.items[id])
    }

    /// Returns a reference to the `position`th record of `category`.
    ///
    /// Positions within a category are dense: `0..category_len(category)`.
    /// They shift as records enter or leave the category, unlike ids.
    #[inline]
    pub fn get_in(&self, category: usize, position: usize) -> Option<&T> {
        let id = self.id_in(category, position)?;
        Some(&self.items[id.as_usize()])
    }

    /// Returns a mutable reference to the `position`th record of `category`.
    #[inline]
    pub fn get_in_mut(&mut self, category: usize, position: usize) -> Option<&mut T> {
        let id = self.id_in(category, position)?;
        Some(&mut self.items[id.as_usize()])
    }

    /// Returns the id stored at raw `position` in the partition.
    ///
    /// Positions at or past `len()` belong to the free pool; the ids
    /// found there are recycled ones that are not currently live.
    #[inline]
    pub fn id_at(&self, position: usize) -> Option<I> {
        self.ids.get(position).copied()
    }

    /// Returns the id of the `position`th record of `category`.
    #[inline]
    pub fn id_in(&self, category: usize, position: usize) -> Option<I> {
        if category >= self.categories || position >= self.counts[category] {
            return None;
        }
        Some(self.ids[self.offsets[category] + position])
    }

    /// Reassigns the record with `id` to `category`.
    ///
    /// The record's position is swapped across one partition boundary
    /// per category stepped over, so the cost is proportional to the
    /// distance between the old and new category. Reassigning to the
    /// current category is a no-op.
    pub fn set_category(&mut self, id: I, category: usize) -> Result<(), CategoryError> {
        if category >= self.categories {
            return Err(CategoryError::InvalidCategory {
                category,
                categories: self.categories,
            });
        }
        let raw = id.as_usize();
        if !self.is_live(raw) {
            return Err(CategoryError::InvalidId { id: raw });
        }

        let position = self.positions[raw];
        if self.category_at(position) < category {
            self.shift_up(position, category);
        } else {
            self.shift_down(position, category);
        }
        Ok(())
    }

    #[inline]
    fn is_live(&self, id: usize) -> bool {
        self.len > 0 && id < self.positions.len() && self.positions[id] < self.len
    }

    /// Category owning `position`: scan boundaries from category 0. O(C).
    fn category_at(&self, position: usize) -> usize {
        debug_assert!(position < self.ids.len());
        let mut rest = position;
        let mut category = 0;
        while rest >= self.counts[category] {
            rest -= self.counts[category];
            category += 1;
        }
        category
    }

    /// Walks `position` into the higher category `target`, one boundary
    /// swap per step. `target` may be the free pool (`categories`).
    fn shift_up(&mut self, position: usize, target: usize) {
        debug_assert!(target <= self.categories);
        let mut category = self.category_at(position);
        debug_assert!(category <= target);
        let mut position = position;
        let id = self.ids[position];
        while category < target {
            // Last position of the current category's range
            let boundary = self.offsets[category] + self.counts[category] - 1;
            if position != boundary {
                let displaced = self.ids[boundary];
                self.ids[boundary] = id;
                self.ids[position] = displaced;
                self.positions[id.as_usize()] = boundary;
                self.positions[displaced.as_usize()] = position;
                position = boundary;
            }
            self.counts[category] -= 1;
            self.counts[category + 1] += 1;
            self.offsets[category + 1] -= 1;
            category += 1;
        }
    }

    /// Walks `position` into the lower category `target`, one boundary
    /// swap per step. Mirror of `shift_up`.
    fn shift_down(&mut self, position: usize, target: usize) {
        let mut category = self.category_at(position);
        debug_assert!(category >= target);
        let mut position = position;
        let id = self.ids[position];
        while category > target {
            // First position of the current category's range
            let boundary = self.offsets[category];
            if position != boundary {
                let displaced = self.ids[boundary];
                self.ids[boundary] = id;
                self.ids[position] = displaced;
                self.positions[id.as_usize()] = boundary;
                self.positions[displaced.as_usize()] = position;
                position = boundary;
            }
            self.counts[category] -= 1;
            self.counts[category - 1] += 1;
            self.offsets[category] += 1;
            category -= 1;
        }
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<T: Default, I: Id> CategorySlab<T, I> {
    /// Inserts `value` into category 0, returning its id.
    ///
    /// Grows the backing storage if the free pool is exhausted. Which
    /// recycled id an insert receives is unspecified; only its validity
    /// is guaranteed.
    pub fn insert(&mut self, value: T) -> Result<I, InsertError<T>> {
        self.insert_into(value, 0)
    }

    /// Inserts `value` into `category`, returning its id.
    ///
    /// # Errors
    ///
    /// - [`InsertError::InvalidCategory`] if `category` does not exist.
    /// - [`InsertError::Full`] if the slab is at the id type's maximum
    ///   capacity and cannot grow. The slab is unchanged in both cases,
    ///   and the error hands the value back.
    pub fn insert_into(&mut self, value: T, category: usize) -> Result<I, InsertError<T>> {
        if category >= self.categories {
            return Err(InsertError::InvalidCategory(value));
        }
        if self.offsets[self.categories] >= self.items.len() && !self.grow() {
            return Err(InsertError::Full(value));
        }

        // Left-most free-pool position, then walk down into the category
        let position = self.offsets[self.categories];
        let id = self.ids[position];
        self.items[id.as_usize()] = value;
        self.shift_down(position, category);
        self.len += 1;
        self.note_inserted(id.as_usize());
        Ok(id)
    }

    /// Removes the record with `id`, returning its value.
    ///
    /// The slot is reset to `T::default()` and its position returns to
    /// the free pool for reuse by later inserts. Returns `None` if `id`
    /// is not live.
    pub fn remove(&mut self, id: I) -> Option<T> {
        let raw = id.as_usize();
        if !self.is_live(raw) {
            return None;
        }

        let value = mem::take(&mut self.items[raw]);
        self.shift_up(self.positions[raw], self.categories);
        self.len -= 1;

        if self.len == 0 {
            self.min_id = 0;
            self.max_id = 0;
        } else {
            if raw == self.min_id {
                self.refresh_min();
            }
            if raw == self.max_id {
                self.refresh_max();
            }
        }
        Some(value)
    }

    /// Changes the number of categories to `n`.
    ///
    /// When shrinking, live records of every category at or above `n - 1`
    /// are folded into category `n - 1` in one pass over the suffix of
    /// the partition. When growing, the new categories start empty.
    /// `n == 0` is a no-op.
    pub fn set_categories(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if self.len > 0 && n < self.categories {
            self.fold_into(n - 1);
        }

        let old = self.categories;
        let pool_count = self.counts[old];
        let pool_offset = self.offsets[old];
        self.counts.resize(n + 1, 0);
        self.offsets.resize(n + 1, pool_offset);
        if n > old {
            self.counts[old] = 0;
        }
        self.counts[n] = pool_count;
        self.offsets[n] = pool_offset;
        self.categories = n;
    }

    /// Removes all records, keeping the category count and capacity.
    pub fn clear(&mut self) {
        for item in &mut self.items {
            *item = T::default();
        }
        let capacity = self.items.len();
        for count in &mut self.counts {
            *count = 0;
        }
        for offset in &mut self.offsets {
            *offset = 0;
        }
        self.counts[self.categories] = capacity;
        for (position, id) in self.ids.iter_mut().enumerate() {
            *id = I::from_usize(position);
        }
        for (id, position) in self.positions.iter_mut().enumerate() {
            *position = id;
        }
        self.len = 0;
        self.min_id = 0;
        self.max_id = 0;
    }

    /// Enlarges the backing storage by `growth_factor`, capped at
    /// `max_capacity()`. Returns `false` if no larger capacity exists.
    ///
    /// New slots join the free pool with identity ids. The capacity
    /// check precedes all mutation, so a refused growth leaves the slab
    /// untouched.
    fn grow(&mut self) -> bool {
        let old = self.items.len();
        let new = old
            .max(1)
            .saturating_mul(self.growth_factor)
            .min(self.max_capacity());
        if new <= old {
            return false;
        }

        self.items.resize_with(new, T::default);
        self.ids.reserve(new - old);
        self.positions.reserve(new - old);
        for position in old..new {
            self.ids.push(I::from_usize(position));
            self.positions.push(position);
        }
        self.counts[self.categories] += new - old;
        true
    }

    /// Folds every live record of categories above `target` into `target`.
    fn fold_into(&mut self, target: usize) {
        if target + 1 >= self.categories {
            return;
        }
        // Snapshot the suffix: the walks below reorder it in place.
        let start = self.offsets[target + 1];
        let end = self.offsets[self.categories];
        let moved: Vec<I> = self.ids[start..end].to_vec();
        for id in moved {
            self.shift_down(self.positions[id.as_usize()], target);
        }
    }

    /// Extends the id range to cover a freshly inserted id.
    fn note_inserted(&mut self, id: usize) {
        if self.len == 1 {
            self.min_id = id;
            self.max_id = id;
        } else {
            self.min_id = self.min_id.min(id);
            self.max_id = self.max_id.max(id);
        }
    }

    /// Re-scans forward for the smallest live id. Only called non-empty.
    fn refresh_min(&mut self) {
        let mut id = self.min_id;
        while id < self.positions.len() && !self.is_live(id) {
            id += 1;
        }
        self.min_id = id;
    }

    /// Re-scans backward for the largest live id. Only called non-empty.
    fn refresh_max(&mut self) {
        let mut id = self.max_id;
        while id > 0 && !self.is_live(id) {
            id -= 1;
        }
        self.max_id = id;
    }
}

// =============================================================================
// Indexing
// =============================================================================

impl<T, I: Id> ops::Index<I> for CategorySlab<T, I> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `id` is not live. Use [`CategorySlab::get`] for a
    /// non-panicking lookup.
    fn index(&self, id: I) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("id {} is not live", id.as_usize()),
        }
    }
}

impl<T, I: Id> ops::IndexMut<I> for CategorySlab<T, I> {
    fn index_mut(&mut self, id: I) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("id {} is not live", id.as_usize()),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

impl<T, I: Id> CategorySlab<T, I> {
    /// Returns an iterator over `(id, &record)` in ascending id order.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            slab: self,
            front: self.min_id,
            back: if self.len > 0 { self.max_id + 1 } else { 0 },
            remaining: self.len,
        }
    }

    /// Returns an iterator over `(id, &mut record)` in ascending id order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, I> {
        IterMut {
            front: self.min_id,
            back: if self.len > 0 { self.max_id + 1 } else { 0 },
            remaining: self.len,
            slab: self,
        }
    }

    /// Returns an iterator over `(id, &record)` of one category, in the
    /// category's positional order.
    ///
    /// A category that does not exist yields nothing.
    pub fn category_iter(&self, category: usize) -> CategoryIter<'_, T, I> {
        let (front, back) = if category < self.categories {
            let start = self.offsets[category];
            (start, start + self.counts[category])
        } else {
            (0, 0)
        };
        CategoryIter {
            slab: self,
            front,
            back,
        }
    }
}

impl<'a, T, I: Id> IntoIterator for &'a CategorySlab<T, I> {
    type Item = (I, &'a T);
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, I: Id> IntoIterator for &'a mut CategorySlab<T, I> {
    type Item = (I, &'a mut T);
    type IntoIter = IterMut<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over `(id, &record)` in ascending id order.
///
/// Skips free-pool slots; the live count makes the length exact.
pub struct Iter<'a, T, I: Id> {
    slab: &'a CategorySlab<T, I>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T, I: Id> Iterator for Iter<'a, T, I> {
    type Item = (I, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // remaining > 0 guarantees a live id before `back`
        loop {
            let id = self.front;
            self.front += 1;
            if self.slab.is_live(id) {
                self.remaining -= 1;
                return Some((I::from_usize(id), &self.slab.items[id]));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: Id> DoubleEndedIterator for Iter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            self.back -= 1;
            if self.slab.is_live(self.back) {
                self.remaining -= 1;
                return Some((I::from_usize(self.back), &self.slab.items[self.back]));
            }
        }
    }
}

impl<T, I: Id> ExactSizeIterator for Iter<'_, T, I> {}
impl<T, I: Id> FusedIterator for Iter<'_, T, I> {}

/// Iterator over `(id, &mut record)` in ascending id order.
pub struct IterMut<'a, T, I: Id> {
    slab: &'a mut CategorySlab<T, I>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T, I: Id> Iterator for IterMut<'a, T, I> {
    type Item = (I, &'a mut T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let id = self.front;
            self.front += 1;
            if self.slab.is_live(id) {
                self.remaining -= 1;
                let item = &mut self.slab.items[id] as *mut T;
                // Extend lifetime - the pointer stays valid for 'a because the
                // iterator holds the slab's &'a mut borrow so the backing Vec
                // cannot move, and each id is yielded at most once
                return Some((I::from_usize(id), unsafe { &mut *item }));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: Id> DoubleEndedIterator for IterMut<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            self.back -= 1;
            if self.slab.is_live(self.back) {
                self.remaining -= 1;
                let id = self.back;
                let item = &mut self.slab.items[id] as *mut T;
                // Extend lifetime - the pointer stays valid for 'a because the
                // iterator holds the slab's &'a mut borrow so the backing Vec
                // cannot move, and each id is yielded at most once
                return Some((I::from_usize(id), unsafe { &mut *item }));
            }
        }
    }
}

impl<T, I: Id> ExactSizeIterator for IterMut<'_, T, I> {}
impl<T, I: Id> FusedIterator for IterMut<'_, T, I> {}

/// Iterator over `(id, &record)` of one category, in positional order.
pub struct CategoryIter<'a, T, I: Id> {
    slab: &'a CategorySlab<T, I>,
    front: usize,
    back: usize,
}

impl<'a, T, I: Id> Iterator for CategoryIter<'a, T, I> {
    type Item = (I, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let id = self.slab.ids[self.front];
        self.front += 1;
        Some((id, &self.slab.items[id.as_usize()]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, I: Id> DoubleEndedIterator for CategoryIter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let id = self.slab.ids[self.back];
        Some((id, &self.slab.items[id.as_usize()]))
    }
}

impl<T, I: Id> ExactSizeIterator for CategoryIter<'_, T, I> {}
impl<T, I: Id> FusedIterator for CategoryIter<'_, T, I> {}
