//! Borrow and iterator liveness tracking.
//!
//! Every owning container pairs its storage with a [`Leases`] tracker: a
//! shared tally of the views and iterators currently lent out over that
//! storage. Borrowers hold a [`Lease`] or [`LeaseMut`] handle that keeps the
//! tally raised for the handle's lifetime; the owner checks the tally is zero
//! before any structural mutation, and panics otherwise. The tally is the
//! sole runtime mechanism preventing iterator invalidation for handles that
//! outlive a static borrow.
//!
//! Shared and mutable leases are tallied separately, so that a mutable lease
//! is provably exclusive, but the gate every mutator consults is the combined
//! count: any live lease of either kind blocks structural mutation.
//!
//! The tally cell is independently heap-allocated, so its address is stable
//! across moves of the owner; lease handles stay valid wherever the owner
//! struct itself goes. Counts are plain `Cell`s with no atomicity; trackers
//! and their handles are single-threaded by construction.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt::{self, Debug, Formatter};
use core::mem;

/// Shared lease tally cell.
struct LeaseStatus {
    /// Number of live shared leases.
    refs: Cell<usize>,
    /// Number of live mutable leases; zero or one.
    muts: Cell<usize>,
}

/// Owner-side tracker of the leases lent out over one container's storage.
pub struct Leases {
    status: Rc<LeaseStatus>,
}

/// Shared borrower handle; keeps its tracker's shared tally raised until
/// dropped.
pub struct Lease {
    status: Rc<LeaseStatus>,
}

/// Exclusive borrower handle; keeps its tracker's mutable tally raised until
/// dropped.
pub struct LeaseMut {
    status: Rc<LeaseStatus>,
}

impl Leases {
    /// Returns a fresh tracker with no outstanding leases.
    pub fn new() -> Leases {
        Leases {
            status: Rc::new(LeaseStatus {
                refs: Cell::new(0),
                muts: Cell::new(0),
            }),
        }
    }

    /// Returns the number of live shared leases.
    #[inline]
    pub fn refs(&self) -> usize {
        self.status.refs.get()
    }

    /// Returns the number of live mutable leases.
    #[inline]
    pub fn muts(&self) -> usize {
        self.status.muts.get()
    }

    /// Returns the total number of live leases of either kind. This is the
    /// count every structural mutator gates on.
    #[inline]
    pub fn count(&self) -> usize {
        self.status.refs.get().wrapping_add(self.status.muts.get())
    }

    /// Produces a shared lease over the tracked storage.
    ///
    /// # Panics
    ///
    /// Panics if a mutable lease is live.
    pub fn lend(&self) -> Lease {
        if self.status.muts.get() != 0 {
            panic!("lease while a mutable lease is live");
        }
        self.status.refs.set(self.status.refs.get() + 1);
        Lease { status: self.status.clone() }
    }

    /// Produces a mutable lease over the tracked storage.
    ///
    /// # Panics
    ///
    /// Panics unless no lease of any kind is live.
    pub fn lend_mut(&self) -> LeaseMut {
        self.assert_unleased("mutable lease");
        self.status.muts.set(1);
        LeaseMut { status: self.status.clone() }
    }

    /// Transfers the tracker to a new owner, leaving a fresh tracker behind.
    ///
    /// # Panics
    ///
    /// Panics if any lease is live: outstanding handles reference this
    /// tracker, and handing it to a new owner would detach them from the
    /// storage they guard.
    pub fn take(&mut self) -> Leases {
        self.assert_unleased("take");
        mem::replace(self, Leases::new())
    }

    /// Asserts that no lease of any kind is live, panicking with the name of
    /// the gated operation otherwise. Called by the owner ahead of every
    /// structural mutation.
    #[inline]
    pub fn assert_unleased(&self, op: &str) {
        let count = self.count();
        if count != 0 {
            panic!("{} while {} leases are live", op, count);
        }
    }

    /// Asserts that no mutable lease is live, panicking with the name of the
    /// gated operation otherwise. Called by the owner ahead of shared element
    /// access.
    #[inline]
    pub fn assert_unaliased(&self, op: &str) {
        if self.status.muts.get() != 0 {
            panic!("{} while a mutable lease is live", op);
        }
    }
}

impl Default for Leases {
    fn default() -> Leases {
        Leases::new()
    }
}

impl Debug for Leases {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leases")
            .field("refs", &self.refs())
            .field("muts", &self.muts())
            .finish()
    }
}

impl Clone for Lease {
    fn clone(&self) -> Lease {
        self.status.refs.set(self.status.refs.get() + 1);
        Lease { status: self.status.clone() }
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.status.refs.set(self.status.refs.get().wrapping_sub(1));
    }
}

impl Debug for Lease {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease").field("refs", &self.status.refs.get()).finish()
    }
}

impl Drop for LeaseMut {
    fn drop(&mut self) {
        self.status.muts.set(0);
    }
}

impl Debug for LeaseMut {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeaseMut").finish()
    }
}
