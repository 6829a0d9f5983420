extern crate lent_mem;

use lent_mem::lease::Leases;
use lent_mem::vec::Vec;

#[test]
fn test_tracker_counts() {
    let leases = Leases::new();
    assert_eq!(leases.count(), 0);
    let a = leases.lend();
    let b = leases.lend();
    assert_eq!(leases.refs(), 2);
    assert_eq!(leases.muts(), 0);
    assert_eq!(leases.count(), 2);
    let c = a.clone();
    assert_eq!(leases.refs(), 3);
    drop(a);
    drop(b);
    assert_eq!(leases.refs(), 1);
    drop(c);
    assert_eq!(leases.count(), 0);
}

#[test]
fn test_tracker_exclusive() {
    let leases = Leases::new();
    {
        let _m = leases.lend_mut();
        assert_eq!(leases.muts(), 1);
        assert_eq!(leases.count(), 1);
    }
    assert_eq!(leases.muts(), 0);
    let _r = leases.lend();
    assert_eq!(leases.count(), 1);
}

#[test]
#[should_panic(expected = "mutable lease while 1 leases are live")]
fn test_tracker_no_exclusive_while_shared() {
    let leases = Leases::new();
    let _r = leases.lend();
    let _m = leases.lend_mut();
}

#[test]
#[should_panic(expected = "lease while a mutable lease is live")]
fn test_tracker_no_shared_while_exclusive() {
    let leases = Leases::new();
    let _m = leases.lend_mut();
    let _r = leases.lend();
}

#[test]
fn test_lend_reads_values() {
    let mut xs = Vec::from([1u32, 2, 3]);
    xs.push(4);
    let lent = xs.lend();
    assert_eq!(xs.lease_count(), 1);
    assert_eq!(lent.len(), 4);
    assert_eq!(lent[2], 3);
    assert_eq!(lent.get(4), None);
    assert_eq!(lent.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_lend_survives_owner_move() {
    let mut xs = Vec::from([1u32, 2, 3]);
    let lent = xs.lend();
    // The handle is not tied to the owner's location.
    let moved = Box::new(xs);
    assert_eq!(lent.as_slice(), &[1, 2, 3]);
    drop(lent);
    let mut xs = *moved;
    xs.push(4);
    assert_eq!(xs.len(), 4);
}

#[test]
fn test_mutation_allowed_after_release() {
    let mut xs = Vec::from([1u32, 2]);
    let lent = xs.lend();
    assert_eq!(xs.lease_count(), 1);
    drop(lent);
    assert_eq!(xs.lease_count(), 0);
    xs.push(3);
    assert_eq!(xs.as_slice(), &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "push while 1 leases are live")]
fn test_push_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.push(3);
}

#[test]
#[should_panic(expected = "push while 2 leases are live")]
fn test_push_refused_while_lent_twice() {
    let mut xs = Vec::from([1u32, 2]);
    let lent = xs.lend();
    let _again = lent.clone();
    drop(lent);
    let _other = xs.lend();
    xs.push(3);
}

#[test]
#[should_panic(expected = "pop while 1 leases are live")]
fn test_pop_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.pop();
}

#[test]
#[should_panic(expected = "reserve while 1 leases are live")]
fn test_reserve_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    // Growing would free the block the handle points into.
    xs.reserve(1000);
}

#[test]
#[should_panic(expected = "reserve_exact while 1 leases are live")]
fn test_reserve_exact_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.reserve_exact(1000);
}

#[test]
#[should_panic(expected = "grow_to_exact while 1 leases are live")]
fn test_grow_to_exact_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.grow_to_exact(1000);
}

#[test]
fn test_reserve_allowed_after_release() {
    let mut xs = Vec::from([1u32, 2]);
    let lent = xs.lend();
    assert_eq!(lent.as_slice(), &[1, 2]);
    drop(lent);
    xs.reserve(1000);
    assert!(xs.capacity() >= 1002);
    assert_eq!(xs.as_slice(), &[1, 2]);
}

#[test]
#[should_panic(expected = "clear while 1 leases are live")]
fn test_clear_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.clear();
}

#[test]
#[should_panic(expected = "truncate while 1 leases are live")]
fn test_truncate_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    xs.truncate(1);
}

#[test]
#[should_panic(expected = "as_mut_slice while 1 leases are live")]
fn test_mut_slice_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    let _ = xs.as_mut_slice();
}

#[test]
#[should_panic(expected = "drain while 1 leases are live")]
fn test_drain_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    let _ = xs.drain(..);
}

#[test]
#[should_panic(expected = "drop while 1 leases are live")]
fn test_drop_refused_while_lent() {
    let xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    drop(xs);
}

#[test]
#[should_panic(expected = "take while 1 leases are live")]
fn test_take_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    let _ = xs.take();
}

#[test]
#[should_panic(expected = "into_iter while 1 leases are live")]
fn test_into_iter_refused_while_lent() {
    let xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    let _ = xs.into_iter();
}

#[test]
fn test_lend_mut_writes_values() {
    let mut xs = Vec::from([1u32, 2, 3]);
    {
        let mut lent = xs.lend_mut();
        assert_eq!(xs.lease_count(), 1);
        lent[0] = 10;
        *lent.get_mut(2).unwrap() = 30;
        for x in lent.iter_mut() {
            *x += 1;
        }
    }
    assert_eq!(xs.lease_count(), 0);
    assert_eq!(xs.as_slice(), &[11, 3, 31]);
}

#[test]
#[should_panic(expected = "get while a mutable lease is live")]
fn test_read_refused_while_lent_mut() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend_mut();
    let _ = xs.get(0);
}

#[test]
#[should_panic(expected = "mutable lease while 1 leases are live")]
fn test_lend_mut_refused_while_lent() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend();
    let _ = xs.lend_mut();
}

#[test]
#[should_panic(expected = "lease while a mutable lease is live")]
fn test_lend_refused_while_lent_mut() {
    let mut xs = Vec::from([1u32, 2]);
    let _lent = xs.lend_mut();
    let _ = xs.lend();
}

#[test]
fn test_cursor_from_handle_takes_its_own_lease() {
    let mut xs = Vec::from([1u32, 2, 3]);
    let lent = xs.lend();
    {
        let cursor = lent.iter();
        assert_eq!(xs.lease_count(), 2);
        assert_eq!(cursor.sum::<u32>(), 6);
    }
    assert_eq!(xs.lease_count(), 1);
    drop(lent);
    assert_eq!(xs.lease_count(), 0);
    xs.push(4);
}

#[test]
fn test_cursor_from_owner_raises_count() {
    let mut xs = Vec::from([1u32, 2, 3]);
    {
        let mut cursor = xs.iter();
        assert_eq!(xs.lease_count(), 1);
        assert_eq!(cursor.next(), Some(&1));
        let other = cursor.clone();
        assert_eq!(xs.lease_count(), 2);
        assert_eq!(other.count(), 2);
        assert_eq!(xs.lease_count(), 1);
    }
    assert_eq!(xs.lease_count(), 0);
    xs.push(4);
}

#[test]
fn test_release_reports_length() {
    let mut xs = Vec::from([1u32, 2, 3]);
    let lent = xs.lend_mut();
    assert_eq!(lent.release(), 3);
    assert_eq!(xs.lease_count(), 0);
}
