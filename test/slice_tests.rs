extern crate lent_mem;

use rstest::rstest;

use lent_mem::slice::{Slice, SliceMut};

fn pieces<'a>(parts: impl Iterator<Item = Slice<'a, i32>>) -> Vec<Vec<i32>> {
    parts.map(|p| p.as_slice().to_vec()).collect()
}

static DATA: [i32; 7] = [1, 0, 2, 3, 0, 0, 4];

#[test]
fn test_from_slice() {
    let xs = Slice::from(&DATA[..]);
    assert_eq!(xs.len(), 7);
    assert!(!xs.is_empty());
    assert_eq!(xs.get(0), Some(&1));
    assert_eq!(xs.get(6), Some(&4));
    assert_eq!(xs.get(7), None);
    assert_eq!(xs[2], 2);
    assert_eq!(xs.as_slice(), &DATA[..]);
}

#[test]
fn test_empty() {
    let xs = Slice::<i32>::empty();
    assert_eq!(xs.len(), 0);
    assert!(xs.is_empty());
    assert_eq!(xs.get(0), None);
    assert_eq!(xs.iter().next(), None);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 7 but the index is 9")]
fn test_index_out_of_bounds() {
    let xs = Slice::from(&DATA[..]);
    let _ = xs[9];
}

#[rstest(start, end,
    case(0, 7),
    case(2, 5),
    case(3, 3),
    case(7, 7)
)]
fn test_subrange(start: usize, end: usize) {
    let xs = Slice::from(&DATA[..]);
    let sub = xs.slice(start..end);
    assert_eq!(sub.len(), end - start);
    assert_eq!(sub.as_slice(), &DATA[start..end]);
}

#[test]
fn test_subrange_forms() {
    let xs = Slice::from(&DATA[..]);
    assert_eq!(xs.slice(..).as_slice(), &DATA[..]);
    assert_eq!(xs.slice(2..).as_slice(), &DATA[2..]);
    assert_eq!(xs.slice(..3).as_slice(), &DATA[..3]);
    assert_eq!(xs.slice(1..=4).as_slice(), &DATA[1..=4]);
}

#[test]
#[should_panic(expected = "slice index starts at 4 but ends at 2")]
fn test_subrange_reversed() {
    let xs = Slice::from(&DATA[..]);
    let _ = xs.slice(4..2);
}

#[test]
#[should_panic(expected = "range end index 9 out of range for slice of length 7")]
fn test_subrange_out_of_range() {
    let xs = Slice::from(&DATA[..]);
    let _ = xs.slice(3..9);
}

#[test]
fn test_iter_both_ends() {
    let xs = Slice::from(&DATA[..]);
    let mut it = xs.iter();
    assert_eq!(it.len(), 7);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&4));
    assert_eq!(it.len(), 5);
    assert_eq!(it.as_slice(), &DATA[1..6]);
    assert_eq!(it.rev().copied().collect::<Vec<_>>(), [0, 0, 3, 2, 0]);
}

#[rstest(input, expected,
    case(&[1, 0, 2, 3, 0, 0, 4][..], vec![vec![1], vec![2, 3], vec![], vec![4]]),
    case(&[1, 2, 3][..], vec![vec![1, 2, 3]]),
    case(&[0, 0][..], vec![vec![], vec![], vec![]]),
    case(&[0][..], vec![vec![], vec![]]),
    case(&[][..], vec![vec![]])
)]
fn test_split(input: &'static [i32], expected: Vec<Vec<i32>>) {
    let xs = Slice::from(input);
    assert_eq!(pieces(xs.split(|x| *x == 0)), expected);
}

#[rstest(input, expected,
    case(&[1, 0, 2, 3, 0, 0, 4][..], vec![vec![1, 0], vec![2, 3, 0], vec![0], vec![4]]),
    case(&[1, 2, 0][..], vec![vec![1, 2, 0]]),
    case(&[1, 2, 3][..], vec![vec![1, 2, 3]]),
    case(&[][..], vec![])
)]
fn test_split_inclusive(input: &'static [i32], expected: Vec<Vec<i32>>) {
    let xs = Slice::from(input);
    assert_eq!(pieces(xs.split_inclusive(|x| *x == 0)), expected);
}

#[rstest(input, expected,
    case(&[1, 0, 2, 3, 0, 0, 4][..], vec![vec![4], vec![], vec![2, 3], vec![1]]),
    case(&[1, 2, 3][..], vec![vec![1, 2, 3]]),
    case(&[0][..], vec![vec![], vec![]])
)]
fn test_rsplit(input: &'static [i32], expected: Vec<Vec<i32>>) {
    let xs = Slice::from(input);
    assert_eq!(pieces(xs.rsplit(|x| *x == 0)), expected);
}

#[rstest(n, expected,
    case(0, vec![]),
    case(1, vec![vec![1, 0, 2, 3, 0, 0, 4]]),
    case(2, vec![vec![1], vec![2, 3, 0, 0, 4]]),
    case(3, vec![vec![1], vec![2, 3], vec![0, 4]]),
    case(9, vec![vec![1], vec![2, 3], vec![], vec![4]])
)]
fn test_splitn(n: usize, expected: Vec<Vec<i32>>) {
    let xs = Slice::from(&DATA[..]);
    assert_eq!(pieces(xs.splitn(n, |x| *x == 0)), expected);
}

#[test]
fn test_split_size_hint() {
    let xs = Slice::from(&DATA[..]);
    let mut parts = xs.split(|x| *x == 0);
    assert_eq!(parts.size_hint(), (1, Some(8)));
    while parts.next().is_some() {}
    assert_eq!(parts.size_hint(), (0, Some(0)));
}

#[test]
fn test_windows() {
    let xs = Slice::from(&[1, 2, 3, 4, 5][..]);
    let windows: Vec<Vec<i32>> = xs.windows(3).map(|w| w.as_slice().to_vec()).collect();
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    assert_eq!(xs.windows(3).len(), 3);
    assert_eq!(xs.windows(5).count(), 1);
    assert_eq!(xs.windows(6).count(), 0);
}

#[test]
fn test_windows_back_to_front() {
    let xs = Slice::from(&[1, 2, 3, 4][..]);
    let mut windows = xs.windows(2);
    assert_eq!(windows.next_back().unwrap().as_slice(), &[3, 4]);
    assert_eq!(windows.next().unwrap().as_slice(), &[1, 2]);
    assert_eq!(windows.next_back().unwrap().as_slice(), &[2, 3]);
    assert!(windows.next().is_none());
}

#[test]
#[should_panic(expected = "window size must be non-zero")]
fn test_windows_zero_size() {
    let xs = Slice::from(&DATA[..]);
    let _ = xs.windows(0);
}

#[test]
fn test_chunks() {
    let xs = Slice::from(&[1, 2, 3, 4, 5][..]);
    let chunks: Vec<Vec<i32>> = xs.chunks(2).map(|c| c.as_slice().to_vec()).collect();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(xs.chunks(2).len(), 3);
    assert_eq!(xs.chunks(5).count(), 1);
    assert_eq!(xs.chunks(9).count(), 1);
}

#[test]
fn test_chunks_back_to_front() {
    let xs = Slice::from(&[1, 2, 3, 4, 5][..]);
    let mut chunks = xs.chunks(2);
    assert_eq!(chunks.next_back().unwrap().as_slice(), &[5]);
    assert_eq!(chunks.next_back().unwrap().as_slice(), &[3, 4]);
    assert_eq!(chunks.next().unwrap().as_slice(), &[1, 2]);
    assert!(chunks.next().is_none());
}

#[test]
#[should_panic(expected = "chunk size must be non-zero")]
fn test_chunks_zero_size() {
    let xs = Slice::from(&DATA[..]);
    let _ = xs.chunks(0);
}

#[test]
fn test_copy_and_eq() {
    let xs = Slice::from(&DATA[..]);
    let ys = xs;
    assert_eq!(xs, ys);
    assert_eq!(xs.len(), 7);
    assert_ne!(xs.slice(..3), xs.slice(4..));
}

#[test]
fn test_debug_format() {
    let xs = Slice::from(&[1, 2, 3][..]);
    assert_eq!(format!("{:?}", xs), "[1, 2, 3]");
    assert_eq!(format!("{:?}", xs.iter()), "Iter([1, 2, 3])");
}

#[test]
fn test_mut_view_writes() {
    let mut data = [1, 2, 3, 4];
    let mut xs = SliceMut::from(&mut data[..]);
    xs[0] = 10;
    *xs.get_mut(3).unwrap() = 40;
    assert_eq!(xs.get_mut(4), None);
    for x in xs.iter_mut() {
        *x += 1;
    }
    assert_eq!(xs.as_slice(), &[11, 3, 4, 41]);
    assert_eq!(data, [11, 3, 4, 41]);
}

#[test]
fn test_mut_view_subrange() {
    let mut data = [1, 2, 3, 4, 5];
    let mut xs = SliceMut::from(&mut data[..]);
    {
        let mut mid = xs.slice_mut(1..4);
        assert_eq!(mid.len(), 3);
        for x in mid.iter_mut() {
            *x = 0;
        }
    }
    assert_eq!(xs.as_slice(), &[1, 0, 0, 0, 5]);
}

#[test]
fn test_mut_view_reborrows_read_only() {
    let mut data = [3, 0, 4];
    let xs = SliceMut::from(&mut data[..]);
    let read = xs.as_ref();
    assert_eq!(pieces(read.split(|x| *x == 0)), vec![vec![3], vec![4]]);
}
