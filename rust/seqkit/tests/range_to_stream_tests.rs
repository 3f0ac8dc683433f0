use num_bigint::BigInt;
use seqkit::ranges::{BigIntRange, Int32Range, MaterializedRange, Narrowing, Uint8Range};
use seqkit::stream::stream;
use seqkit::{ErrorKind, Stream};

#[test]
fn test_range_values_feed_a_stream() {
    let range = Int32Range::new(1, 11).unwrap();
    let evens = Stream::from(range.values()).filter(|x| x % 2 == 0);
    assert_eq!(evens.values(), &[2, 4, 6, 8, 10]);
    assert_eq!(Stream::of(range).take_last(3).values(), &[8, 9, 10]);
}

#[test]
fn test_wrapped_range_through_stream() {
    let range = Uint8Range::from_host(250, 260, Narrowing::Wrapping).unwrap();
    let s = Stream::of(range.iter());
    assert_eq!(s.drop_while(|x| *x >= 250).values(), &[0, 1, 2, 3]);
    assert_eq!(s.take_while(|x| *x >= 250).len(), 6);
}

#[test]
fn test_big_int_stream() {
    let base = BigInt::from(u64::MAX);
    let range = BigIntRange::new(base.clone(), &base + 5).unwrap();
    let s = Stream::of(range);
    assert_eq!(s.len(), 5);
    assert_eq!(s.last(|_| true), Some(&(&base + 4)));
    assert!(s.contains(&(&base + 2)));
}

#[test]
fn test_generic_over_range_kind() {
    fn sum_len<R: MaterializedRange>(ranges: &[R]) -> usize {
        ranges.iter().map(|r| r.len()).sum()
    }

    let fixed = [Int32Range::new(0, 3).unwrap(), Int32Range::new(5, 6).unwrap()];
    assert_eq!(sum_len(&fixed), 4);
    let big = [BigIntRange::new(0, 100).unwrap()];
    assert_eq!(sum_len(&big), 100);
}

#[test]
fn test_errors_share_one_type() {
    let errors: Vec<seqkit::Error> = vec![
        Int32Range::new(3, 1).unwrap_err(),
        stream![1, 2].remove_index(9).unwrap_err(),
        stream![1].random().unwrap_err(),
    ];
    assert!(matches!(errors[0].kind(), ErrorKind::InvalidBound { .. }));
    assert!(matches!(errors[1].kind(), ErrorKind::IndexOutOfRange { .. }));
    assert!(matches!(
        errors[2].kind(),
        ErrorKind::InsufficientElements { .. }
    ));
}
