/// Returns `value` if it does not exceed `maximum`, or `maximum` otherwise.
#[inline]
pub fn coerce_at_most<T: PartialOrd>(value: T, maximum: T) -> T {
    if value > maximum { maximum } else { value }
}

#[cfg(test)]
mod tests {
    use super::coerce_at_most;

    #[test]
    fn test_coerce_at_most() {
        assert_eq!(coerce_at_most(3usize, 5), 3);
        assert_eq!(coerce_at_most(5usize, 5), 5);
        assert_eq!(coerce_at_most(9usize, 5), 5);
        assert_eq!(coerce_at_most(-4i64, -7), -7);
    }
}
