/// Creates a [`Set`](crate::Set) containing the provided items.
///
/// Items are inserted in the order given and duplicates collapse into one. All items must have the
/// same type.
///
/// # Examples
/// ```
/// # use getset::set;
/// // f32 isn't Hash, so store its bits instead.
/// let floats = set![1.0_f32.to_bits(), 2.5_f32.to_bits()];
/// let ints = set![-1, 0, 1, 3, 5];
/// let bools = set![true];
///
/// assert_eq!(floats.size(), 2);
/// assert_eq!(ints.size(), 5);
/// assert_eq!(bools.size(), 1);
///
/// let empty: getset::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Set::from([$($item),+])
    };
}
