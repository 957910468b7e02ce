/// Exchanges the values behind `a` and `b`.
pub fn swap_two_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// Returns the position of the first element equal to `value_to_find`.
pub fn find_index<T: PartialEq>(value_to_find: &T, array: &[T]) -> Option<usize> {
    array.iter().position(|value| value == value_to_find)
}
