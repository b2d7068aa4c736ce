/// Build a [`Vector`](crate::Vector) from a list of elements or a
/// repeated value.
///
/// ```
/// use keel_vector::{vector, Vector};
///
/// let v: Vector<i32> = vector![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let ones = vector![1u8; 10];
/// assert_eq!(ones.len(), 10);
///
/// let empty: Vector<u8> = vector![];
/// assert!(empty.as_ptr().is_null());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Vector;

    #[test]
    fn list_form_sizes_exactly() {
        let v = vector![String::from("x"), String::from("y")];
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn repeat_form() {
        let v: Vector<char> = vector!['z'; 4];
        assert_eq!(v, ['z', 'z', 'z', 'z']);
    }
}
