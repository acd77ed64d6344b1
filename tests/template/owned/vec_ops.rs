use alloc_vec::Error;

#[mockalloc::test]
fn push_doubles_capacity() {
    new_vec!(mut vec);
    assert_eq!(vec.capacity(), 1);

    vec.push(S!(10));
    assert!(vec.is_full());
    vec.push(S!(20));
    assert_eq!(vec.capacity(), 2);
    vec.push(S!(30));
    assert_eq!(vec.capacity(), 4);

    assert_eq!(vec.len(), 3);
    assert_eq!(vec, S!([10, 20, 30]));
}

#[mockalloc::test]
fn push_pop_copy() {
    new_vec!(mut vec);
    vec.push(S!(10));
    vec.push(S!(20));
    vec.push(S!(30));

    assert_eq!(vec.at(0), Ok(&S!(10)));
    assert_eq!(vec.at(1), Ok(&S!(20)));
    assert_eq!(vec.at(2), Ok(&S!(30)));

    vec.pop_back();
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.back(), Ok(S!(20)));

    let copy = vec.clone();
    assert_eq!(copy.len(), 2);
    assert_eq!(copy, S!([10, 20]));
    assert_eq!(copy.capacity(), vec.capacity());
}

#[mockalloc::test]
fn zero_capacity() {
    new_vec!(mut vec, cap(0));
    assert_eq!(vec.capacity(), 0);
    assert!(vec.is_empty());
    assert!(vec.is_full());

    vec.push(S!(1));
    assert_eq!(vec.capacity(), 1);
    assert_eq!(vec, S!([1]));
}

#[mockalloc::test]
fn at_out_of_range() {
    new_vec!(mut vec, cap(4));
    assert_eq!(vec.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));

    vec.push(S!(0));
    vec.push(S!(1));
    assert_eq!(vec.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    assert_eq!(vec.at(usize::MAX), Err(Error::OutOfRange { index: usize::MAX, len: 2 }));
    assert!(vec.at_mut(2).is_err());

    vec.at_mut(1).unwrap().push('1');
    assert_eq!(vec, S!(["0", "11"]));
}

#[test]
#[should_panic]
fn index_out_of_range_panics() {
    let vec = alloc_vec::AllocVec::<String>::with_capacity(4);
    let _ = &vec[0];
}

#[mockalloc::test]
fn front_back_are_copies() {
    new_vec!(mut vec);
    vec.push(S!("a"));
    vec.push(S!("b"));

    let mut front = vec.front().unwrap();
    front.push('!');
    assert_eq!(front, "a!");
    assert_eq!(vec.front(), Ok(S!("a")));
    assert_eq!(vec.back(), Ok(S!("b")));
}

#[mockalloc::test]
fn front_back_empty() {
    new_vec!(mut vec);
    assert_eq!(vec.front(), Err(Error::OutOfRange { index: 0, len: 0 }));
    assert_eq!(vec.back(), Err(Error::OutOfRange { index: 0, len: 0 }));

    vec.push(S!(1));
    vec.pop_back();
    assert!(vec.front().is_err());
    assert!(vec.back().is_err());
}

#[mockalloc::test]
fn pop_back_empty_is_noop() {
    new_vec!(mut vec);
    vec.pop_back();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 1);
}

#[mockalloc::test]
fn pop_back_keeps_capacity() {
    new_vec!(mut vec, cap(2));
    vec.push(S!(0));
    vec.push(S!(1));
    vec.push(S!(2));
    assert_eq!(vec.capacity(), 4);

    vec.pop_back();
    vec.pop_back();
    vec.pop_back();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 4);
}

#[mockalloc::test]
fn pop() {
    new_vec!(mut vec);
    vec.push(S!(0));
    vec.push(S!(1));
    assert_eq!(vec.pop(), Some(S!(1)));
    assert_eq!(vec.pop(), Some(S!(0)));
    assert_eq!(vec.pop(), None);
}

#[mockalloc::test]
fn emplace_back_with() {
    new_vec!(mut vec);
    let value = vec.emplace_back_with(|| "x".repeat(3));
    value.push('y');
    vec.emplace_back_with(String::new);
    assert_eq!(vec, S!(["xxxy", ""]));
}

#[mockalloc::test]
fn reserve() {
    new_vec!(mut vec);
    vec.push(S!(0));

    vec.reserve(10);
    assert_eq!(vec.capacity(), 10);
    assert_eq!(vec, S!([0]));

    vec.reserve(5);
    assert_eq!(vec.capacity(), 10);

    vec.reserve(11);
    assert_eq!(vec.capacity(), 11);
    assert_eq!(vec.len(), 1);
}

#[mockalloc::test]
fn clear_keeps_capacity() {
    new_vec!(mut vec, cap(3));
    vec.extend((0..3).map(|x| S!(x)));
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 3);
}

#[mockalloc::test]
fn into_iter() {
    new_vec!(mut vec);
    vec.extend((0..6).map(|x| S!(x)));

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.next(), Some(S!(0)));
    assert_eq!(iter.next_back(), Some(S!(5)));
    assert_eq!(iter.as_slice(), S!([1, 2, 3, 4]));
}
