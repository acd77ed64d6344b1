#[mockalloc::test]
fn post_increment() {
    new_vec!(mut vec);
    vec.extend(S!([1, 2, 3]));

    let (mut cursor, _) = vec.cursors();
    let old = cursor.post_inc();
    assert_eq!(old.position(), 0);
    assert_eq!(cursor.position(), 1);
    assert_ne!(old, cursor);
    assert_eq!(unsafe { *old.get() }, 1);
    assert_eq!(unsafe { *cursor.get() }, 2);
}

#[mockalloc::test]
fn post_decrement() {
    new_vec!(mut vec);
    vec.extend(S!([1, 2, 3]));

    let (_, mut cursor) = vec.cursors();
    let old = cursor.post_dec();
    assert_eq!(old.position(), 3);
    assert_eq!(unsafe { *cursor.get() }, 3);
}

#[mockalloc::test]
fn pre_increment_chains() {
    new_vec!(mut vec);
    vec.extend(S!([1, 2, 3]));

    let (mut cursor, end) = vec.cursors();
    cursor.inc().inc().inc();
    assert_eq!(cursor, end);
    cursor.dec().dec();
    assert_eq!(unsafe { *cursor.get() }, 2);
}

#[mockalloc::test]
fn sum_with_cursors() {
    new_vec!(mut vec);
    vec.extend(1..=10);

    let (mut cursor, end) = vec.cursors();
    let mut sum = 0;
    while cursor != end {
        sum += unsafe { *cursor.post_inc().get() };
    }
    assert_eq!(sum, 55);
}

#[mockalloc::test]
fn storage_less_cursors_share_a_base() {
    new_vec!(mut a, cap(0));
    new_vec!(mut b, cap(0));

    let (begin, end) = a.cursors();
    assert_eq!(begin, end);
    assert_eq!(a.begin(), b.begin());

    b.push(1);
    assert_ne!(a.begin(), b.begin());
}
