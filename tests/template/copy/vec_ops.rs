use alloc_vec::{avec, AllocVec};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[mockalloc::test]
fn concrete_scenario() {
    new_vec!(mut vec);
    vec.push(10);
    vec.push(20);
    vec.push(30);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec[0], 10);
    assert_eq!(vec[1], 20);
    assert_eq!(vec[2], 30);
    assert!(vec.capacity() >= 4);

    vec.pop_back();
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.back(), Ok(20));

    let copy = vec.clone();
    assert_eq!(copy.len(), 2);
    assert_eq!(copy[0], 10);
    assert_eq!(copy[1], 20);
}

#[mockalloc::test]
fn extend_from_refs() {
    new_vec!(mut vec, cap(2));
    vec.extend(S!([1, 2, 3]).iter());
    assert_eq!(vec, S!([1, 2, 3]));
    assert_eq!(vec.capacity(), 4);
}

#[mockalloc::test]
fn extend_grows_amortized() {
    new_vec!(mut vec);
    for i in 0..32 {
        vec.extend(Some(i));
    }
    assert_eq!(vec.capacity(), 32);
    assert!(vec.iter().copied().eq(0..32));
}

#[mockalloc::test]
fn collect() {
    let vec: AllocVec<i32> = (0..5).collect();
    assert_eq!(vec, [0, 1, 2, 3, 4]);
}

#[mockalloc::test]
fn macro_repeat() {
    let vec: AllocVec<i32> = avec![7; 3];
    assert_eq!(vec, [7, 7, 7]);
    assert_eq!(vec.capacity(), 3);

    let empty: AllocVec<i32> = avec![];
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[mockalloc::test]
fn compare_and_hash() {
    let a: AllocVec<i32> = avec![1, 2, 3];
    let b: AllocVec<i32> = avec![1, 2, 4];
    assert!(a < b);
    assert_eq!(a, a.clone());
    assert_eq!(a, vec![1, 2, 3]);

    let hash = |v: &AllocVec<i32>| {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&a), hash(&a.clone()));
}

#[mockalloc::test]
fn slice_access() {
    new_vec!(mut vec);
    vec.extend(S!([3, 1, 2]));
    vec.sort_unstable();
    assert_eq!(&vec[1..], &[2, 3]);
    assert_eq!(vec.first(), Some(&1));
    assert_eq!(format!("{:?}", vec), "[1, 2, 3]");
}

#[mockalloc::test]
fn iterate_by_ref() {
    new_vec!(mut vec);
    vec.extend(S!([1, 2, 3]));
    for x in &mut vec {
        *x *= 2;
    }
    let total: i32 = (&vec).into_iter().sum();
    assert_eq!(total, 12);
}
