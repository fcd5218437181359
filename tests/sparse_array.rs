use sparse_chunked::{OffsetAccess, SparseArray, SparseArrayError};

fn fruit_basket(chunk_size: usize) -> SparseArray<&'static str> {
    let mut array = SparseArray::with_chunk_size(chunk_size).unwrap();
    array.set(0, "banana").unwrap();
    array.set(11, "apple").unwrap();
    array.set(44, "grapes").unwrap();
    array.set(1, "kiwi").unwrap();
    array.set(11, "pears").unwrap();
    array.set(1000, "watermelon").unwrap();
    array.remove(44).unwrap();
    array
}

#[test]
fn fruit_basket_with_chunks_of_five() {
    let array = fruit_basket(5);
    assert_eq!(array.len(), 4);
    // Keys 0, 2 and 200 stay; key 8 was freed with offset 44.
    assert_eq!(array.capacity(), 15);

    let items: Vec<_> = array.iter().map(|(offset, value)| (offset, *value)).collect();
    assert_eq!(
        items,
        vec![(0, "banana"), (1, "kiwi"), (11, "pears"), (1000, "watermelon")]
    );
}

#[test]
fn fruit_basket_with_default_chunks() {
    let mut array = SparseArray::new();
    array.set(0, "banana").unwrap();
    array.set(11, "apple").unwrap();
    array.set(44, "grapes").unwrap();
    assert_eq!(array.capacity(), 30);
    array.set(1, "kiwi").unwrap();
    array.set(11, "pears").unwrap();
    array.set(1000, "watermelon").unwrap();
    assert_eq!(array.capacity(), 40);

    array.remove(44).unwrap();
    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 30);
    assert_eq!(fruit_basket(10).capacity(), 30);
}

#[test]
fn reading_untouched_offset_is_absent_not_an_error() {
    let array: SparseArray<String> = SparseArray::new();
    assert_eq!(array.get(999).unwrap(), None);
    assert!(!array.exists(999));
}

#[test]
fn setting_absent_marker_hides_value_but_keeps_length() {
    let mut array: SparseArray<&str> = SparseArray::with_chunk_size(5).unwrap();
    array.set(5, "x").unwrap();
    assert!(array.exists(5));
    assert_eq!(array.len(), 1);

    array.set(5, None).unwrap();
    assert!(!array.exists(5));
    assert_eq!(array.get(5).unwrap(), None);
    assert_eq!(array.len(), 1);
    assert_eq!(array.iter().count(), 0);
}

#[test]
fn removing_everything_frees_every_chunk() {
    let mut array = SparseArray::with_chunk_size(5).unwrap();
    let offsets = [3usize, 77, 4, 1200, 15, 16, 0, 999, 78];
    for &offset in &offsets {
        array.set(offset, offset).unwrap();
    }
    assert_eq!(array.len(), offsets.len());

    for &offset in [999usize, 3, 16, 78, 0, 1200, 77, 15, 4].iter() {
        let before = array.capacity();
        let chunk_emptied = array
            .iter()
            .filter(|(other, _)| other / 5 == offset / 5)
            .count()
            == 1;
        assert_eq!(array.remove(offset).unwrap(), Some(offset));
        if chunk_emptied {
            assert_eq!(array.capacity(), before - 5);
        } else {
            assert_eq!(array.capacity(), before);
        }
    }

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert_eq!(array.iter().next(), None);
    assert!(!array.cursor().valid());
}

#[test]
fn falsy_values_are_present() {
    let mut numbers: SparseArray<i32> = SparseArray::new();
    numbers.set(4, 0).unwrap();
    assert!(numbers.exists(4));
    assert_eq!(numbers.get(4).unwrap(), Some(&0));

    let mut strings: SparseArray<String> = SparseArray::new();
    strings.set(9, String::new()).unwrap();
    assert!(strings.exists(9));
    assert_eq!(strings.len(), 1);
}

#[test]
fn removing_absent_slot_is_a_no_op() {
    let mut array: SparseArray<u8> = SparseArray::new();
    assert_eq!(array.remove(12).unwrap(), None);
    array.set(10, 1).unwrap();
    assert_eq!(array.remove(12).unwrap(), None);
    assert_eq!(array.len(), 1);
    assert_eq!(array.capacity(), 10);
}

#[test]
fn invalid_offsets_leave_state_untouched() {
    let mut array: SparseArray<u8> = SparseArray::new();
    array.set(3, 3).unwrap();

    assert!(matches!(
        array.set(-4i64, 1),
        Err(SparseArrayError::InvalidOffset { .. })
    ));
    assert!(matches!(array.get(-4i64), Err(SparseArrayError::InvalidOffset { .. })));
    assert!(matches!(array.remove(-4i64), Err(SparseArrayError::InvalidOffset { .. })));
    assert!(!array.exists(-4i64));
    assert!(!array.exists(u128::MAX));

    assert_eq!(array.len(), 1);
    assert_eq!(array.chunk_count(), 1);
}

#[test]
fn clustered_ids_only_allocate_their_ranges() {
    let mut array: SparseArray<u32> = SparseArray::with_chunk_size(50).unwrap();
    for id in (0..1000).step_by(7) {
        array.set(id, id).unwrap();
    }
    for id in (29_000..30_000).step_by(11) {
        array.set(id, id).unwrap();
    }
    // 20 chunks per cluster.
    assert_eq!(array.chunk_count(), 40);
    assert_eq!(array.capacity(), 2000);

    let offsets: Vec<usize> = array.iter().map(|(offset, _)| offset).collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(offsets.len(), array.len());
}

#[test]
fn generic_code_works_through_offset_access() {
    fn total<A: OffsetAccess<Value = u32>>(container: &A) -> u32 {
        container.iterate().map(|(_, value)| *value).sum()
    }

    let array: SparseArray<u32> = [(5, 1), (500, 2), (50_000, 3)].into_iter().collect();
    assert_eq!(total(&array), 6);
}
