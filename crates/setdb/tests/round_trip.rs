use std::collections::{BTreeSet, HashSet};

use setdb::{
    HashMultiSet, Options, Persist, Result, SetLike, Sink, SliceSource, SortedMultiSet, Source,
    VecSink, load_from_slice, save_to_vec,
};

fn round_trip<S>(set: &S) -> Result<S>
where
    S: Persist + Default,
{
    let bytes = save_to_vec(set, Options::default())?;
    let mut loaded = S::default();
    load_from_slice(&bytes, &mut loaded, Options::default())?;
    Ok(loaded)
}

#[test]
fn test_round_trip_every_category() -> Result<()> {
    let ordered: BTreeSet<u32> = [5, 1, 9, 3].into_iter().collect();
    let hashed: HashSet<i64> = [-4, 8, 15, 16, 23, 42].into_iter().collect();
    let ordered_multi: SortedMultiSet<u16> = [3, 1, 3, 2, 1, 3].into_iter().collect();
    let hashed_multi: HashMultiSet<u8> = [9, 9, 1, 9, 2].into_iter().collect();

    assert_eq!(round_trip(&ordered)?, ordered);
    assert_eq!(round_trip(&hashed)?, hashed);
    assert_eq!(round_trip(&ordered_multi)?, ordered_multi);
    assert_eq!(round_trip(&hashed_multi)?, hashed_multi);

    assert_eq!(round_trip(&ordered_multi)?.len(), 6);
    assert_eq!(round_trip(&hashed_multi)?.len(), 5);

    Ok(())
}

#[test]
fn test_layout_is_count_then_elements() -> Result<()> {
    let set: BTreeSet<u32> = [2, 1].into_iter().collect();
    let bytes = save_to_vec(&set, Options::default())?;

    let mut expected = 2u64.to_le_bytes().to_vec();
    expected.extend(1u32.to_le_bytes());
    expected.extend(2u32.to_le_bytes());
    assert_eq!(bytes, expected);

    Ok(())
}

#[test]
fn test_empty_round_trip_clears_target() -> Result<()> {
    let empty = HashSet::<u32>::new();
    let bytes = save_to_vec(&empty, Options::default())?;
    assert_eq!(bytes, 0u64.to_le_bytes());

    let mut target: HashSet<u32> = [1, 2, 3].into_iter().collect();
    load_from_slice(&bytes, &mut target, Options::default())?;
    assert!(target.is_empty());

    let mut target: SortedMultiSet<u32> = [4, 4].into_iter().collect();
    load_from_slice(&bytes, &mut target, Options::default())?;
    assert!(target.is_empty());

    Ok(())
}

#[test]
fn test_load_overwrites_instead_of_merging() -> Result<()> {
    let saved: BTreeSet<u32> = [10, 20].into_iter().collect();
    let bytes = save_to_vec(&saved, Options::default())?;

    let mut target: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
    load_from_slice(&bytes, &mut target, Options::default())?;
    assert_eq!(target, saved);

    Ok(())
}

#[test]
fn test_duplicate_preservation() -> Result<()> {
    let input = [1u32, 1, 2];

    let multi: SortedMultiSet<u32> = input.into_iter().collect();
    let loaded = round_trip(&multi)?;
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.count(&1), 2);
    assert_eq!(loaded.count(&2), 1);

    let hashed_multi: HashMultiSet<u32> = input.into_iter().collect();
    let loaded = round_trip(&hashed_multi)?;
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.count(&1), 2);

    let unique: BTreeSet<u32> = input.into_iter().collect();
    let loaded = round_trip(&unique)?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, BTreeSet::from([1, 2]));

    let hashed_unique: HashSet<u32> = input.into_iter().collect();
    assert_eq!(round_trip(&hashed_unique)?.len(), 2);

    Ok(())
}

#[test]
fn test_multi_loaded_into_unique_folds_silently() -> Result<()> {
    let multi: SortedMultiSet<u32> = [7, 7, 7, 8].into_iter().collect();
    let bytes = save_to_vec(&multi, Options::default())?;

    let mut unique = BTreeSet::<u32>::new();
    load_from_slice(&bytes, &mut unique, Options::default())?;
    assert_eq!(unique, BTreeSet::from([7, 8]));

    let mut hashed = HashSet::<u32>::new();
    load_from_slice(&bytes, &mut hashed, Options::default())?;
    assert_eq!(hashed, HashSet::from([7, 8]));

    Ok(())
}

/// Writes `count` followed by `items` in the given order, bypassing the set.
fn encode_in_order(items: &[u32]) -> Result<Vec<u8>> {
    let mut sink = VecSink::new(Options::default());
    sink.write_u64(items.len() as u64)?;
    for item in items {
        item.save(&mut sink)?;
    }
    Ok(sink.into_bytes())
}

#[test]
fn test_ordered_final_state_ignores_write_order() -> Result<()> {
    let n = 500u32;
    let sorted: Vec<u32> = (0..n).map(|i| i / 3).collect();
    let reversed: Vec<u32> = sorted.iter().rev().copied().collect();
    let scrambled: Vec<u32> = (0..n).map(|i| sorted[((i * 7919) % n) as usize]).collect();

    let expected_multi: SortedMultiSet<u32> = sorted.iter().copied().collect();
    let expected_unique: BTreeSet<u32> = sorted.iter().copied().collect();

    for order in [&sorted, &reversed, &scrambled] {
        let bytes = encode_in_order(order)?;

        let mut multi = SortedMultiSet::<u32>::new();
        load_from_slice(&bytes, &mut multi, Options::default())?;
        assert_eq!(multi, expected_multi);
        assert!(multi.as_slice().is_sorted());

        let mut unique = BTreeSet::<u32>::new();
        load_from_slice(&bytes, &mut unique, Options::default())?;
        assert_eq!(unique, expected_unique);
    }

    Ok(())
}

#[test]
fn test_chained_archive_calls() -> Result<()> {
    let a: BTreeSet<u8> = [1, 2].into_iter().collect();
    let b: HashMultiSet<u8> = [3, 3].into_iter().collect();
    let c = 0xdead_beef_u32;

    let mut sink = VecSink::new(Options::default());
    sink.save(&a)?.save(&b)?.save(&c)?;
    let bytes = sink.into_bytes();

    let mut source = SliceSource::new(&bytes, Options::default());
    let mut loaded_a = BTreeSet::<u8>::new();
    let mut loaded_b = HashMultiSet::<u8>::new();
    source.load(&mut loaded_a)?.load(&mut loaded_b)?;
    let loaded_c: u32 = source.read()?;

    assert_eq!(loaded_a, a);
    assert_eq!(loaded_b, b);
    assert_eq!(loaded_c, c);
    assert!(source.is_exhausted());

    Ok(())
}

#[test]
fn test_save_leaves_container_untouched() -> Result<()> {
    let set: SortedMultiSet<u32> = [4, 2, 2].into_iter().collect();
    let before = set.clone();
    save_to_vec(&set, Options::default())?;
    assert_eq!(set, before);
    assert_eq!(SetLike::len(&set), 3);

    Ok(())
}

#[test]
fn test_sorted_multi_set_hint_appends_sorted_input() {
    let mut set = SortedMultiSet::new();
    let mut hint = set.start();
    for item in [1u32, 2, 2, 5, 8] {
        hint = set.insert_hint(hint, item);
        assert_eq!(hint, set.len());
    }

    // An item that does not fit at the hint lands after its equals.
    let hint = set.insert_hint(hint, 2);
    assert_eq!(hint, 4);
    assert_eq!(set.as_slice(), &[1, 2, 2, 2, 5, 8]);

    // A stale hint past the end is clamped.
    let hint = set.insert_hint(100, 9);
    assert_eq!(hint, set.len());
    assert_eq!(set.last(), Some(&9));
}
