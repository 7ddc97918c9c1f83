use std::{
    collections::{BTreeSet, HashSet},
    io::{Cursor, ErrorKind},
};

use setdb::{
    Error, IoSource, Options, Persist, Result, Sink, SliceSource, SortedMultiSet, VecSink,
    load_from_slice,
};

/// A stream claiming five `u32` elements but holding only two.
fn five_claimed_two_present() -> Result<Vec<u8>> {
    let mut sink = VecSink::new(Options::default());
    sink.write_u64(5)?;
    sink.save(&10u32)?.save(&20u32)?;
    Ok(sink.into_bytes())
}

#[test]
fn test_truncated_slice_fails_after_valid_elements() -> Result<()> {
    let bytes = five_claimed_two_present()?;

    let mut set: BTreeSet<u32> = [99].into_iter().collect();
    let mut source = SliceSource::new(&bytes, Options::default());
    let err = set.load(&mut source).unwrap_err();

    assert!(matches!(
        err,
        Error::Truncated {
            needed: 4,
            remaining: 0
        }
    ));
    assert_eq!(set, BTreeSet::from([10, 20]));
    assert!(source.is_exhausted());

    Ok(())
}

#[test]
fn test_truncated_reader_surfaces_unexpected_eof() -> Result<()> {
    let bytes = five_claimed_two_present()?;

    let mut set = SortedMultiSet::<u32>::new();
    let mut source = IoSource::new(Cursor::new(bytes), Options::default());
    let err = set.load(&mut source).unwrap_err();

    match err {
        Error::IO(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(set.as_slice(), &[10, 20]);

    Ok(())
}

#[test]
fn test_truncated_count() {
    let bytes = [1u8, 0, 0];
    let mut set = HashSet::<u32>::new();
    let err = load_from_slice(&bytes, &mut set, Options::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Truncated {
            needed: 8,
            remaining: 3
        }
    ));
}

#[test]
fn test_strict_count_rejects_before_clearing() -> Result<()> {
    let bytes = five_claimed_two_present()?;

    let mut set: BTreeSet<u32> = [99].into_iter().collect();
    let options = Options::default().with_strict_count(true);
    let err = load_from_slice(&bytes, &mut set, options).unwrap_err();

    assert!(matches!(err, Error::MalformedCount { count: 5, limit: 2 }));
    assert_eq!(set, BTreeSet::from([99]));

    Ok(())
}

#[test]
fn test_max_count_limit() -> Result<()> {
    let saved: BTreeSet<u32> = (0..10).collect();
    let mut sink = VecSink::new(Options::default());
    saved.save(&mut sink)?;

    let mut set = BTreeSet::<u32>::new();
    let err = load_from_slice(sink.as_bytes(), &mut set, Options::default().with_max_count(9))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedCount { count: 10, limit: 9 }));

    load_from_slice(sink.as_bytes(), &mut set, Options::default().with_max_count(10))?;
    assert_eq!(set, saved);

    Ok(())
}

#[test]
fn test_truncated_string_element() -> Result<()> {
    let mut sink = VecSink::new(Options::default());
    sink.write_u64(1)?;
    sink.write_u64(1_000)?;
    sink.write_all(b"short")?;
    let bytes = sink.into_bytes();

    let mut set = BTreeSet::<String>::new();
    let err = load_from_slice(&bytes, &mut set, Options::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Truncated {
            needed: 1_000,
            remaining: 5
        }
    ));
    assert!(set.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_string_length_from_unsized_reader() -> Result<()> {
    let mut sink = VecSink::new(Options::default());
    sink.write_u64(1)?;
    sink.write_u64(1 << 62)?;
    sink.write_all(b"tail")?;
    let bytes = sink.into_bytes();

    let mut set: HashSet<String> = ["stale".to_string()].into_iter().collect();
    let mut source = IoSource::new(Cursor::new(bytes), Options::default());
    let err = set.load(&mut source).unwrap_err();

    assert!(
        matches!(
            &err,
            Error::IO(e) if e.kind() == ErrorKind::UnexpectedEof
        ) || matches!(err, Error::LengthOverflow(_)),
        "{err:?}"
    );
    assert!(set.is_empty());

    Ok(())
}

#[test]
fn test_long_string_from_unsized_reader() -> Result<()> {
    let long: String = (0..200_000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let saved: BTreeSet<String> = [long, "short".to_string()].into_iter().collect();
    let mut sink = VecSink::new(Options::default());
    saved.save(&mut sink)?;

    let mut set = BTreeSet::<String>::new();
    let mut source = IoSource::new(Cursor::new(sink.into_bytes()), Options::default());
    set.load(&mut source)?;
    assert_eq!(set, saved);

    Ok(())
}

/// A huge count followed by two `u64` elements, read without a known length.
fn huge_count_source() -> Result<IoSource<Cursor<Vec<u8>>>> {
    let mut sink = VecSink::new(Options::default());
    sink.write_u64(u64::MAX >> 1)?;
    sink.save(&1u64)?.save(&2u64)?;
    Ok(IoSource::new(Cursor::new(sink.into_bytes()), Options::default()))
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_hashed_reservation_failure_is_returned() -> Result<()> {
    let mut set: HashSet<u64> = (100..110).collect();
    let mut source = huge_count_source()?;
    let err = set.load(&mut source).unwrap_err();

    assert!(matches!(err, Error::Allocation(_)), "{err:?}");
    assert!(set.is_empty());

    Ok(())
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_ordered_huge_count_fails_on_missing_elements() -> Result<()> {
    let mut set: BTreeSet<u64> = (100..110).collect();
    let mut source = huge_count_source()?;
    let err = set.load(&mut source).unwrap_err();

    match err {
        Error::IO(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(set, BTreeSet::from([1, 2]));

    Ok(())
}
