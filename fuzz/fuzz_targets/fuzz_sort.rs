#![no_main]

use libfuzzer_sys::fuzz_target;

use cursorkit::{lower_bound, make_heap, sort_heap, upper_bound, Cursor, SliceCursor};

fuzz_target!(|data: (&[u8], u8)| {
    let mut arr: Vec<u8> = data.0.to_vec();
    let mut reference = arr.clone();
    let mut heaped = arr.clone();
    reference.sort_unstable();

    cursorkit::sort(&mut arr);
    assert_eq!(arr, reference);

    {
        let (begin, end) = SliceCursor::range(&mut heaped);
        make_heap(&begin, &end);
        sort_heap(&begin, &end);
    }
    assert_eq!(heaped, reference);

    // arr is now sorted; bounds must agree with linear scans.
    let needle = data.1;
    let lo_ref = arr.iter().position(|&x| x >= needle).unwrap_or(arr.len());
    let hi_ref = arr.iter().position(|&x| x > needle).unwrap_or(arr.len());
    let (begin, end) = SliceCursor::range(&mut arr);
    assert_eq!(begin.distance_to(&lower_bound(&begin, &end, &needle)), lo_ref);
    assert_eq!(begin.distance_to(&upper_bound(&begin, &end, &needle)), hi_ref);
});
