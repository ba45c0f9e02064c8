use mosaic::histogram::{generate_histogram, total, Histogram, HISTOGRAM_SIZE};
use mosaic::{partition, Error, PartitionIndex};

fn empty() -> Box<Histogram> {
    Box::new([0; HISTOGRAM_SIZE])
}

// Small xorshift so every run sees the same histograms
fn scattered(seed: u64, filled: usize) -> Box<Histogram> {
    let mut state = seed;
    let mut hist = empty();
    for _ in 0..filled {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        hist[(state % HISTOGRAM_SIZE as u64) as usize] += state % 1000;
    }
    hist
}

fn check_invariants(index: &PartitionIndex, hist: &Histogram, size: usize) {
    let ends = index.breakpoints();
    assert_eq!(ends.len(), size);
    assert!(ends.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", ends);
    assert!(*ends.last().unwrap() as usize <= HISTOGRAM_SIZE);

    let per_slot: Vec<u64> = index.ranges()
        .map(|r| hist[r].iter().sum())
        .collect();
    assert_eq!(per_slot, index.counts());
    assert_eq!(per_slot.iter().sum::<u64>(), total(hist));
}

#[test]
fn random_histograms_keep_invariants() {
    for seed in 1..20u64 {
        let hist = scattered(seed * 7919, 50 * seed as usize);
        for size in 1..12 {
            let index = partition(&hist, size).unwrap();
            check_invariants(&index, &hist, size);
            let expected: u64 = index.counts().iter()
                .map(|c| c.abs_diff(index.per_bucket()))
                .sum();
            assert_eq!(index.badness(), expected);
        }
    }
}

#[test]
fn uniform_histogram_stays_within_one_bucket() {
    let mut hist = empty();
    for count in hist.iter_mut() {
        *count = 5;
    }
    for &size in &[2usize, 4, 8, 16] {
        let index = partition(&hist, size).unwrap();
        check_invariants(&index, &hist, size);
        for &c in index.counts() {
            assert!(c.abs_diff(index.per_bucket()) <= 5, "{} vs {}", c, index.per_bucket());
        }
    }
}

#[test]
fn blank_histogram_is_handled() {
    let hist = empty();
    let index = partition(&hist, 3).unwrap();
    check_invariants(&index, &hist, 3);
    assert_eq!(index.total(), 0);
    assert_eq!(index.badness(), 0);
}

#[test]
fn sparse_histogram_collapses_trailing_slots() {
    let mut hist = empty();
    hist[0x1234] = 40;
    hist[0xABCD] = 2;
    let index = partition(&hist, 5).unwrap();
    check_invariants(&index, &hist, 5);
    let ranges: Vec<_> = index.ranges().collect();
    assert!(ranges[2].is_empty());
    assert!(ranges[3].is_empty());
    assert_eq!(index.slot_for(0x1234), 0);
    assert_eq!(index.slot_for(0xABCD), 1);
    assert_eq!(index.slot_for(0xFFFF), 4);
}

#[test]
fn first_bucket_filling_target_closes_slot() {
    let mut hist = empty();
    hist[0] = 100;
    hist[1] = 100;
    let index = partition(&hist, 2).unwrap();
    assert_eq!(index.breakpoints()[0], 1);
    assert_eq!(index.counts(), &[100, 100]);
}

#[test]
fn ten_even_buckets_split_in_half() {
    let mut hist = empty();
    for i in 0..10 {
        hist[i] = 10;
    }
    let index = partition(&hist, 2).unwrap();
    assert_eq!(index.per_bucket(), 50);
    assert_eq!(index.breakpoints()[0], 5);
}

#[test]
fn zero_slots_is_an_error() {
    assert!(matches!(partition(&empty(), 0), Err(Error::EmptyPalette)));
}

#[test]
fn histogram_of_image_feeds_partition() {
    let img = image::ImageBuffer::from_fn(16, 16, |x, y| {
        image::Rgba([(x * 4096) as u16, (y * 4096) as u16, 0, 0xFFFF])
    });
    let hist = generate_histogram(&img);
    assert_eq!(total(&hist), 256);
    let index = partition(&hist, 4).unwrap();
    check_invariants(&index, &hist, 4);
    assert_eq!(index.counts(), &[64, 64, 64, 64]);
}

#[test]
fn huge_palettes_keep_invariants() {
    let hist = scattered(4242, 300);
    for &size in &[5_000usize, 65_536, 70_000] {
        let index = partition(&hist, size).unwrap();
        check_invariants(&index, &hist, size);
    }
}
