// Splits a histogram into contiguous bucket ranges, one per palette slot,
// so that every range holds roughly the same number of pixels.

use std::ops::Range;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::histogram::{total, Histogram, HISTOGRAM_SIZE};

// Data definitions

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionIndex {
    breakpoints: Vec<u32>,
    counts: Vec<u64>,
    per_bucket: u64,
    total: u64,
    badness: u64,
}

struct Search<'a> {
    histogram: &'a Histogram,
    per_bucket: u64,
    breakpoints: Vec<u32>,
    counts: Vec<u64>,
    best_badness: u64,
}

// Search

impl<'a> Search<'a> {
    fn badness(&self) -> u64 {
        self.counts.iter()
            .map(|&c| c.abs_diff(self.per_bucket))
            .sum()
    }

    // Returns where `slot` closes and which rule closed it
    fn scan(&mut self, start: usize, slot: usize) -> (usize, u8) {
        let slots = self.breakpoints.len();

        // The last slot takes whatever is left
        if slot + 1 == slots {
            self.counts[slot] = self.histogram[start..].iter().sum();
            return (HISTOGRAM_SIZE, 3);
        }

        // Leave at least one bucket for each remaining slot
        let limit = HISTOGRAM_SIZE.saturating_sub(slots - slot);
        let hist = self.histogram;
        let target = self.per_bucket;
        let mut end = start;

        for i in start..limit {
            if hist[i] == 0 {
                continue;
            }
            self.counts[slot] += hist[i];
            end = i + 1;
            let sum = self.counts[slot];

            if sum >= target {
                return (i + 1, 0);
            }
            if i + 1 < limit && sum + hist[i + 1] >= target {
                if target - sum <= sum + hist[i + 1] - target {
                    return (i + 1, 1);
                }
                self.counts[slot] += hist[i + 1];
                return (i + 2, 2);
            }
        }

        // Ran out of buckets before reaching the target
        (end, 4)
    }

    fn minimize(&mut self) {
        let mut start = 0;
        for slot in 0..self.breakpoints.len() {
            let (end, case) = self.scan(start, slot);
            self.breakpoints[slot] = end as u32;
            debug!("slot {}: case {}: closed at {} with {}",
                   slot, case, end, self.counts[slot]);
            start = end;
        }

        let badness = self.badness();
        if badness < self.best_badness {
            self.best_badness = badness;
        }
    }
}

pub fn partition(histogram: &Histogram, palette_size: usize)
        -> Result<PartitionIndex> {
    if palette_size == 0 {
        return Err(Error::EmptyPalette);
    }

    let total = total(histogram);
    let per_bucket = total / palette_size as u64;
    info!("total: {}, palette size: {}, per bucket: {}",
          total, palette_size, per_bucket);

    let mut search = Search {
        histogram: histogram,
        per_bucket: per_bucket,
        breakpoints: vec![0; palette_size],
        counts: vec![0; palette_size],
        best_badness: u64::MAX,
    };
    search.minimize();
    info!("badness: {}", search.best_badness);

    Ok(PartitionIndex {
        breakpoints: search.breakpoints,
        counts: search.counts,
        per_bucket: per_bucket,
        total: total,
        badness: search.best_badness,
    })
}

// Queries

impl PartitionIndex {
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Exclusive upper bucket bound of every slot.
    pub fn breakpoints(&self) -> &[u32] {
        &self.breakpoints
    }

    /// Pixel count owned by every slot.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn per_bucket(&self) -> u64 {
        self.per_bucket
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of absolute deviations of slot counts from the per-bucket target.
    pub fn badness(&self) -> u64 {
        self.badness
    }

    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let starts = std::iter::once(0).chain(self.breakpoints.iter().cloned());
        starts.zip(self.breakpoints.iter())
            .map(|(start, &end)| start as usize..end as usize)
    }

    /// Smallest slot whose upper breakpoint lies above `bucket`. Empty
    /// ranges never match.
    pub fn slot_for(&self, bucket: u16) -> usize {
        let slot = self.breakpoints.partition_point(|&end| end <= bucket as u32);
        slot.min(self.breakpoints.len() - 1)
    }
}
