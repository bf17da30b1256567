//! Greedy top-down divisive clustering.
//!
//! Starting from one region covering the whole unit, repeatedly split the
//! region whose replacement by its two densest halves raises the overall
//! area-normalized density the most. Regions live in a flat arena addressed
//! by index; each region memoizes its best split and children so no split is
//! ever recomputed. The arena is built and dropped within one call.

use tracing::trace;

use crate::density::DensitySums;

/// One contiguous index range `[l, r]` with its cached block density.
#[derive(Debug)]
struct Region {
    l: usize,
    r: usize,
    /// Total rank over the block `[l, r] x [l, r]`
    tot: f64,
    /// `(r - l + 1)^2`
    area: f64,
    /// Children in the arena, set once split
    lch: Option<usize>,
    rch: Option<usize>,
    /// Chosen split position; `Some(l)` for a leaf
    best_pos: Option<usize>,
}

#[derive(Debug, Default)]
struct RegionArena {
    regions: Vec<Region>,
}

impl RegionArena {
    fn alloc(&mut self, l: usize, r: usize, sums: &DensitySums) -> usize {
        let side = (r - l + 1) as f64;
        self.regions.push(Region {
            l,
            r,
            tot: sums.block(l, r),
            area: side * side,
            lch: None,
            rch: None,
            best_pos: None,
        });
        self.regions.len() - 1
    }

    /// Compute and memoize the best split of a region.
    ///
    /// Scans every candidate split point and keeps the one maximizing the
    /// combined area-normalized density of the two halves; on exact ties the
    /// leftmost candidate wins.
    fn ensure_split(&mut self, id: usize, sums: &DensitySums) {
        if self.regions[id].best_pos.is_some() {
            return;
        }
        let (l, r) = (self.regions[id].l, self.regions[id].r);
        if l == r {
            self.regions[id].best_pos = Some(l);
            return;
        }

        let mut best = f64::NEG_INFINITY;
        let mut pos = l;
        for p in l..r {
            let left = (p - l + 1) as f64;
            let right = (r - p) as f64;
            let carea = left * left + right * right;
            let cur = (sums.block(l, p) + sums.block(p + 1, r)) / carea;
            if cur > best {
                best = cur;
                pos = p;
            }
        }

        let lch = self.alloc(l, pos, sums);
        let rch = self.alloc(pos + 1, r, sums);
        let region = &mut self.regions[id];
        region.lch = Some(lch);
        region.rch = Some(rch);
        region.best_pos = Some(pos);
    }
}

/// Result of the clustering loop.
#[derive(Debug)]
pub struct Clustering {
    /// Overall density after each split; `densities[0]` is the unsplit value
    pub densities: Vec<f64>,
    /// Split positions in the order they were taken
    pub split_order: Vec<usize>,
}

/// Run the divisive clustering loop over a unit of `n = sums.size()`
/// sentences, performing exactly `n - 1` splits.
///
/// Region selection is greedy: each iteration picks the region whose split
/// maximizes the new overall density, first-encountered winning on exact
/// ties. Callers have already ruled out `n < 3`; anything below 2 is a
/// caller bug and panics in debug builds.
pub fn divisive_cluster(sums: &DensitySums) -> Clustering {
    let n = sums.size();
    debug_assert!(n >= 2, "divisive clustering requires at least 2 sentences");
    let mut arena = RegionArena::default();
    let root = arena.alloc(0, n - 1, sums);

    // Current partition, left to right, as arena indices.
    let mut partition = vec![root];
    let mut sum_region = arena.regions[root].tot;
    let mut sum_area = (n * n) as f64;
    let mut densities = vec![sum_region / sum_area];
    let mut split_order = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        for k in 0..partition.len() {
            arena.ensure_split(partition[k], sums);
        }

        let mut best = f64::NEG_INFINITY;
        let mut chosen = None;
        for (k, &id) in partition.iter().enumerate() {
            let region = &arena.regions[id];
            let (Some(lch), Some(rch)) = (region.lch, region.rch) else {
                continue; // leaf
            };
            let den = sum_area - region.area + arena.regions[lch].area + arena.regions[rch].area;
            let cur =
                (sum_region - region.tot + arena.regions[lch].tot + arena.regions[rch].tot) / den;
            if cur > best {
                best = cur;
                chosen = Some((k, lch, rch));
            }
        }
        let Some((k, lch, rch)) = chosen else {
            break;
        };

        let region = &arena.regions[partition[k]];
        let (tot, area) = (region.tot, region.area);
        let pos = region.best_pos.unwrap_or(region.l);

        partition[k] = rch;
        partition.insert(k, lch);
        sum_region += arena.regions[lch].tot + arena.regions[rch].tot - tot;
        sum_area += arena.regions[lch].area + arena.regions[rch].area - area;
        densities.push(sum_region / sum_area);
        split_order.push(pos);

        trace!(split = pos, density = densities[densities.len() - 1], "Split region");
    }

    Clustering {
        densities,
        split_order,
    }
}
