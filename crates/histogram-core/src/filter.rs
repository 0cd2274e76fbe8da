// File: crates/histogram-core/src/filter.rs
// Summary: In-memory cross-filter store: record set, keyed dimensions, bucketed groups.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{Error, Result};
use crate::key::{Key, KeyKind};

/// How a group folds matching records into a bucket value.
pub enum Reduce<R> {
    /// Bucket value is the number of matching records.
    Count,
    /// Bucket value is the sum of `f` over matching records.
    SumBy(Box<dyn Fn(&R) -> f64>),
}

struct Group<R> {
    bucket: Box<dyn Fn(Key) -> Key>,
    reduce: Reduce<R>,
    /// Bucket identities, fixed by the unfiltered record set and sorted.
    /// `all()` always reports every one of these, zero-valued when filtered out.
    buckets: Vec<Key>,
}

struct Dimension<R> {
    name: String,
    kind: KeyKind,
    /// Extracted key per record, index-aligned with the record set.
    keys: Vec<Key>,
    /// Active restriction, half-open: lo <= key < hi.
    filter: Option<(Key, Key)>,
    groups: Vec<Group<R>>,
}

/// Handle to a dimension registered on a [`CrossFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DimensionId(usize);

/// Handle to a group registered on a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId {
    dim: usize,
    group: usize,
}

impl GroupId {
    pub fn dimension(&self) -> DimensionId {
        DimensionId(self.dim)
    }
}

/// Shared columnar filter over one record set.
///
/// Dimensions project records onto keys and carry at most one contiguous
/// range restriction each. Group aggregates are pull-based: nothing is
/// cached or pushed, `group_all` recomputes from the live restrictions on
/// every read. Following crossfilter semantics, a group observes the
/// restrictions of every dimension except its own.
pub struct CrossFilter<R> {
    records: Vec<R>,
    dimensions: Vec<Dimension<R>>,
}

impl<R> CrossFilter<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records, dimensions: Vec::new() }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register a projection of the record set keyed by one field.
    ///
    /// Keys are extracted once, up front. All extracted keys must share one
    /// kind; a record set mixing numbers and dates on the same field is
    /// rejected.
    pub fn dimension(
        &mut self,
        name: impl Into<String>,
        extract: impl Fn(&R) -> Key,
    ) -> Result<DimensionId> {
        let name = name.into();
        let keys: Vec<Key> = self.records.iter().map(&extract).collect();
        let kind = keys.first().map(Key::kind).unwrap_or(KeyKind::Num);
        if keys.iter().any(|k| k.kind() != kind) {
            return Err(Error::MixedKeyKinds { name });
        }
        self.dimensions.push(Dimension {
            name,
            kind,
            keys,
            filter: None,
            groups: Vec::new(),
        });
        Ok(DimensionId(self.dimensions.len() - 1))
    }

    /// Register a bucketed aggregation of a dimension.
    ///
    /// `bucket` maps a dimension key to its bucket identity (pass the
    /// identity function for one bucket per distinct key) and must preserve
    /// the key kind.
    pub fn group(
        &mut self,
        dim: DimensionId,
        bucket: impl Fn(Key) -> Key + 'static,
        reduce: Reduce<R>,
    ) -> GroupId {
        let d = &mut self.dimensions[dim.0];
        let mut buckets: Vec<Key> = d.keys.iter().map(|&k| bucket(k)).collect();
        buckets.sort();
        buckets.dedup();
        d.groups.push(Group { bucket: Box::new(bucket), reduce, buckets });
        GroupId { dim: dim.0, group: d.groups.len() - 1 }
    }

    /// Restrict `dim` to `lo <= key < hi`.
    pub fn filter_range(&mut self, dim: DimensionId, lo: Key, hi: Key) {
        let d = &mut self.dimensions[dim.0];
        debug!("dimension '{}': filter [{lo}, {hi})", d.name);
        d.filter = Some((lo, hi));
    }

    /// Drop the restriction on `dim`; all records pass it again.
    pub fn clear_filter(&mut self, dim: DimensionId) {
        let d = &mut self.dimensions[dim.0];
        debug!("dimension '{}': filter cleared", d.name);
        d.filter = None;
    }

    /// Read back the active restriction on `dim`, if any.
    pub fn filter(&self, dim: DimensionId) -> Option<(Key, Key)> {
        self.dimensions[dim.0].filter
    }

    /// The key kind `dim` extracts.
    pub fn key_kind(&self, dim: DimensionId) -> KeyKind {
        self.dimensions[dim.0].kind
    }

    pub fn dimension_name(&self, dim: DimensionId) -> &str {
        &self.dimensions[dim.0].name
    }

    /// Enumerate the current ordered `(bucket key, aggregate value)` pairs.
    ///
    /// Every bucket of the unfiltered record set appears, in key order;
    /// values count only records passing the restrictions of every *other*
    /// dimension. The group's own dimension filter is ignored so that a
    /// brushed chart keeps showing its full distribution.
    pub fn group_all(&self, id: GroupId) -> Vec<(Key, f64)> {
        let dim = &self.dimensions[id.dim];
        let group = &dim.groups[id.group];
        let mut values: BTreeMap<Key, f64> =
            group.buckets.iter().map(|&k| (k, 0.0)).collect();
        for (i, record) in self.records.iter().enumerate() {
            if !self.passes_all_but(i, id.dim) {
                continue;
            }
            let bucket = (group.bucket)(dim.keys[i]);
            let weight = match &group.reduce {
                Reduce::Count => 1.0,
                Reduce::SumBy(f) => f(record),
            };
            if let Some(v) = values.get_mut(&bucket) {
                *v += weight;
            }
        }
        values.into_iter().collect()
    }

    /// Whether record `i` passes the restriction of every dimension except
    /// the one at `skip`.
    fn passes_all_but(&self, i: usize, skip: usize) -> bool {
        self.dimensions.iter().enumerate().all(|(d, dim)| {
            if d == skip {
                return true;
            }
            match dim.filter {
                None => true,
                Some((lo, hi)) => {
                    let key = dim.keys[i];
                    lo <= key && key < hi
                }
            }
        })
    }
}
