use itertools::iproduct;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// An unordered pair of allele calls at one marker, stored sorted so that
/// equality does not depend on the order the lab reported the alleles in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genotype {
    alleles: [String; 2],
}

impl Genotype {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { alleles: [a, b] }
        } else {
            Self { alleles: [b, a] }
        }
    }

    /// Parse a raw genotype cell. Returns `None` for blank or malformed
    /// values; the marker is then unscorable, never an exclusion.
    ///
    /// Alleles are separated by `/`, or `|` when no slash is present. A
    /// single token with no separator is read as homozygous ("142" means
    /// 142/142). Exactly two alleles must come out of the split.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let tokens: Vec<&str> = if raw.contains('/') {
            raw.split('/').collect()
        } else if raw.contains('|') {
            raw.split('|').collect()
        } else {
            vec![raw, raw]
        };
        let &[a, b] = tokens.as_slice() else {
            return None;
        };

        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            return None;
        }
        Some(Self::new(a, b))
    }

    pub fn alleles(&self) -> (&str, &str) {
        (&self.alleles[0], &self.alleles[1])
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.alleles[0], self.alleles[1])
    }
}

/// Every genotype an offspring of the two parents could carry, formed by
/// drawing one allele from each parent. At most four distinct members, fewer
/// when alleles repeat.
pub fn possible_offspring(parent1: &Genotype, parent2: &Genotype) -> BTreeSet<Genotype> {
    let (p1a, p1b) = parent1.alleles();
    let (p2a, p2b) = parent2.alleles();
    iproduct!([p1a, p1b], [p2a, p2b])
        .map(|(a, b)| Genotype::new(a, b))
        .collect()
}

/// One individual's marker panel: marker id -> raw genotype cell. Built once
/// by the loader, which guarantees no blank marker ids or genotypes survive.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    markers: HashMap<String, String>,
}

impl Profile {
    pub fn new(name: impl Into<String>, markers: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            markers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_markers(&self) -> usize {
        self.markers.len()
    }

    pub fn genotype(&self, marker_id: &str) -> Option<&str> {
        self.markers.get(marker_id).map(String::as_str)
    }

    pub fn marker_ids(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }
}
