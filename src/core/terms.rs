/// Case-folded match terms prepared once per request
///
/// Matching is literal: a term matches a value when it occurs anywhere in the
/// value, ignoring case. Terms are not interpreted as patterns. An empty term
/// occurs in every present value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terms {
    normalized: Vec<String>,
}

impl Terms {
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Self {
        Self {
            normalized: raw.iter().map(|t| fold_case(t.as_ref())).collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.normalized.iter().map(String::as_str)
    }

    /// Number of terms occurring in `value`
    ///
    /// Duplicate terms are counted once each. A missing value never matches.
    pub fn count_in(&self, value: Option<&str>) -> u32 {
        match value {
            Some(v) if !self.is_empty() => {
                let haystack = fold_case(v);
                self.iter().filter(|term| haystack.contains(term)).count() as u32
            }
            _ => 0,
        }
    }

    /// Whether at least one term occurs in `value`
    pub fn any_in(&self, value: Option<&str>) -> bool {
        match value {
            Some(v) if !self.is_empty() => {
                let haystack = fold_case(v);
                self.iter().any(|term| haystack.contains(term))
            }
            _ => false,
        }
    }
}

/// Lower-case `s` and map final sigma to sigma
///
/// `to_lowercase` picks `ς` or `σ` from the surrounding letters, so the same
/// word can lower-case differently as a short term and inside a longer value.
fn fold_case(s: &str) -> String {
    s.to_lowercase().replace('ς', "σ")
}
