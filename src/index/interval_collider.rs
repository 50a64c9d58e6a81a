/// A stabbing index over one-dimensional intervals.
///
/// Entries are sorted by interval start with a running maximum of interval
/// ends, so a stab query walks only the prefix that can still contain the
/// probe value. Used for the y-extent lookup in ray casting.
pub struct IntervalCollider<T> {
    entries: Vec<(f64, f64, T)>,
    max_end_through: Vec<f64>,
}

impl<T> IntervalCollider<T> {
    /// Builds the index from `elements`, using `interval` to extract each
    /// `(start, end)` pair. Reversed pairs are normalized.
    pub fn new(elements: Vec<T>, interval: impl Fn(&T) -> (f64, f64)) -> Self {
        let mut entries: Vec<(f64, f64, T)> = elements
            .into_iter()
            .map(|e| {
                let (a, b) = interval(&e);
                (a.min(b), a.max(b), e)
            })
            .collect();
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut max_end_through = Vec::with_capacity(entries.len());
        let mut running = f64::NEG_INFINITY;
        for &(_, end, _) in &entries {
            running = running.max(end);
            max_end_through.push(running);
        }
        Self {
            entries,
            max_end_through,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every element whose interval contains `value` (endpoints inclusive).
    pub fn stab(&self, value: f64) -> impl Iterator<Item = &T> {
        let upper = self.entries.partition_point(|&(start, _, _)| start <= value);
        self.entries[..upper]
            .iter()
            .enumerate()
            .rev()
            .take_while(move |&(i, _)| self.max_end_through[i] >= value)
            .filter_map(move |(_, &(_, end, ref e))| (end >= value).then_some(e))
    }
}
