// history.rs - Ring of recent grid fingerprints for spotting repeats

const HISTORY_LEN: usize = 10;

/// Remembers the last few generations so a driver can stop once the
/// pattern has settled into a still life or short oscillation.
#[derive(Debug, Clone, Default)]
pub struct CycleHistory {
    hashes : [u64; HISTORY_LEN],
    count  : usize,
}

impl CycleHistory {
    pub fn new() -> Self { Self::default() }

    /// Records `fingerprint`; true when it was already among the recent ones.
    pub fn record(&mut self, fingerprint: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&fingerprint) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = fingerprint;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
