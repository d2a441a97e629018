/// Limite inferior da faixa normal (inclusivo)
pub const NORMAL_LOWER_BPM: u32 = 60;
/// Limite superior da faixa normal (inclusivo)
pub const NORMAL_UPPER_BPM: u32 = 100;

/// Faixa de BPM considerada normal. Serve apenas para sinalizar leituras,
/// o corte do gerador é independente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalRange {
    lower: u32,
    upper: u32,
}

impl NormalRange {
    pub const STANDARD: NormalRange = NormalRange {
        lower: NORMAL_LOWER_BPM,
        upper: NORMAL_UPPER_BPM,
    };

    pub fn contains(&self, bpm: u32) -> bool {
        (self.lower..=self.upper).contains(&bpm)
    }

    pub fn is_abnormal(&self, bpm: u32) -> bool {
        !self.contains(bpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_range_bounds_are_inclusive() {
        let range = NormalRange::STANDARD;
        assert!(range.is_abnormal(59));
        assert!(!range.is_abnormal(60));
        assert!(!range.is_abnormal(100));
        assert!(range.is_abnormal(101));
        // independente do corte do gerador
        assert!(range.is_abnormal(40));
        assert!(range.is_abnormal(180));
    }
}
