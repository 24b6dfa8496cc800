/// Food eaten during the current round.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Score {
    count: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.add(1);
    }

    pub fn add(&mut self, points: u32) {
        self.count = self.count.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn score_counts_up_and_resets() {
        let mut score = Score::new();
        score.increment();
        score.add(2);
        assert_eq!(score.count(), 3);

        score.reset();
        assert_eq!(score.count(), 0);
    }
}
