//! Match scores are display-only literals. Views that show them add a small
//! random wobble so the numbers look live; nothing is ever computed.

use rand::Rng;

use crate::models::favorite::Favorite;
use crate::models::job::JobPosting;
use crate::models::talent::TalentProfile;

pub trait MatchScored {
    fn match_score_mut(&mut self) -> &mut u8;
}

impl MatchScored for JobPosting {
    fn match_score_mut(&mut self) -> &mut u8 {
        &mut self.match_score
    }
}

impl MatchScored for TalentProfile {
    fn match_score_mut(&mut self) -> &mut u8 {
        &mut self.match_score
    }
}

impl MatchScored for Favorite {
    fn match_score_mut(&mut self) -> &mut u8 {
        &mut self.match_score
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreJitter {
    max: u8,
}

impl ScoreJitter {
    pub fn new(max: u8) -> Self {
        Self { max }
    }

    pub fn is_enabled(&self) -> bool {
        self.max > 0
    }

    /// Applies a uniform offset in `-max..=max`, clamped to 0–100.
    pub fn perturb<R: Rng + ?Sized>(&self, score: u8, rng: &mut R) -> u8 {
        if !self.is_enabled() {
            return score;
        }
        let max = i16::from(self.max);
        let offset = rng.random_range(-max..=max);
        (i16::from(score) + offset).clamp(0, 100) as u8
    }

    pub fn apply_all<T: MatchScored>(&self, records: &mut [T]) {
        if !self.is_enabled() {
            return;
        }
        let mut rng = rand::rng();
        for record in records {
            let score = record.match_score_mut();
            *score = self.perturb(*score, &mut rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_disabled_jitter_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let jitter = ScoreJitter::new(0);
        for score in [0, 42, 100] {
            assert_eq!(jitter.perturb(score, &mut rng), score);
        }
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let jitter = ScoreJitter::new(5);
        for _ in 0..500 {
            let score = jitter.perturb(80, &mut rng);
            assert!((75..=85).contains(&score), "got {score}");
        }
    }

    #[test]
    fn test_jitter_clamps_to_percentage() {
        let mut rng = StdRng::seed_from_u64(1);
        let jitter = ScoreJitter::new(10);
        for _ in 0..500 {
            assert!(jitter.perturb(98, &mut rng) <= 100);
            let low = jitter.perturb(2, &mut rng);
            assert!(low <= 12);
        }
    }

    #[test]
    fn test_apply_all_touches_every_record() {
        let mut jobs = crate::catalog::fixtures::jobs();
        let original: Vec<u8> = jobs.iter().map(|j| j.match_score).collect();
        ScoreJitter::new(3).apply_all(&mut jobs);
        for (job, before) in jobs.iter().zip(original) {
            assert!(job.match_score.abs_diff(before) <= 3);
        }
    }
}
