// SPDX-License-Identifier: MPL-2.0
//! Forced-choice session state machine.
//!
//! A session walks a fixed number of steps over a shrinking pool of photos.
//! Each step presents two candidates; choosing one appends it to the
//! selection, removes it from the pool, and advances the step. The pair is
//! drawn once per step and stored, so a choice is always validated against
//! exactly what was presented.

use crate::catalog::PhotoId;
use crate::config::{CHOICES_PER_STEP, FINAL_STEP_INDEX, TOTAL_STEPS};
use crate::error::SessionError;
use crate::quiz::sampler;
use rand::rngs::SmallRng;

/// One quiz run: pool, selection, step counter, and the presented pair.
///
/// States are `AWAITING_CHOICE(step)` for step in `[0, TOTAL_STEPS)` and
/// `COMPLETE`. Each step accepts exactly one choice; a second `choose` on
/// the same step fails because the presented pair is consumed by the first.
#[derive(Debug)]
pub struct QuizSession {
    pool: Vec<PhotoId>,
    chosen: Vec<PhotoId>,
    step: usize,
    presented: Option<[PhotoId; 2]>,
    rng: SmallRng,
}

impl QuizSession {
    /// Starts a fresh session over `items`, shuffled into the pool.
    #[must_use]
    pub fn start(items: Vec<PhotoId>, mut rng: SmallRng) -> Self {
        let pool = sampler::shuffle(&items, &mut rng);
        Self {
            pool,
            chosen: Vec::with_capacity(TOTAL_STEPS),
            step: 0,
            presented: None,
            rng,
        }
    }

    /// Draws the pair of candidates for the current step.
    ///
    /// The draw is made once per step and stored; repeated calls within the
    /// same step return the stored pair so re-rendering never reshuffles the
    /// options under the user.
    pub fn present_choices(&mut self) -> Result<[PhotoId; 2], SessionError> {
        if let Some(pair) = &self.presented {
            return Ok(pair.clone());
        }

        if self.pool.len() < CHOICES_PER_STEP {
            return Err(SessionError::PoolExhausted {
                remaining: self.pool.len(),
            });
        }

        let picked = sampler::pick_random(&self.pool, CHOICES_PER_STEP, &mut self.rng);
        let pair = [picked[0].clone(), picked[1].clone()];
        self.presented = Some(pair.clone());
        Ok(pair)
    }

    /// Records the user's choice for the current step.
    ///
    /// The identifier must be one of the two photos returned by
    /// [`present_choices`](Self::present_choices); anything else is rejected.
    /// On success the photo moves from the pool to the selection, the step
    /// advances, and the presented pair is consumed so further input on this
    /// step has nothing left to act on.
    pub fn choose(&mut self, id: &PhotoId) -> Result<(), SessionError> {
        let Some(pair) = &self.presented else {
            return Err(SessionError::ChoiceNotPresented);
        };
        if !pair.contains(id) {
            return Err(SessionError::ChoiceNotPresented);
        }

        if let Some(position) = self.pool.iter().position(|candidate| candidate == id) {
            self.pool.remove(position);
        }
        self.chosen.push(id.clone());
        self.step += 1;
        self.presented = None;
        Ok(())
    }

    /// True exactly when the session sits on the last, obscured step.
    #[must_use]
    pub fn is_final_step(&self) -> bool {
        self.step == FINAL_STEP_INDEX
    }

    /// True once every step has received its choice.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Current 0-based step index; equals `TOTAL_STEPS` when complete.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Photos chosen so far, in choice order.
    pub fn chosen(&self) -> &[PhotoId] {
        &self.chosen
    }

    /// Photos still eligible for presentation.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// The stored pair for the current step, if one has been drawn.
    pub fn current_pair(&self) -> Option<&[PhotoId; 2]> {
        self.presented.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CATALOG_SIZE;
    use rand::SeedableRng;

    fn catalog_ids() -> Vec<PhotoId> {
        (0..CATALOG_SIZE)
            .map(|index| PhotoId::new(format!("photo-{index:02}.jpeg")))
            .collect()
    }

    fn session(seed: u64) -> QuizSession {
        QuizSession::start(catalog_ids(), SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn start_shuffles_full_pool() {
        let session = session(42);
        assert_eq!(session.pool_len(), CATALOG_SIZE);
        assert!(session.chosen().is_empty());
        assert_eq!(session.step(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn present_choices_is_stable_within_a_step() {
        let mut session = session(42);
        let first = session.present_choices().expect("pair should draw");
        let second = session.present_choices().expect("pair should draw");
        assert_eq!(first, second);
    }

    #[test]
    fn present_choices_draws_distinct_pool_members() {
        let mut session = session(7);
        let pair = session.present_choices().expect("pair should draw");
        assert_ne!(pair[0], pair[1]);
    }

    #[test]
    fn choose_moves_photo_from_pool_to_selection() {
        let mut session = session(42);
        let pair = session.present_choices().expect("pair should draw");

        session.choose(&pair[0]).expect("choice should land");

        assert_eq!(session.pool_len(), CATALOG_SIZE - 1);
        assert_eq!(session.chosen(), &[pair[0].clone()]);
        assert_eq!(session.step(), 1);
    }

    #[test]
    fn choose_rejects_identifier_outside_pair() {
        let mut session = session(42);
        let pair = session.present_choices().expect("pair should draw");

        let outsider = catalog_ids()
            .into_iter()
            .find(|id| !pair.contains(id))
            .expect("twelve photos leave outsiders");

        assert_eq!(
            session.choose(&outsider),
            Err(SessionError::ChoiceNotPresented)
        );
        assert_eq!(session.step(), 0);
        assert_eq!(session.pool_len(), CATALOG_SIZE);
    }

    #[test]
    fn choose_rejects_second_choice_on_same_step() {
        let mut session = session(42);
        let pair = session.present_choices().expect("pair should draw");

        session.choose(&pair[0]).expect("first choice should land");
        assert_eq!(
            session.choose(&pair[1]),
            Err(SessionError::ChoiceNotPresented)
        );
        assert_eq!(session.chosen().len(), 1);
    }

    #[test]
    fn choose_without_presentation_is_rejected() {
        let mut session = session(42);
        let id = PhotoId::new("photo-00.jpeg");
        assert_eq!(session.choose(&id), Err(SessionError::ChoiceNotPresented));
    }

    #[test]
    fn final_step_flag_tracks_index_five() {
        let mut session = session(3);
        for expected_step in 0..TOTAL_STEPS {
            assert_eq!(session.step(), expected_step);
            assert_eq!(session.is_final_step(), expected_step == FINAL_STEP_INDEX);
            let pair = session.present_choices().expect("pair should draw");
            session.choose(&pair[0]).expect("choice should land");
        }
        assert!(!session.is_final_step());
        assert!(session.is_complete());
    }

    #[test]
    fn full_run_selects_six_distinct_photos() {
        let mut session = session(99);

        for round in 1..=TOTAL_STEPS {
            let pair = session.present_choices().expect("pair should draw");
            session.choose(&pair[1]).expect("choice should land");
            assert_eq!(session.chosen().len(), round);
            assert_eq!(session.pool_len(), CATALOG_SIZE - round);
        }

        assert!(session.is_complete());
        assert_eq!(session.pool_len(), CATALOG_SIZE - TOTAL_STEPS);

        let mut unique = session.chosen().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), TOTAL_STEPS);
    }

    #[test]
    fn chosen_photo_never_returns_to_presentation() {
        let mut session = session(21);
        let mut seen = Vec::new();

        for _ in 0..TOTAL_STEPS {
            let pair = session.present_choices().expect("pair should draw");
            assert!(!seen.contains(&pair[0]));
            assert!(!seen.contains(&pair[1]));
            session.choose(&pair[0]).expect("choice should land");
            seen.push(pair[0].clone());
        }
    }

    #[test]
    fn pool_exhaustion_is_a_typed_error() {
        let two = vec![PhotoId::new("a.jpeg"), PhotoId::new("b.jpeg")];
        let mut session = QuizSession::start(two, SmallRng::seed_from_u64(1));

        let pair = session.present_choices().expect("pair should draw");
        session.choose(&pair[0]).expect("choice should land");

        assert_eq!(
            session.present_choices(),
            Err(SessionError::PoolExhausted { remaining: 1 })
        );
    }
}
