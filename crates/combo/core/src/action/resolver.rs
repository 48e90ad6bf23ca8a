//! Combo resolution over an [`ActionCatalog`].
//!
//! The resolver narrows the catalog to the chains still consistent with the
//! commands observed since the opener. Follow-up commands are accepted
//! provisionally and only committed when the presentation layer reports that
//! the current step reached its decision point, at which time hit
//! requirements are checked.

use super::{ActionCatalog, ActionChain, ActionCommand, ActionStep, LocomotionMode};

/// Animation index reported when no step is active.
pub const NO_ACTION: u32 = 0;

/// Per-character combo progress.
///
/// Created once per character and reset whenever action mode ends. Only
/// [`ComboResolver`] mutates it; read accessors are available directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboState {
    /// Catalog indices still consistent with observed input, in catalog order.
    candidates: Vec<usize>,
    /// Chain the active step was taken from.
    active_chain: Option<usize>,
    active_step: Option<ActionStep>,
    /// Next chain position to match.
    step_index: usize,
    /// No further advancement is possible for this activation.
    locked: bool,
    /// A follow-up command was accepted and awaits the decision point.
    pending_advance: bool,
    hit_registered: bool,
    /// A new step was selected and not yet consumed by the presentation layer.
    ready: bool,
}

impl ComboState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a step is executing.
    pub fn is_active(&self) -> bool {
        self.active_step.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn active_step(&self) -> Option<&ActionStep> {
        self.active_step.as_ref()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn hit_registered(&self) -> bool {
        self.hit_registered
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Animation index of the active step, or [`NO_ACTION`].
    pub fn current_animation_index(&self) -> u32 {
        self.active_step
            .map(|step| step.animation_index)
            .unwrap_or(NO_ACTION)
    }

    /// Returns and clears the "new step selected" flag.
    ///
    /// Poll once per tick and apply [`Self::current_animation_index`] only
    /// when this returns true, so each step triggers its animation once.
    pub fn take_ready(&mut self) -> bool {
        core::mem::take(&mut self.ready)
    }

    /// Name of the chain the active step belongs to.
    pub fn active_chain_name<'c>(&self, catalog: &'c ActionCatalog) -> Option<&'c str> {
        self.active_chain
            .and_then(|index| catalog.get(index))
            .map(|chain| chain.name.as_str())
    }

    /// Returns to the idle state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Combo transitions for one character over a shared catalog.
///
/// ```
/// use combo_core::{ActionCatalog, ActionChain, ActionCommand, ActionStep};
/// use combo_core::{ComboResolver, ComboState, LocomotionFlags, LocomotionMode};
///
/// let catalog = ActionCatalog::new(vec![ActionChain::new(
///     "Jab",
///     LocomotionFlags::STILL,
///     vec![ActionStep::new(ActionCommand::FastAttack, 7)],
/// )])
/// .unwrap();
/// let mut state = ComboState::new();
///
/// let started = ComboResolver::new(&catalog, &mut state)
///     .start_action(ActionCommand::FastAttack, LocomotionMode::Still);
/// assert!(started);
/// assert_eq!(state.current_animation_index(), 7);
/// ```
pub struct ComboResolver<'a> {
    catalog: &'a ActionCatalog,
    state: &'a mut ComboState,
}

impl<'a> ComboResolver<'a> {
    pub fn new(catalog: &'a ActionCatalog, state: &'a mut ComboState) -> Self {
        Self { catalog, state }
    }

    /// Attempts to open a combo with `command` from `mode`.
    ///
    /// Returns false and leaves the state untouched when no chain matches.
    /// On success the caller must enter action mode and zero locomotion
    /// velocity.
    pub fn start_action(&mut self, command: ActionCommand, mode: LocomotionMode) -> bool {
        let candidates: Vec<usize> = self.catalog.openers(command, mode).collect();
        let Some(&first) = candidates.first() else {
            tracing::debug!(%command, %mode, "no chain opens with command");
            return false;
        };

        let step = self.chain(first).steps[0];
        tracing::debug!(
            chain = %self.chain(first).name,
            candidates = candidates.len(),
            animation = step.animation_index,
            "combo started"
        );

        *self.state = ComboState {
            candidates,
            active_chain: Some(first),
            active_step: Some(step),
            step_index: 1,
            locked: false,
            pending_advance: false,
            hit_registered: false,
            ready: true,
        };
        true
    }

    /// Offers a follow-up command while the current step is executing.
    ///
    /// A second follow-up issued before the first one was committed locks
    /// the combo: the accepted follow-up still plays, but nothing after it.
    pub fn add_action(&mut self, command: ActionCommand) {
        if self.state.locked || self.state.active_step.is_none() {
            return;
        }

        if self.state.pending_advance {
            tracing::debug!(%command, "follow-up before decision point, combo locked");
            self.state.locked = true;
            return;
        }

        let index = self.state.step_index;
        let catalog = self.catalog;
        self.state.candidates.retain(|&chain| {
            catalog.chains()[chain]
                .step(index)
                .is_some_and(|step| step.command == command)
        });

        if self.state.candidates.is_empty() {
            tracing::debug!(%command, step = index, "no chain continues, combo unextendable");
            self.state.locked = true;
        } else {
            self.state.pending_advance = true;
        }
    }

    /// Records that the executing step connected with a target.
    pub fn register_hit(&mut self) {
        if self.state.active_step.is_some() {
            self.state.hit_registered = true;
        }
    }

    /// Commits a provisionally accepted follow-up at the step's decision point.
    ///
    /// Candidates whose next step requires a hit are dropped unless a hit was
    /// registered during the current step. If none remain the combo ends.
    pub fn next_action(&mut self) {
        if !self.state.pending_advance {
            return;
        }
        self.state.pending_advance = false;

        let index = self.state.step_index;
        let hit = self.state.hit_registered;
        let catalog = self.catalog;
        self.state.candidates.retain(|&chain| {
            catalog.chains()[chain]
                .step(index)
                .is_some_and(|step| !step.requires_hit || hit)
        });

        let Some(&first) = self.state.candidates.first() else {
            tracing::debug!(step = index, hit, "follow-up rejected, combo ended");
            self.state.active_step = None;
            self.state.active_chain = None;
            return;
        };

        let step = self.chain(first).steps[index];
        tracing::debug!(
            chain = %self.chain(first).name,
            step = index,
            animation = step.animation_index,
            "combo advanced"
        );

        self.state.active_chain = Some(first);
        self.state.active_step = Some(step);
        self.state.step_index += 1;
        self.state.hit_registered = false;
        self.state.ready = true;
    }

    /// Animation index of the active step, or [`NO_ACTION`].
    pub fn current_animation_index(&self) -> u32 {
        self.state.current_animation_index()
    }

    /// Returns and clears the "new step selected" flag.
    pub fn take_ready(&mut self) -> bool {
        self.state.take_ready()
    }

    fn chain(&self, index: usize) -> &'a ActionChain {
        &self.catalog.chains()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::LocomotionFlags;
    use ActionCommand::*;

    fn combo1_catalog() -> ActionCatalog {
        ActionCatalog::new(vec![ActionChain::new(
            "Combo1",
            LocomotionFlags::STILL,
            vec![
                ActionStep::new(FastAttack, 1),
                ActionStep::new(FastAttack, 2).on_hit(),
            ],
        )])
        .unwrap()
    }

    fn branching_catalog() -> ActionCatalog {
        ActionCatalog::new(vec![
            ActionChain::new(
                "Rush",
                LocomotionFlags::STILL | LocomotionFlags::WALKING,
                vec![
                    ActionStep::new(FastAttack, 1),
                    ActionStep::new(FastAttack, 2),
                    ActionStep::new(FastAttack, 3),
                ],
            ),
            ActionChain::new(
                "Crusher",
                LocomotionFlags::STILL,
                vec![
                    ActionStep::new(FastAttack, 10),
                    ActionStep::new(SlowAttack, 11).on_hit(),
                ],
            ),
            ActionChain::new(
                "Sweep",
                LocomotionFlags::STILL,
                vec![
                    ActionStep::new(FastAttack, 20),
                    ActionStep::new(SlowAttack, 21),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn start_fails_without_matching_opener() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        assert!(!resolver.start_action(SlowAttack, LocomotionMode::Still));
        assert!(!resolver.start_action(FastAttack, LocomotionMode::Running));
        assert_eq!(state, ComboState::default());
    }

    #[test]
    fn start_selects_first_step_and_flags_ready() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();

        assert!(
            ComboResolver::new(&catalog, &mut state).start_action(FastAttack, LocomotionMode::Still)
        );
        assert_eq!(state.current_animation_index(), 1);
        assert_eq!(state.step_index(), 1);
        assert!(state.take_ready());
        assert!(!state.take_ready());
        assert_eq!(state.active_chain_name(&catalog), Some("Combo1"));
    }

    #[test]
    fn hit_gated_step_ends_combo_without_hit() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.take_ready();
        resolver.add_action(FastAttack);
        resolver.next_action();

        assert_eq!(resolver.current_animation_index(), NO_ACTION);
        assert!(!resolver.take_ready());
        assert!(!state.is_active());
    }

    #[test]
    fn hit_gated_step_advances_with_hit() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.take_ready();
        resolver.register_hit();
        resolver.add_action(FastAttack);
        resolver.next_action();

        assert_eq!(resolver.current_animation_index(), 2);
        assert!(resolver.take_ready());
        assert!(!state.hit_registered());
        assert_eq!(state.step_index(), 2);
    }

    #[test]
    fn repeated_hits_are_idempotent() {
        let catalog = combo1_catalog();
        let mut once = ComboState::new();
        let mut many = ComboState::new();

        let mut resolver = ComboResolver::new(&catalog, &mut once);
        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.register_hit();
        resolver.add_action(FastAttack);
        resolver.next_action();

        let mut resolver = ComboResolver::new(&catalog, &mut many);
        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.register_hit();
        resolver.register_hit();
        resolver.add_action(FastAttack);
        resolver.register_hit();
        resolver.next_action();

        assert_eq!(once, many);
    }

    #[test]
    fn follow_up_narrows_to_matching_chains() {
        let catalog = branching_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        assert!(resolver.start_action(FastAttack, LocomotionMode::Still));
        assert_eq!(resolver.current_animation_index(), 1);

        // Crusher requires a hit, so Sweep is the first surviving candidate.
        resolver.add_action(SlowAttack);
        resolver.next_action();
        assert_eq!(resolver.current_animation_index(), 21);
        assert_eq!(state.active_chain_name(&catalog), Some("Sweep"));
    }

    #[test]
    fn follow_up_with_hit_prefers_earlier_chain() {
        let catalog = branching_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.register_hit();
        resolver.add_action(SlowAttack);
        resolver.next_action();
        assert_eq!(resolver.current_animation_index(), 11);
    }

    #[test]
    fn unmatched_follow_up_locks_but_keeps_current_step() {
        let catalog = branching_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.add_action(Dodge);
        resolver.next_action();

        assert_eq!(resolver.current_animation_index(), 1);
        assert!(state.is_locked());
        assert!(state.is_active());
    }

    #[test]
    fn second_follow_up_before_decision_point_caps_combo() {
        let catalog = branching_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Walking);
        resolver.add_action(FastAttack);
        resolver.add_action(FastAttack);
        resolver.next_action();
        assert_eq!(resolver.current_animation_index(), 2);

        // Locked: the third Rush step can no longer be reached.
        resolver.add_action(FastAttack);
        resolver.next_action();
        assert_eq!(resolver.current_animation_index(), 2);
        assert!(state.is_locked());
    }

    #[test]
    fn full_chain_then_exhaustion() {
        let catalog = branching_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Walking);
        for expected in [2, 3] {
            resolver.add_action(FastAttack);
            resolver.next_action();
            assert_eq!(resolver.current_animation_index(), expected);
        }

        // Past the end of every chain.
        resolver.add_action(FastAttack);
        assert!(state.is_locked());
        assert_eq!(state.current_animation_index(), 3);
    }

    #[test]
    fn operations_without_active_step_are_no_ops() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.add_action(FastAttack);
        resolver.register_hit();
        resolver.next_action();

        assert!(!resolver.take_ready());
        assert_eq!(state, ComboState::default());
    }

    #[test]
    fn next_action_without_follow_up_keeps_step() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        let mut resolver = ComboResolver::new(&catalog, &mut state);

        resolver.start_action(FastAttack, LocomotionMode::Still);
        resolver.take_ready();
        resolver.next_action();

        assert_eq!(resolver.current_animation_index(), 1);
        assert!(!resolver.take_ready());
    }

    #[test]
    fn reset_returns_to_idle() {
        let catalog = combo1_catalog();
        let mut state = ComboState::new();
        ComboResolver::new(&catalog, &mut state).start_action(FastAttack, LocomotionMode::Still);

        state.reset();
        assert_eq!(state, ComboState::default());
        assert_eq!(state.current_animation_index(), NO_ACTION);
    }
}
