//! The `Dog` engine facade.
//!
//! Owns the single authoritative [`GameState`] and the random streams, and
//! exposes the harness operations: reset, state snapshots and injection,
//! legal action listing, action application and masked player views.
//!
//! ```
//! use dog_engine::{Dog, DogConfig};
//!
//! let mut game = Dog::new(DogConfig::default().with_seed(7)).unwrap();
//! let actions = game.get_list_action();
//! game.apply_action(actions.first()).unwrap();
//! assert_eq!(game.get_state().total_cards(), 110);
//! ```

use im::Vector;
use tracing::debug;

use crate::cards::Card;
use crate::core::{Action, ActionRecord, DogConfig, DogError, GameRng, GameState, PlayerId};
use crate::players::ActionPolicy;
use crate::rules::{new_game, swap_cards, DogRules, RulesEngine};

/// A Dog table.
#[derive(Clone, Debug)]
pub struct Dog {
    config: DogConfig,
    rules: DogRules,
    state: GameState,
    deal_rng: GameRng,
    policy_rng: GameRng,
    history: Vector<ActionRecord>,
}

impl Dog {
    /// Build an engine and deal the first game.
    pub fn new(config: DogConfig) -> Result<Self, DogError> {
        let rules = DogRules::new(&config)?;
        let root = GameRng::new(config.seed);
        let mut deal_rng = root.for_context("deal");
        let state = new_game(&config, &mut deal_rng);
        Ok(Self {
            policy_rng: root.for_context("policy"),
            config,
            rules,
            state,
            deal_rng,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DogConfig {
        &self.config
    }

    /// Start over with the configured seed. Produces the same deal every time.
    pub fn reset(&mut self) {
        self.reset_with_seed(self.config.seed);
    }

    /// Start over with a different seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        let root = GameRng::new(seed);
        self.deal_rng = root.for_context("deal");
        self.policy_rng = root.for_context("policy");
        self.state = new_game(&self.config, &mut self.deal_rng);
        self.history.clear();
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot of the full state.
    #[must_use]
    pub fn get_state(&self) -> GameState {
        self.state.clone()
    }

    /// Replace the state with an injected snapshot.
    ///
    /// The snapshot is checked first; a malformed one leaves the engine as it
    /// was. History restarts with the new state.
    pub fn set_state(&mut self, state: GameState) -> Result<(), DogError> {
        state.validate()?;
        self.state = state;
        self.history.clear();
        debug!(round = self.state.round, active = %self.state.active_player, "state injected");
        Ok(())
    }

    /// Legal actions of the active seat.
    #[must_use]
    pub fn get_list_action(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Apply an action of the active seat, or pass with `None`.
    pub fn apply_action(&mut self, action: Option<&Action>) -> Result<(), DogError> {
        let player = self.state.active_player;
        let round = self.state.round;
        let finished = self.rules.is_terminal(&self.state);

        self.rules.apply_action(&mut self.state, &mut self.deal_rng, action)?;

        if !finished {
            let sequence = self.history.len() as u32;
            self.history
                .push_back(ActionRecord::new(player, action.cloned(), round, sequence));
        }
        Ok(())
    }

    /// The state as one seat sees it.
    #[must_use]
    pub fn get_player_view(&self, player: PlayerId) -> GameState {
        self.state.masked_for(player)
    }

    /// Exchange one card between two seats.
    pub fn swap_cards(
        &mut self,
        first: PlayerId,
        second: PlayerId,
        first_card: Card,
        second_card: Card,
    ) -> Result<(), DogError> {
        swap_cards(&mut self.state, first, second, first_card, second_card)
    }

    /// Actions applied since the last reset or injection.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.rules.winner(&self.state)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rules.is_terminal(&self.state)
    }

    /// Let a policy make the active seat's next decision.
    ///
    /// Returns what was played (`None` for a pass).
    pub fn play_turn<P: ActionPolicy + ?Sized>(&mut self, policy: &P) -> Result<Option<Action>, DogError> {
        let view = self.get_player_view(self.state.active_player);
        let actions = self.get_list_action();
        let choice = policy.select_action(&view, &actions, &mut self.policy_rng);
        self.apply_action(choice.as_ref())?;
        Ok(choice)
    }
}
