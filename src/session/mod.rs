use crate::animator::{DealAnimator, DealTask, HoleCardReveal, Landing};
use crate::dealer::{DealerPolicy, DrawPacer};
use crate::deck::{Deck, RandomSource};
use crate::payout::{apply_payout, Settlement};
use crate::{
    Card, DealerDisplay, Hand, Outcome, Seat, SessionError, TableConfig, TableLayout, TableRules,
    WagerHolder,
};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Idle,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Things the host may want to react to (sound cues, button state). Taken with
/// [`Session::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RoundStarted { stake: u32 },
    CardLanded { card: Card, seat: Seat },
    RevealStarted,
    HoleCardRevealed,
    DealerTurnStarted,
    RoundResolved { outcome: Outcome, settlement: Settlement },
    WagerReturned { count: u32 },
}

/// One player against the dealer, advanced by [`Session::update`] once per frame.
///
/// Not internally synchronized; a host with several threads must funnel every call
/// through one of them.
pub struct Session<W, R> {
    rules: TableRules,
    layout: TableLayout,
    policy: DealerPolicy,
    deck: Deck,
    rng: R,
    wager: W,
    player: Hand,
    dealer: Hand,
    animator: DealAnimator,
    reveal: HoleCardReveal,
    pacer: DrawPacer,
    state: RoundState,
    outcome: Option<Outcome>,
    // Dealer natural waiting on the hole-card flip
    pending: Option<Outcome>,
    stake: u32,
    events: Vec<SessionEvent>,
}

impl<W: WagerHolder, R: RandomSource> Session<W, R> {
    pub fn new(wager: W, rng: R) -> Self {
        let rules = TableRules::default();
        Self {
            rules,
            layout: TableLayout::default(),
            policy: DealerPolicy::from_rules(&rules),
            deck: Deck::new(),
            rng,
            wager,
            player: Hand::new(),
            dealer: Hand::new(),
            animator: DealAnimator::new(),
            reveal: HoleCardReveal::default(),
            pacer: DrawPacer::new(rules.dealer_draw_delay),
            state: RoundState::Idle,
            outcome: None,
            pending: None,
            stake: 0,
            events: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: TableRules) -> Result<Self, SessionError> {
        rules.validate()?;
        self.rules = rules;
        self.policy = DealerPolicy::from_rules(&rules);
        self.pacer = DrawPacer::new(rules.dealer_draw_delay);
        Ok(self)
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_config(self, config: TableConfig) -> Result<Self, SessionError> {
        Ok(self.with_rules(config.rules)?.with_layout(config.layout))
    }

    /// Replace the shoe, e.g. with [`Deck::stacked`] to replay a known deal.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// Shuffle and deal a new round against the wager currently in the slot.
    pub fn start_round(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, RoundState::Idle | RoundState::Resolved) {
            warn!("start_round rejected: round in progress ({:?})", self.state);
            return Err(SessionError::RoundInProgress);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if !self.wager.has_item() || self.wager.stack_count() == 0 {
            debug!("start_round rejected: empty bet slot");
            return Err(SessionError::InvalidWager);
        }

        self.state = RoundState::Idle;
        self.clear_table();
        self.deck.shuffle(&mut self.rng);
        self.stake = self.wager.stack_count();
        self.state = RoundState::Dealing;
        info!("Round started with stake {}", self.stake);
        self.events.push(SessionEvent::RoundStarted { stake: self.stake });

        for seat in [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer] {
            if let Err(err) = self.deal_to(seat) {
                self.force_resolve(err);
                break;
            }
        }
        Ok(())
    }

    pub fn hit(&mut self) -> Result<(), SessionError> {
        self.ensure_player_can_act()?;
        debug!("Player hits on {}", self.player.value());
        self.deal_to(Seat::Player).map_err(|err| {
            self.force_resolve(err.clone());
            err
        })
    }

    pub fn stand(&mut self) -> Result<(), SessionError> {
        self.ensure_player_can_act()?;
        debug!("Player stands on {}", self.player.value());
        self.enter_dealer_turn();
        self.step_dealer();
        Ok(())
    }

    /// Advance animations and the dealer by one tick.
    pub fn update(&mut self) {
        if self.reveal.tick(self.rules.reveal_speed) {
            self.events.push(SessionEvent::HoleCardRevealed);
        }

        if let Some(landing) = self.animator.tick(self.rules.deal_speed) {
            self.land(landing);
        }

        match self.state {
            RoundState::Dealing if self.reveal.is_revealed() => {
                if let Some(outcome) = self.pending.take() {
                    self.resolve(outcome);
                }
            }
            RoundState::DealerTurn if !self.animator.is_busy() => self.step_dealer(),
            _ => {}
        }
    }

    /// Abandon the round and return the wager to the host. Valid from every state.
    pub fn reset(&mut self) -> Option<(W::Kind, u32)> {
        self.clear_table();
        self.state = RoundState::Idle;
        self.stake = 0;

        let returned = self.wager.withdraw_all();
        if let Some((_, count)) = &returned {
            info!("Session reset, returned {count} to the player");
            self.events.push(SessionEvent::WagerReturned { count: *count });
        }
        returned
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            RoundState::Dealing | RoundState::PlayerTurn | RoundState::DealerTurn
        )
    }

    /// True while any card is moving or the hole card is turning.
    pub fn is_busy(&self) -> bool {
        self.animator.is_busy() || self.reveal.is_flipping()
    }

    /// Whether hit/stand would be accepted right now.
    pub fn can_act(&self) -> bool {
        self.state == RoundState::PlayerTurn && !self.is_busy()
    }

    pub fn status_key(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::status_key)
    }

    pub fn status_text(&self) -> &'static str {
        self.outcome.map_or("", Outcome::default_text)
    }

    pub fn player_hand_value(&self) -> u8 {
        self.player.value()
    }

    pub fn dealer_display_value(&self) -> DealerDisplay {
        let cards = self.dealer.cards();
        match cards {
            [_, up, ..] if self.is_active() && !self.reveal.is_revealed() => {
                DealerDisplay::Partial(up.face_value())
            }
            [_, _, ..] => DealerDisplay::Full(self.dealer.value()),
            _ => DealerDisplay::Pending,
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn in_flight(&self) -> Option<&DealTask> {
        self.animator.in_flight()
    }

    pub fn animator(&self) -> &DealAnimator {
        &self.animator
    }

    pub fn reveal(&self) -> &HoleCardReveal {
        &self.reveal
    }

    /// Stack in the slot when the current round was dealt.
    pub fn stake(&self) -> u32 {
        self.stake
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn wager(&self) -> &W {
        &self.wager
    }

    /// The host places bets through this between rounds.
    pub fn wager_mut(&mut self) -> &mut W {
        &mut self.wager
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn clear_table(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.animator.clear();
        self.reveal.reset();
        self.pacer.clear();
        self.outcome = None;
        self.pending = None;
    }

    fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    fn ensure_player_can_act(&self) -> Result<(), SessionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(SessionError::NotPlayerTurn);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    /// Draw a card and queue its flight. The hand only changes when it lands.
    fn deal_to(&mut self, seat: Seat) -> Result<(), SessionError> {
        let card = self.deck.draw()?;
        let landed = match seat {
            Seat::Player => self.player.len(),
            Seat::Dealer => self.dealer.len(),
        };
        let index = landed + self.animator.pending_for(seat);
        let end = self.layout.card_end_position(seat, index, index + 1);
        self.animator
            .enqueue(card, seat, self.layout.shoe_position(), end);
        Ok(())
    }

    fn land(&mut self, landing: Landing) {
        let Landing { card, target } = landing;
        self.hand_mut(target).add_card(card);
        debug!("{card} landed for {target:?}");
        self.events.push(SessionEvent::CardLanded { card, seat: target });

        match self.state {
            RoundState::Dealing
                if !self.animator.is_busy() && self.player.len() == 2 && self.dealer.len() == 2 =>
            {
                self.check_naturals();
            }
            RoundState::PlayerTurn if target == Seat::Player => {
                let value = self.player.value();
                if value > 21 {
                    self.resolve(Outcome::PlayerBust);
                } else if value == 21 {
                    self.enter_dealer_turn();
                }
            }
            _ => {}
        }
    }

    fn check_naturals(&mut self) {
        match (self.player.is_natural(), self.dealer.is_natural()) {
            (true, true) => self.resolve(Outcome::PushBlackjack),
            (true, false) => self.resolve(Outcome::PlayerBlackjack),
            (false, true) => {
                self.start_reveal();
                self.pending = Some(Outcome::DealerBlackjackLoss);
            }
            (false, false) => self.state = RoundState::PlayerTurn,
        }
    }

    /// Callers take the first dealer step. Inside `update` that is the dealer arm,
    /// so the pacer ticks once per frame.
    fn enter_dealer_turn(&mut self) {
        self.state = RoundState::DealerTurn;
        self.events.push(SessionEvent::DealerTurnStarted);
        self.pacer.arm();
        self.start_reveal();
    }

    /// One dealer decision, if the inter-draw delay has run out.
    fn step_dealer(&mut self) {
        if !self.pacer.ready() {
            return;
        }

        if self.policy.should_draw(self.dealer.cards()) {
            debug!("Dealer draws on {}", self.dealer.value());
            match self.deal_to(Seat::Dealer) {
                Ok(()) => self.pacer.arm(),
                Err(err) => self.force_resolve(err),
            }
        } else {
            debug!("Dealer stands on {}", self.dealer.value());
            let outcome = Outcome::from_totals(self.player.value(), self.dealer.value());
            self.resolve(outcome);
        }
    }

    fn start_reveal(&mut self) {
        if self.reveal.start() {
            self.events.push(SessionEvent::RevealStarted);
        }
    }

    fn force_resolve(&mut self, err: SessionError) {
        warn!("{err}; forcing the round to a push");
        self.resolve(Outcome::Push);
    }

    fn resolve(&mut self, outcome: Outcome) {
        if let Some(existing) = self.outcome {
            error!("Round already resolved as {existing:?}, ignoring {outcome:?}");
            debug_assert!(false, "round resolved twice");
            return;
        }

        self.outcome = Some(outcome);
        self.pending = None;
        self.state = RoundState::Resolved;
        self.start_reveal();

        let settlement = apply_payout(&mut self.wager, outcome, self.rules.blackjack_payout);
        info!(
            "Round resolved: {:?} (player {}, dealer {}), stake {} -> {}",
            outcome,
            self.player.value(),
            self.dealer.value(),
            settlement.stake,
            settlement.total
        );
        self.events.push(SessionEvent::RoundResolved {
            outcome,
            settlement,
        });
    }
}
