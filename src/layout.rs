use crate::Seat;
use serde::{Deserialize, Serialize};

const CARD_ASPECT: f32 = 1.422;
const STACK_ASPECT: f32 = 1.509;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}

/// Panel geometry used to place dealt cards. Rows are scaled by `ui_scale`, spacing is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub origin: Position,
    pub width: f32,
    pub height: f32,
    pub card_width: f32,
    pub ui_scale: f32,
    pub card_spacing: f32,
    pub player_row: f32,
    pub dealer_row: f32,
    pub shoe_margin: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            origin: Position::default(),
            width: 1280.0,
            height: 720.0,
            card_width: 120.0,
            ui_scale: 0.8,
            card_spacing: 150.0,
            player_row: 340.0,
            dealer_row: 30.0,
            shoe_margin: 20.0,
        }
    }
}

impl TableLayout {
    pub fn card_width_px(&self) -> f32 {
        self.card_width * self.ui_scale
    }

    pub fn card_height_px(&self) -> f32 {
        self.card_width_px() * CARD_ASPECT
    }

    pub fn stack_height_px(&self) -> f32 {
        self.card_width_px() * STACK_ASPECT
    }

    /// Top-left of the shoe; every card starts its flight here.
    pub fn shoe_position(&self) -> Position {
        Position::new(
            self.origin.x + self.width - self.card_width_px() - self.shoe_margin,
            self.origin.y + self.height / 2.0 - self.stack_height_px() / 2.0,
        )
    }

    /// Where card `index` of a hand holding `count` cards comes to rest.
    pub fn card_end_position(&self, seat: Seat, index: usize, count: usize) -> Position {
        let centre_x = self.origin.x + self.width / 2.0;
        let average = (1 + count) as f32 / 2.0;
        let x = centre_x - ((index + 1) as f32 - average) * self.card_spacing
            - self.card_width_px() / 2.0;
        let row = match seat {
            Seat::Player => self.player_row,
            Seat::Dealer => self.dealer_row,
        };
        Position::new(x, self.origin.y + row * self.ui_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_single_card_is_centred() {
        let layout = TableLayout::default();
        let pos = layout.card_end_position(Seat::Player, 0, 1);
        assert!(close(pos.x, 592.0));
        assert!(close(pos.y, 272.0));
    }

    #[test]
    fn test_two_cards_straddle_centre() {
        let layout = TableLayout::default();
        let first = layout.card_end_position(Seat::Dealer, 0, 2);
        let second = layout.card_end_position(Seat::Dealer, 1, 2);
        assert!(close(first.x, 667.0));
        assert!(close(second.x, 517.0));
        assert!(close(first.y, 24.0));
    }

    #[test]
    fn test_origin_offsets_positions() {
        let layout = TableLayout {
            origin: Position::new(400.0, 100.0),
            ..TableLayout::default()
        };
        let pos = layout.card_end_position(Seat::Player, 0, 1);
        assert!(close(pos.x, 992.0));
        assert!(close(pos.y, 372.0));
    }

    #[test]
    fn test_shoe_position() {
        let shoe = TableLayout::default().shoe_position();
        assert!(close(shoe.x, 1164.0));
        assert!(close(shoe.y, 287.568));
    }

    #[test]
    fn test_lerp() {
        let a = Position::new(0.0, 10.0);
        let b = Position::new(100.0, 20.0);
        let mid = Position::lerp(a, b, 0.5);
        assert!(close(mid.x, 50.0));
        assert!(close(mid.y, 15.0));
        assert_eq!(Position::lerp(a, b, 1.0), b);
    }
}
